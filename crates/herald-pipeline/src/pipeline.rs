use std::fmt;
use std::path::Path;

use herald_core::HeraldError;

use crate::artifact;
use crate::github::GitHubClient;
use crate::llm::{ChatMessage, LlmClient, Role};
use crate::prompt;

/// Fixed prefix prepended to the completion text when commenting on a PR.
pub const REVIEW_COMMENT_PREFIX: &str = "\u{1f916} AI Review\n\n";

/// Fixed title for the audit issue.
pub const AUDIT_ISSUE_TITLE: &str = "\u{1f916} Architecture Audit Report";

/// Statistics about a completed pipeline run.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Characters of artifact content sent to the completion service.
    pub artifact_chars: usize,
    /// Whether the snapshot was cut at the character budget.
    pub truncated: bool,
    /// Model identifier used for the run.
    pub model_used: String,
}

/// Result of a review pipeline run.
#[derive(Debug, Clone)]
pub enum ReviewOutcome {
    /// The diff was empty or whitespace-only; nothing was sent anywhere.
    EmptyDiff,
    /// A review was generated and handed to the publisher.
    Posted(RunStats),
}

/// Result of an audit pipeline run.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    /// Statistics about the run.
    pub stats: RunStats,
}

/// PR review pipeline: diff artifact -> completion -> PR comment.
///
/// Straight-line flow with one early exit (blank diff). Exactly one
/// completion call and one publish call per run, in that order.
pub struct ReviewPipeline {
    llm: LlmClient,
    github: GitHubClient,
    pr_number: u64,
}

impl ReviewPipeline {
    /// Create a pipeline from the two clients and the target PR number.
    pub fn new(llm: LlmClient, github: GitHubClient, pr_number: u64) -> Self {
        Self {
            llm,
            github,
            pr_number,
        }
    }

    /// Run the review: read the diff at `diff_path`, ask the model for a
    /// review, post it as a PR comment.
    ///
    /// A blank diff returns [`ReviewOutcome::EmptyDiff`] before any network
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Io`] if the artifact cannot be read,
    /// [`HeraldError::Llm`] if the completion call fails, or
    /// [`HeraldError::Publish`] if the comment cannot be delivered.
    pub async fn run(&self, diff_path: &Path) -> Result<ReviewOutcome, HeraldError> {
        let diff = artifact::read_lossy(diff_path)?;
        if artifact::is_blank(&diff) {
            return Ok(ReviewOutcome::EmptyDiff);
        }

        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: prompt::review_system_prompt(),
            },
            ChatMessage {
                role: Role::User,
                content: prompt::review_user_prompt(&diff),
            },
        ];
        let review = self.llm.chat(messages).await?;

        let comment = format!("{REVIEW_COMMENT_PREFIX}{review}");
        self.github
            .post_issue_comment(self.pr_number, &comment)
            .await?;

        Ok(ReviewOutcome::Posted(RunStats {
            artifact_chars: diff.chars().count(),
            truncated: false,
            model_used: self.llm.model().to_string(),
        }))
    }
}

/// Architecture audit pipeline: snapshot artifact -> completion -> new issue.
pub struct AuditPipeline {
    llm: LlmClient,
    github: GitHubClient,
}

impl AuditPipeline {
    /// Create a pipeline from the two clients.
    pub fn new(llm: LlmClient, github: GitHubClient) -> Self {
        Self { llm, github }
    }

    /// Run the audit: read the snapshot at `snapshot_path`, cap it at
    /// `budget` characters, ask the model for an audit report, open an issue
    /// with the result.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Io`] if the artifact cannot be read,
    /// [`HeraldError::Llm`] if the completion call fails, or
    /// [`HeraldError::Publish`] if the issue cannot be delivered.
    pub async fn run(
        &self,
        snapshot_path: &Path,
        budget: usize,
    ) -> Result<AuditOutcome, HeraldError> {
        let snapshot = artifact::read_lossy(snapshot_path)?;
        let truncated = snapshot.chars().count() > budget;
        let capped = artifact::truncate_to_budget(&snapshot, budget);

        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: prompt::audit_system_prompt(),
            },
            ChatMessage {
                role: Role::User,
                content: prompt::audit_user_prompt(&capped),
            },
        ];
        let report = self.llm.chat(messages).await?;

        self.github.create_issue(AUDIT_ISSUE_TITLE, &report).await?;

        Ok(AuditOutcome {
            stats: RunStats {
                artifact_chars: capped.chars().count(),
                truncated,
                model_used: self.llm.model().to_string(),
            },
        })
    }
}

impl fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewOutcome::EmptyDiff => write!(f, "Empty diff"),
            ReviewOutcome::Posted(stats) => write!(
                f,
                "Posted review ({} chars reviewed, model: {})",
                stats.artifact_chars, stats.model_used
            ),
        }
    }
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Filed audit report ({} chars audited{}, model: {})",
            self.stats.artifact_chars,
            if self.stats.truncated {
                ", truncated"
            } else {
                ""
            },
            self.stats.model_used
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_prefix_matches_publish_format() {
        assert_eq!(REVIEW_COMMENT_PREFIX, "🤖 AI Review\n\n");
        assert_eq!(AUDIT_ISSUE_TITLE, "🤖 Architecture Audit Report");
    }

    #[test]
    fn outcomes_render_for_ci_logs() {
        let outcome = ReviewOutcome::Posted(RunStats {
            artifact_chars: 120,
            truncated: false,
            model_used: "gpt-4.1-mini".into(),
        });
        assert!(outcome.to_string().contains("120 chars"));
        assert_eq!(ReviewOutcome::EmptyDiff.to_string(), "Empty diff");

        let audit = AuditOutcome {
            stats: RunStats {
                artifact_chars: 150_000,
                truncated: true,
                model_used: "gpt-4.1-mini".into(),
            },
        };
        assert!(audit.to_string().contains("truncated"));
    }
}
