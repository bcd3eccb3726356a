use crate::error::HeraldError;

const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Completion service settings read from the environment.
///
/// `OPENAI_API_KEY` is required. `HERALD_MODEL` and `OPENAI_BASE_URL` are
/// optional overrides.
#[derive(Debug, Clone)]
pub struct LlmEnv {
    /// API key for the completion service.
    pub api_key: String,
    /// Model identifier (default: `gpt-4.1-mini`).
    pub model: String,
    /// Custom base URL for API requests.
    pub base_url: Option<String>,
}

/// GitHub settings read from the environment.
///
/// `REPO` (in `owner/name` form) and `GITHUB_TOKEN` are required.
/// `GITHUB_API_URL` is an optional override.
#[derive(Debug, Clone)]
pub struct GithubEnv {
    /// Repository identifier in `owner/name` form.
    pub repo: String,
    /// Bearer token for the GitHub REST API.
    pub token: String,
    /// Custom base URL for API requests.
    pub api_base: Option<String>,
}

/// Configuration for the PR review pipeline.
///
/// Loaded once at startup; any missing required value aborts the run before
/// the artifact is read or any network call is made.
///
/// # Examples
///
/// ```
/// use herald_core::ReviewEnv;
///
/// let env = ReviewEnv::from_lookup(|key| match key {
///     "OPENAI_API_KEY" => Some("sk-test".into()),
///     "REPO" => Some("octocat/hello-world".into()),
///     "PR_NUMBER" => Some("42".into()),
///     "GITHUB_TOKEN" => Some("ghp_test".into()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(env.pr_number, 42);
/// assert_eq!(env.llm.model, "gpt-4.1-mini");
/// ```
#[derive(Debug, Clone)]
pub struct ReviewEnv {
    /// Completion service settings.
    pub llm: LlmEnv,
    /// GitHub settings.
    pub github: GithubEnv,
    /// Pull request number to comment on.
    pub pr_number: u64,
}

/// Configuration for the architecture audit pipeline.
///
/// Same as [`ReviewEnv`] minus the PR number: the audit publishes a new
/// issue rather than a comment.
#[derive(Debug, Clone)]
pub struct AuditEnv {
    /// Completion service settings.
    pub llm: LlmEnv,
    /// GitHub settings.
    pub github: GithubEnv,
}

impl ReviewEnv {
    /// Load review configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Config`] naming the first missing or invalid
    /// variable.
    pub fn from_env() -> Result<Self, HeraldError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load review configuration through an arbitrary lookup function.
    ///
    /// Exists so tests can validate fail-fast behavior without mutating the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Config`] naming the first missing or invalid
    /// variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HeraldError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm = llm_from_lookup(&lookup)?;
        let github = github_from_lookup(&lookup)?;
        let pr_number = required(&lookup, "PR_NUMBER")?;
        let pr_number: u64 = pr_number.trim().parse().map_err(|_| {
            HeraldError::Config(format!("PR_NUMBER is not a valid number: '{pr_number}'"))
        })?;
        Ok(Self {
            llm,
            github,
            pr_number,
        })
    }
}

impl AuditEnv {
    /// Load audit configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Config`] naming the first missing or invalid
    /// variable.
    pub fn from_env() -> Result<Self, HeraldError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load audit configuration through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Config`] naming the first missing or invalid
    /// variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HeraldError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm = llm_from_lookup(&lookup)?;
        let github = github_from_lookup(&lookup)?;
        Ok(Self { llm, github })
    }
}

fn llm_from_lookup<F>(lookup: &F) -> Result<LlmEnv, HeraldError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = required(lookup, "OPENAI_API_KEY")?;
    let model = lookup("HERALD_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let base_url = lookup("OPENAI_BASE_URL");
    Ok(LlmEnv {
        api_key,
        model,
        base_url,
    })
}

fn github_from_lookup<F>(lookup: &F) -> Result<GithubEnv, HeraldError>
where
    F: Fn(&str) -> Option<String>,
{
    let repo = required(lookup, "REPO")?;
    if !repo.contains('/') {
        return Err(HeraldError::Config(format!(
            "REPO must be in owner/name form, got '{repo}'"
        )));
    }
    let token = required(lookup, "GITHUB_TOKEN")?;
    let api_base = lookup("GITHUB_API_URL");
    Ok(GithubEnv {
        repo,
        token,
        api_base,
    })
}

fn required<F>(lookup: &F, key: &str) -> Result<String, HeraldError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(HeraldError::Config(format!("{key} not set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("OPENAI_API_KEY", "sk-test"),
            ("REPO", "octocat/hello-world"),
            ("PR_NUMBER", "42"),
            ("GITHUB_TOKEN", "ghp_test"),
        ])
    }

    fn lookup_in(
        map: HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> {
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn review_env_loads_with_all_values() {
        let env = ReviewEnv::from_lookup(lookup_in(full_env())).unwrap();
        assert_eq!(env.llm.api_key, "sk-test");
        assert_eq!(env.github.repo, "octocat/hello-world");
        assert_eq!(env.pr_number, 42);
        assert_eq!(env.llm.model, "gpt-4.1-mini");
        assert!(env.llm.base_url.is_none());
        assert!(env.github.api_base.is_none());
    }

    #[test]
    fn each_missing_required_value_is_fatal() {
        for key in ["OPENAI_API_KEY", "REPO", "PR_NUMBER", "GITHUB_TOKEN"] {
            let mut env = full_env();
            env.remove(key);
            let err = ReviewEnv::from_lookup(lookup_in(env)).unwrap_err();
            assert!(
                err.to_string().contains(key),
                "error for missing {key} should name it: {err}"
            );
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert("GITHUB_TOKEN", "");
        let err = ReviewEnv::from_lookup(lookup_in(env)).unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn invalid_pr_number_is_fatal() {
        let mut env = full_env();
        env.insert("PR_NUMBER", "abc");
        let err = ReviewEnv::from_lookup(lookup_in(env)).unwrap_err();
        assert!(err.to_string().contains("PR_NUMBER"));
    }

    #[test]
    fn repo_without_slash_is_fatal() {
        let mut env = full_env();
        env.insert("REPO", "just-a-name");
        let err = ReviewEnv::from_lookup(lookup_in(env)).unwrap_err();
        assert!(err.to_string().contains("owner/name"));
    }

    #[test]
    fn audit_env_does_not_need_pr_number() {
        let mut env = full_env();
        env.remove("PR_NUMBER");
        let audit = AuditEnv::from_lookup(lookup_in(env)).unwrap();
        assert_eq!(audit.github.repo, "octocat/hello-world");
    }

    #[test]
    fn optional_overrides_are_picked_up() {
        let mut env = full_env();
        env.insert("HERALD_MODEL", "gpt-4o");
        env.insert("OPENAI_BASE_URL", "http://localhost:8080");
        env.insert("GITHUB_API_URL", "http://localhost:9090");
        let review = ReviewEnv::from_lookup(lookup_in(env)).unwrap();
        assert_eq!(review.llm.model, "gpt-4o");
        assert_eq!(review.llm.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(
            review.github.api_base.as_deref(),
            Some("http://localhost:9090")
        );
    }
}
