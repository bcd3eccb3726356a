use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use miette::Result;

use herald_core::{AuditEnv, ReviewEnv};
use herald_pipeline::artifact::DEFAULT_SNAPSHOT_BUDGET;
use herald_pipeline::github::GitHubClient;
use herald_pipeline::llm::LlmClient;
use herald_pipeline::pipeline::{AuditPipeline, ReviewOutcome, ReviewPipeline};

#[derive(Parser)]
#[command(
    name = "herald",
    version,
    about = "CI herald — posts LLM reviews and architecture audits back to GitHub",
    long_about = "Herald annotates your repository from CI: it sends a locally prepared\n\
                   artifact (a PR diff or a project snapshot) to an OpenAI-compatible\n\
                   completion endpoint and publishes the answer back to GitHub.\n\n\
                   Required environment: OPENAI_API_KEY, REPO, GITHUB_TOKEN\n\
                   (plus PR_NUMBER for the review subcommand).\n\n\
                   Examples:\n  \
                     herald review                 Review pr.diff, comment on the PR\n  \
                     herald review --diff my.diff  Review a diff at a custom path\n  \
                     herald audit                  Audit project_snapshot.txt, open an issue"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Review a PR diff and post the result as a PR comment
    #[command(long_about = "Review a PR diff and post the result as a PR comment.\n\n\
        Reads the diff produced by an earlier CI step, asks the model for a\n\
        review, and comments on the PR named by PR_NUMBER. An empty or\n\
        whitespace-only diff exits 0 without calling anything.\n\n\
        Example:\n  git diff origin/main > pr.diff && herald review")]
    Review {
        /// Path to the diff artifact
        #[arg(long, default_value = "pr.diff")]
        diff: PathBuf,
    },
    /// Audit a project snapshot and open an issue with the report
    #[command(long_about = "Audit a project snapshot and open an issue with the report.\n\n\
        Reads a flattened source dump produced by an earlier CI step, caps it\n\
        at the character budget (appending a [TRUNCATED] marker when cut), and\n\
        files the model's architecture report as a new GitHub issue.\n\n\
        Example:\n  herald audit --snapshot project_snapshot.txt")]
    Audit {
        /// Path to the snapshot artifact
        #[arg(long, default_value = "project_snapshot.txt")]
        snapshot: PathBuf,

        /// Maximum snapshot characters to send (default: 150000)
        #[arg(long, default_value_t = DEFAULT_SNAPSHOT_BUDGET)]
        max_chars: usize,
    },
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn spinner(message: &'static str) -> Option<indicatif::ProgressBar> {
    if !std::io::stderr().is_terminal() {
        return None;
    }
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})").unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    Some(pb)
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    match cli.command {
        Command::Review { ref diff } => {
            let env = ReviewEnv::from_env()?;
            if cli.verbose {
                eprintln!(
                    "repo: {} | pr: {} | model: {}",
                    env.github.repo, env.pr_number, env.llm.model
                );
            }

            let llm = LlmClient::new(&env.llm)?;
            let github = GitHubClient::new(&env.github);
            let pipeline = ReviewPipeline::new(llm, github, env.pr_number);

            let pb = spinner("Reviewing diff...");
            let outcome = pipeline.run(diff).await.inspect_err(|_e| {
                if let Some(pb) = &pb {
                    pb.finish_with_message("Failed");
                }
            })?;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            println!("{outcome}");
            if matches!(outcome, ReviewOutcome::EmptyDiff) {
                return Ok(());
            }
        }
        Command::Audit {
            ref snapshot,
            max_chars,
        } => {
            let env = AuditEnv::from_env()?;
            if cli.verbose {
                eprintln!(
                    "repo: {} | model: {} | budget: {max_chars} chars",
                    env.github.repo, env.llm.model
                );
            }

            let llm = LlmClient::new(&env.llm)?;
            let github = GitHubClient::new(&env.github);
            let pipeline = AuditPipeline::new(llm, github);

            let pb = spinner("Auditing snapshot...");
            let outcome = pipeline.run(snapshot, max_chars).await.inspect_err(|_e| {
                if let Some(pb) = &pb {
                    pb.finish_with_message("Failed");
                }
            })?;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            println!("{outcome}");
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "herald", &mut std::io::stdout());
        }
    }

    Ok(())
}
