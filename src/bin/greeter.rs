use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use greeter::config::{GreeterConfig, GreetingPolicy};
use greeter::github::api::client::GithubRepositoryClient;
use greeter::github::api::{base_github_url, create_github_client};
use greeter::github::parse_trigger_event;
use greeter::greeter::{handle_greeter_event, RepositoryState};

#[derive(clap::Parser)]
struct Opts {
    /// Token used to authenticate GitHub API calls.
    #[arg(long, env = "INPUT_REPO_TOKEN", hide_env_values = true)]
    repo_token: String,

    /// Message template posted on a newly opened issue.
    #[arg(long, env = "INPUT_ISSUE_MESSAGE")]
    issue_message: Option<String>,

    /// Message template posted on a newly opened pull request.
    #[arg(long, env = "INPUT_PR_MESSAGE")]
    pr_message: Option<String>,

    /// When should an opened contribution receive a welcome message.
    #[arg(long, env = "INPUT_GREET_POLICY", value_enum, default_value_t)]
    greet_policy: GreetingPolicy,

    /// Path to a file with the JSON payload of the event that triggered this run.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,
}

fn try_main(opts: Opts) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    let payload = std::fs::read(&opts.event_path).with_context(|| {
        format!(
            "Cannot read event payload from {}",
            opts.event_path.display()
        )
    })?;

    let config = GreeterConfig {
        issue_message: opts.issue_message,
        pr_message: opts.pr_message,
        policy: opts.greet_policy,
    };

    runtime.block_on(async move {
        let Some(event) = parse_trigger_event(&payload)? else {
            return Ok(());
        };

        let client = create_github_client(base_github_url(), opts.repo_token.into())?;
        let repository = event.repository().clone();
        let client = GithubRepositoryClient {
            client,
            repo_name: repository.clone(),
        };
        let repo = Arc::new(RepositoryState {
            repository,
            client,
            config,
        });
        handle_greeter_event(event, repo).await
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();
    if let Err(error) = try_main(opts) {
        tracing::error!("Error: {error:?}");
        // Surfaces the failure as a workflow error annotation.
        println!("::error::{error:#}");
        std::process::exit(1);
    }
}
