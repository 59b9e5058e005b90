use std::sync::Arc;

use crate::config::GreeterConfig;
use crate::github::parse_trigger_event;
use crate::greeter::{handle_greeter_event, RepositoryState};
use crate::tests::mocks::{GitHubMockServer, GitHubState};


/// Runs the whole bot once against a simulated GitHub, the way the binary would:
/// parse the trigger payload, then handle the resulting event (if any).
///
/// Returns the mock server so that tests can inspect what was posted, together
/// with the run's outcome.
pub(crate) async fn run_greeter(
    github: &GitHubState,
    config: GreeterConfig,
    payload: &[u8],
) -> (GitHubMockServer, anyhow::Result<()>) {
    let server = GitHubMockServer::start(github).await;
    let result = run(&server, config, payload).await;
    (server, result)
}

async fn run(
    server: &GitHubMockServer,
    config: GreeterConfig,
    payload: &[u8],
) -> anyhow::Result<()> {
    let Some(event) = parse_trigger_event(payload)? else {
        return Ok(());
    };
    let repository = event.repository().clone();
    let client = server.repository_client(repository.clone());
    let repo = Arc::new(RepositoryState {
        repository,
        client,
        config,
    });
    handle_greeter_event(event, repo).await
}
