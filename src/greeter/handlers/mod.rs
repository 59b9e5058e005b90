use std::sync::Arc;

use tracing::Instrument;

use crate::greeter::event::GreeterEvent;
use crate::greeter::handlers::greet::{greet_issue, greet_pull};
use crate::greeter::{RepositoryClient, RepositoryState};

mod first_contribution;
mod greet;

/// This function executes a single greeter event
pub async fn handle_greeter_event<Client: RepositoryClient>(
    event: GreeterEvent,
    repo: Arc<RepositoryState<Client>>,
) -> anyhow::Result<()> {
    match event {
        GreeterEvent::IssueOpened(contribution) => {
            let span = tracing::info_span!(
                "Issue opened",
                issue = format!("{}#{}", contribution.repository, contribution.number),
                author = contribution.author
            );
            greet_issue(repo, contribution).instrument(span).await?;
        }
        GreeterEvent::PullRequestOpened(contribution) => {
            let span = tracing::info_span!(
                "Pull request opened",
                pr = format!("{}#{}", contribution.repository, contribution.number),
                author = contribution.author
            );
            greet_pull(repo, contribution).instrument(span).await?;
        }
    }
    Ok(())
}
