use std::sync::Arc;

use crate::config::GreetingPolicy;
use crate::greeter::event::ContributionOpened;
use crate::greeter::handlers::first_contribution::{is_first_issue, is_first_pull};
use crate::greeter::{welcome_comment, RepositoryClient, RepositoryState};

pub(super) async fn greet_issue<Client: RepositoryClient>(
    repo: Arc<RepositoryState<Client>>,
    contribution: ContributionOpened,
) -> anyhow::Result<()> {
    let first = is_first_issue(&repo.client, &contribution.author, contribution.number).await?;
    if !should_greet(first, repo.config.policy) {
        return Ok(());
    }
    let Some(comment) = welcome_comment(repo.config.issue_template(), &contribution.author) else {
        tracing::info!("No message configured for issues, skipping");
        return Ok(());
    };
    tracing::info!(
        "Welcoming {} on issue #{}",
        contribution.author,
        contribution.number
    );
    repo.client
        .post_issue_comment(contribution.number, comment)
        .await
}

pub(super) async fn greet_pull<Client: RepositoryClient>(
    repo: Arc<RepositoryState<Client>>,
    contribution: ContributionOpened,
) -> anyhow::Result<()> {
    let first = is_first_pull(&repo.client, &contribution.author, contribution.number).await?;
    if !should_greet(first, repo.config.policy) {
        return Ok(());
    }
    let Some(comment) = welcome_comment(repo.config.pr_template(), &contribution.author) else {
        tracing::info!("No message configured for pull requests, skipping");
        return Ok(());
    };
    tracing::info!(
        "Welcoming {} on pull request #{}",
        contribution.author,
        contribution.number
    );
    repo.client
        .post_pull_review(contribution.number, comment)
        .await
}

fn should_greet(first_contribution: bool, policy: GreetingPolicy) -> bool {
    if first_contribution {
        return true;
    }
    match policy {
        GreetingPolicy::FirstContribution => {
            tracing::info!("Not the author's first contribution, skipping");
            false
        }
        GreetingPolicy::Always => {
            tracing::info!("Not the author's first contribution, posting anyway");
            true
        }
    }
}
