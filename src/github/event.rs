use anyhow::Context;
use octocrab::models::Repository;

use crate::github::GithubRepoName;
use crate::greeter::event::{ContributionOpened, GreeterEvent};

/// Relevant fields of the `issues` and `pull_request` event payloads.
/// The wrapper exists because octocrab doesn't expose/parse the whole payload.
#[derive(serde::Deserialize, Debug)]
struct TriggerPayload {
    #[serde(default)]
    action: String,
    sender: Option<Sender>,
    issue: Option<Contribution>,
    pull_request: Option<Contribution>,
    repository: Option<Repository>,
}

#[derive(serde::Deserialize, Debug)]
struct Sender {
    login: String,
}

#[derive(serde::Deserialize, Debug)]
struct Contribution {
    number: u64,
}

/// Extracts a greeter event from the payload of the event that triggered this run.
///
/// Returns `Ok(None)` when the event is not an opened issue or pull request; such
/// events are skipped without an error. A relevant event without a sender is a
/// malformed upstream payload and fails the run.
pub fn parse_trigger_event(payload: &[u8]) -> anyhow::Result<Option<GreeterEvent>> {
    let payload: TriggerPayload =
        serde_json::from_slice(payload).context("Cannot deserialize event payload")?;

    if payload.action != "opened" {
        tracing::debug!("Ignoring event with action `{}`", payload.action);
        return Ok(None);
    }
    // When both fields are present (which GitHub should never send), the issue
    // path wins.
    let (contribution, is_issue) = match (payload.issue, payload.pull_request) {
        (Some(issue), _) => (issue, true),
        (None, Some(pull_request)) => (pull_request, false),
        (None, None) => {
            tracing::debug!("Event does not concern an issue or a pull request, ignoring");
            return Ok(None);
        }
    };
    let Some(sender) = payload.sender else {
        return Err(anyhow::anyhow!("Event payload has no sender"));
    };
    let Some(repository) = payload.repository else {
        return Err(anyhow::anyhow!("Event payload has no repository"));
    };
    let repository = parse_repository_name(&repository)?;

    let contribution = ContributionOpened {
        repository,
        author: sender.login,
        number: contribution.number,
    };
    Ok(Some(if is_issue {
        GreeterEvent::IssueOpened(contribution)
    } else {
        GreeterEvent::PullRequestOpened(contribution)
    }))
}

fn parse_repository_name(repository: &Repository) -> anyhow::Result<GithubRepoName> {
    let repo_name = &repository.name;
    let Some(repo_owner) = repository.owner.as_ref().map(|u| &u.login) else {
        return Err(anyhow::anyhow!("Owner for repo {repo_name} is missing"));
    };
    Ok(GithubRepoName::new(repo_owner, repo_name))
}
