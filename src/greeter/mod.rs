use async_trait::async_trait;

use crate::config::GreeterConfig;
use crate::github::GithubRepoName;

mod comment;
pub mod event;
mod handlers;

pub use comment::{welcome_comment, Comment};
pub use handlers::handle_greeter_event;

/// Provides functionality for working with a remote repository.
#[async_trait]
pub trait RepositoryClient {
    fn repository(&self) -> &GithubRepoName;

    /// Return all issues created by the given author, in a single page.
    async fn list_created_issues(&self, author: &str) -> anyhow::Result<Vec<IssueRecord>>;

    /// Return one page of the repository's pull request history.
    /// Pages are numbered from one; a page past the end of the history is empty.
    async fn list_pulls_page(&self, page: u32) -> anyhow::Result<Vec<PullRecord>>;

    /// Post a comment to the issue with the given number.
    async fn post_issue_comment(&self, number: u64, comment: Comment) -> anyhow::Result<()>;

    /// Post a review that only carries a comment to the pull request with the
    /// given number.
    async fn post_pull_review(&self, number: u64, comment: Comment) -> anyhow::Result<()>;
}

/// A single entry of the issue history of a repository.
/// The issue listing endpoint also returns pull requests; `is_pull_request`
/// marks such entries.
#[derive(Clone, Debug)]
pub struct IssueRecord {
    pub number: u64,
    pub is_pull_request: bool,
}

/// A single entry of the pull request history of a repository.
#[derive(Clone, Debug)]
pub struct PullRecord {
    pub number: u64,
    pub author: String,
}

/// An access point to a single repository.
/// Bundles the client used to talk to the repository with the bot's
/// configuration.
pub struct RepositoryState<Client: RepositoryClient> {
    pub repository: GithubRepoName,
    pub client: Client,
    pub config: GreeterConfig,
}
