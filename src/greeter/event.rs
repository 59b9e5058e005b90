use crate::github::GithubRepoName;

#[derive(Debug)]
pub enum GreeterEvent {
    /// A new issue was opened in the repository.
    IssueOpened(ContributionOpened),
    /// A new pull request was opened in the repository.
    PullRequestOpened(ContributionOpened),
}

impl GreeterEvent {
    /// Repository in which the contribution was opened.
    pub fn repository(&self) -> &GithubRepoName {
        match self {
            GreeterEvent::IssueOpened(contribution)
            | GreeterEvent::PullRequestOpened(contribution) => &contribution.repository,
        }
    }
}

/// An issue or a pull request that was just opened by some user.
#[derive(Debug)]
pub struct ContributionOpened {
    pub repository: GithubRepoName,
    pub author: String,
    pub number: u64,
}
