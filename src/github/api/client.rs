use anyhow::Context;
use async_trait::async_trait;
use octocrab::params::State;
use octocrab::Octocrab;

use crate::github::api::operations::create_pull_review;
use crate::github::GithubRepoName;
use crate::greeter::{Comment, IssueRecord, PullRecord, RepositoryClient};

/// How many pull requests are fetched per page of the pull history.
pub const PULLS_PER_PAGE: u8 = 100;

/// Provides access to a single repository using the GitHub API.
pub struct GithubRepositoryClient {
    pub client: Octocrab,
    // We store the name separately, because the API returns repositories with an
    // optional owner, but at this point we must always know the owner.
    pub repo_name: GithubRepoName,
}

impl GithubRepositoryClient {
    pub fn client(&self) -> &Octocrab {
        &self.client
    }

    pub fn name(&self) -> &GithubRepoName {
        &self.repo_name
    }

    fn format_contribution(&self, number: u64) -> String {
        format!("{}/{}", self.name(), number)
    }
}

#[async_trait]
impl RepositoryClient for GithubRepositoryClient {
    fn repository(&self) -> &GithubRepoName {
        self.name()
    }

    async fn list_created_issues(&self, author: &str) -> anyhow::Result<Vec<IssueRecord>> {
        // https://docs.github.com/en/rest/issues/issues#list-repository-issues
        let issues = self
            .client
            .issues(self.name().owner(), self.name().name())
            .list()
            .creator(author.to_string())
            .state(State::All)
            .send()
            .await
            .with_context(|| {
                format!("Cannot list issues created by {author} in {}", self.name())
            })?;
        Ok(issues
            .items
            .into_iter()
            .map(|issue| IssueRecord {
                number: issue.number,
                is_pull_request: issue.pull_request.is_some(),
            })
            .collect())
    }

    async fn list_pulls_page(&self, page: u32) -> anyhow::Result<Vec<PullRecord>> {
        // https://docs.github.com/en/rest/pulls/pulls#list-pull-requests
        let pulls = self
            .client
            .pulls(self.name().owner(), self.name().name())
            .list()
            .state(State::All)
            .per_page(PULLS_PER_PAGE)
            .page(page)
            .send()
            .await
            .with_context(|| {
                format!("Cannot list page {page} of pull requests in {}", self.name())
            })?;
        Ok(pulls
            .items
            .into_iter()
            .map(|pull| PullRecord {
                number: pull.number,
                author: pull.user.map(|user| user.login).unwrap_or_default(),
            })
            .collect())
    }

    async fn post_issue_comment(&self, number: u64, comment: Comment) -> anyhow::Result<()> {
        self.client
            .issues(self.name().owner(), self.name().name())
            .create_comment(number, comment.render())
            .await
            .with_context(|| {
                format!("Cannot post comment to {}", self.format_contribution(number))
            })?;
        Ok(())
    }

    async fn post_pull_review(&self, number: u64, comment: Comment) -> anyhow::Result<()> {
        create_pull_review(self, number, &comment.render())
            .await
            .with_context(|| {
                format!("Cannot post review to {}", self.format_contribution(number))
            })?;
        Ok(())
    }
}
