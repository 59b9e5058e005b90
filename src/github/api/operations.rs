use http::StatusCode;
use thiserror::Error;

use crate::github::api::client::GithubRepositoryClient;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Pull request not found")]
    NotFound,
    #[error("Unknown error ({0})")]
    Unknown(StatusCode),
    #[error("Network error: {0}")]
    NetworkError(#[from] octocrab::Error),
}

#[derive(serde::Serialize)]
struct ReviewRequest<'a, 'b> {
    body: &'a str,
    event: &'b str,
}

/// Creates a pull request review that only carries a comment.
///
/// Documentation: https://docs.github.com/en/rest/pulls/reviews#create-a-review-for-a-pull-request
pub async fn create_pull_review(
    repo: &GithubRepositoryClient,
    pull_number: u64,
    body: &str,
) -> Result<(), ReviewError> {
    let client = repo.client();
    let review_url = format!("/repos/{}/pulls/{}/reviews", repo.name(), pull_number);

    let request = ReviewRequest {
        body,
        event: "COMMENT",
    };
    let response = client._post(review_url, Some(&request)).await?;

    let status = response.status();
    tracing::trace!(
        "Response from posting a review to `{}/{pull_number}`: {status}",
        repo.name(),
    );

    match status {
        StatusCode::OK | StatusCode::CREATED => Ok(()),
        StatusCode::NOT_FOUND => Err(ReviewError::NotFound),
        status => Err(ReviewError::Unknown(status)),
    }
}
