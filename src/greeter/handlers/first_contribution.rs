use crate::greeter::RepositoryClient;

/// Upper bound on how many pages of the pull request history are scanned before
/// the search is abandoned.
const MAX_PULL_HISTORY_PAGES: u32 = 64;

/// Has the author opened an issue in this repository before the given one?
pub(super) async fn is_first_issue<Client: RepositoryClient>(
    client: &Client,
    author: &str,
    number: u64,
) -> anyhow::Result<bool> {
    let issues = client.list_created_issues(author).await?;
    // The issue listing endpoint also returns pull requests, which do not count
    // as issues here.
    Ok(!issues
        .iter()
        .any(|issue| issue.number < number && !issue.is_pull_request))
}

/// Has the author opened a pull request in this repository before the given one?
///
/// The pull listing endpoint cannot filter by author, so the whole pull history
/// is scanned page by page and filtered client-side, until a match or an empty
/// page is found.
pub(super) async fn is_first_pull<Client: RepositoryClient>(
    client: &Client,
    author: &str,
    number: u64,
) -> anyhow::Result<bool> {
    for page in 1..=MAX_PULL_HISTORY_PAGES {
        tracing::debug!("Checking page {page} of the pull request history");
        let pulls = client.list_pulls_page(page).await?;
        if pulls.is_empty() {
            return Ok(true);
        }
        if pulls
            .iter()
            .any(|pull| pull.author == author && pull.number < number)
        {
            return Ok(false);
        }
    }
    tracing::warn!(
        "Pull request history of {} not exhausted after {MAX_PULL_HISTORY_PAGES} pages, \
treating {author} as a returning contributor",
        client.repository()
    );
    Ok(false)
}
