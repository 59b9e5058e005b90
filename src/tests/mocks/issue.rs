use serde::{Deserialize, Serialize};
use url::Url;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::tests::mocks::github::PostedMessages;
use crate::tests::mocks::user::{default_user, User};
use crate::tests::mocks::Repo;

/// Wire representation of an entry of the issue history.
/// Return type of the `GET /repos/{owner}/{repo}/issues` endpoint.
#[derive(Clone, Serialize)]
pub(crate) struct Issue {
    id: u64,
    node_id: String,
    pub(crate) user: User,
    url: Url,
    repository_url: Url,
    labels_url: Url,
    comments_url: Url,
    events_url: Url,
    html_url: Url,
    number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request: Option<PullRequestLink>,
    state: String,
    title: String,
    labels: Vec<serde_json::Value>,
    assignees: Vec<User>,
    author_association: String,
    locked: bool,
    comments: u32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl Issue {
    pub(crate) fn new(number: u64, user: User) -> Self {
        Issue {
            id: number,
            node_id: "".to_string(),
            user,
            url: "https://test.com".parse().unwrap(),
            repository_url: "https://test.com".parse().unwrap(),
            labels_url: "https://test.com".parse().unwrap(),
            comments_url: "https://test.com".parse().unwrap(),
            events_url: "https://test.com".parse().unwrap(),
            html_url: "https://test.com".parse().unwrap(),
            number,
            pull_request: None,
            state: "open".to_string(),
            title: "test".to_string(),
            labels: Vec::new(),
            assignees: Vec::new(),
            author_association: "NONE".to_string(),
            locked: false,
            comments: 0,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    /// Marks the entry as a pull request; the issue listing endpoint returns
    /// those too.
    pub(crate) fn as_pull_request(mut self) -> Self {
        self.pull_request = Some(PullRequestLink::default());
        self
    }
}

#[derive(Clone, Serialize)]
struct PullRequestLink {
    url: Url,
    html_url: Url,
    diff_url: Url,
    patch_url: Url,
}

impl Default for PullRequestLink {
    fn default() -> Self {
        PullRequestLink {
            url: "https://test.com".parse().unwrap(),
            html_url: "https://test.com".parse().unwrap(),
            diff_url: "https://test.com".parse().unwrap(),
            patch_url: "https://test.com".parse().unwrap(),
        }
    }
}

/// Wire representation of a posted comment.
/// Return type of the `POST /repos/{owner}/{repo}/issues/{number}/comments` endpoint.
#[derive(Serialize)]
struct Comment {
    id: u64,
    node_id: String,
    body: String,
    user: User,
    url: String,
    html_url: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl Comment {
    fn new(body: &str) -> Self {
        Self {
            id: 1,
            node_id: "".to_string(),
            body: body.to_string(),
            user: default_user(),
            url: "https://test.com".to_string(),
            html_url: "https://test.com".to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}

#[derive(Deserialize)]
struct CommentCreatePayload {
    body: String,
}

pub(super) async fn mount_issue_mocks(
    repo: &Repo,
    posted: PostedMessages,
    mock_server: &MockServer,
) {
    let failing = repo.failing_listings;
    let issues = repo.issues.clone();
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{}/{}/issues",
            repo.name.owner(),
            repo.name.name()
        )))
        .respond_with(move |request: &Request| {
            if failing {
                return ResponseTemplate::new(500);
            }
            // Emulates the server-side creator filter of the endpoint.
            let creator = request
                .url
                .query_pairs()
                .find(|(key, _)| key == "creator")
                .map(|(_, value)| value.to_string());
            let issues: Vec<Issue> = issues
                .iter()
                .filter(|issue| Some(issue.user.login.as_str()) == creator.as_deref())
                .cloned()
                .collect();
            ResponseTemplate::new(200).set_body_json(issues)
        })
        .mount(mock_server)
        .await;

    let comments = posted.comments;
    Mock::given(method("POST"))
        .and(path_regex(format!(
            "^/repos/{}/{}/issues/\\d+/comments$",
            repo.name.owner(),
            repo.name.name()
        )))
        .respond_with(move |request: &Request| {
            let payload: CommentCreatePayload = request.body_json().unwrap();
            let number = issue_number_from_path(request.url.path());
            comments.lock().unwrap().push((number, payload.body.clone()));
            ResponseTemplate::new(201).set_body_json(Comment::new(&payload.body))
        })
        .mount(mock_server)
        .await;
}

/// Extracts `{number}` from `/repos/{owner}/{repo}/issues/{number}/comments`.
fn issue_number_from_path(path: &str) -> u64 {
    path.split('/')
        .nth(5)
        .and_then(|number| number.parse().ok())
        .unwrap_or_else(|| panic!("Unexpected comment path {path}"))
}
