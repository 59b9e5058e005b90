use anyhow::Context;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

pub mod client;
pub(crate) mod operations;

pub fn base_github_url() -> &'static str {
    "https://api.github.com"
}

/// Creates a GitHub API client authenticated with a personal access token.
pub fn create_github_client(base_url: &str, token: SecretString) -> anyhow::Result<Octocrab> {
    Octocrab::builder()
        .base_uri(base_url)
        .context("Invalid base GitHub API url")?
        .personal_token(token.expose_secret().to_string())
        .build()
        .context("Could not create octocrab client")
}
