//! GitHub API client.
//!
//! One authenticated reqwest client, typed JSON responses, every call checked
//! with `error_for_status`.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::SyncError;

/// Review state as returned by the GitHub REST API.
///
/// States other than the ones listed here deserialize to `Other`; they still
/// take part in last-review-per-author tracking but never map to an emoji.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewUser {
    pub login: String,
}

/// A single reviewer verdict, in submission order within the API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub user: ReviewUser,
    pub state: ReviewState,
}

pub struct GithubClient {
    http: Client,
    api_url: String,
    repository: String,
}

impl GithubClient {
    pub fn new(config: &AppConfig) -> Result<Self, SyncError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("pr-reaction-sync"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.github_token))
            .map_err(|e| SyncError::ConfigError(format!("GITHUB_TOKEN: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_url: config.github_api_url.trim_end_matches('/').to_string(),
            repository: config.github_repository.clone(),
        })
    }

    /// List a pull request's reviews, oldest first as GitHub returns them.
    #[tracing::instrument(skip(self))]
    pub async fn list_reviews(&self, pr_number: u64) -> Result<Vec<Review>, SyncError> {
        Ok(self
            .http
            .get(format!(
                "{}/repos/{}/pulls/{}/reviews",
                self.api_url, self.repository, pr_number
            ))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| SyncError::GitHubError(e.to_string()))?
            .json::<Vec<Review>>()
            .await
            .map_err(|e| SyncError::GitHubError(format!("Failed to parse reviews: {}", e)))?)
    }
}
