use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read event payload: {0}")]
    EventError(String),

    #[error("Failed to access GitHub API: {0}")]
    GitHubError(String),

    #[error("Failed to access Slack API: {0}")]
    SlackError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<SlackClientError> for SyncError {
    fn from(error: SlackClientError) -> Self {
        SyncError::SlackError(error.to_string())
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(error: reqwest::Error) -> Self {
        SyncError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(error: serde_json::Error) -> Self {
        SyncError::EventError(error.to_string())
    }
}

impl From<std::io::Error> for SyncError {
    fn from(error: std::io::Error) -> Self {
        SyncError::EventError(error.to_string())
    }
}
