use std::env;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub slack_channel_id: String,
    pub emoji_needs_changes: String,
    pub emoji_ready_to_merge: String,
    pub github_token: String,
    pub github_repository: String,
    pub github_event_path: String,
    pub github_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?,
            slack_channel_id: env::var("SLACK_CHANNEL_ID")
                .map_err(|e| format!("SLACK_CHANNEL_ID: {}", e))?,
            emoji_needs_changes: env::var("EMOJI_NEEDS_CHANGES")
                .map_err(|e| format!("EMOJI_NEEDS_CHANGES: {}", e))?,
            emoji_ready_to_merge: env::var("EMOJI_READY_TO_MERGE")
                .map_err(|e| format!("EMOJI_READY_TO_MERGE: {}", e))?,
            github_token: env::var("GITHUB_TOKEN").map_err(|e| format!("GITHUB_TOKEN: {}", e))?,
            github_repository: env::var("GITHUB_REPOSITORY")
                .map_err(|e| format!("GITHUB_REPOSITORY: {}", e))?,
            github_event_path: env::var("GITHUB_EVENT_PATH")
                .map_err(|e| format!("GITHUB_EVENT_PATH: {}", e))?,
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
        })
    }
}
