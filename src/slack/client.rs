//! Slack API client module
//!
//! Encapsulates all Slack API interactions with retry logic and error handling.

use std::collections::HashSet;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::*;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackTs};
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};

use crate::errors::SyncError;
use crate::slack::links;

static SLACK_CLIENT: Lazy<SlackHyperClient> = Lazy::new(|| {
    SlackHyperClient::new(
        SlackClientHyperConnector::new().expect("Failed to create Slack client connector"),
    )
});

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

// How far back to scan for the review request message.
const HISTORY_LIMIT: u16 = 200;

/// Reactions API response types
#[derive(Debug, Deserialize)]
struct ReactionsGetResponse {
    ok: bool,
    message: Option<ReactedMessage>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReactedMessage {
    #[serde(default)]
    reactions: Vec<ReactionEntry>,
}

#[derive(Debug, Deserialize)]
struct ReactionEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ReactionWriteResponse {
    ok: bool,
    error: Option<String>,
}

/// Slack API client with retry logic and error handling
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, SyncError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, SyncError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }

    /// Find the timestamp of the message announcing a review request for
    /// `pr_url`, scanning recent channel history newest-first.
    ///
    /// Returns `Ok(None)` when no message links to the PR; that is a valid
    /// outcome, not an error.
    pub async fn find_review_request_ts(
        &self,
        pr_url: &str,
        channel_id: &str,
    ) -> Result<Option<SlackTs>, SyncError> {
        let messages = self
            .with_retry(|| async {
                let session = SLACK_CLIENT.open_session(&self.token);

                let request = SlackApiConversationsHistoryRequest::new()
                    .with_channel(SlackChannelId(channel_id.to_string()))
                    .with_limit(HISTORY_LIMIT);

                let result = session.conversations_history(&request).await?;

                Ok(result.messages)
            })
            .await?;

        Ok(messages
            .iter()
            .find(|msg| links::message_links_to(msg, pr_url))
            .map(|msg| msg.origin.ts.clone()))
    }

    /// Fetch the set of reaction emoji names currently on a message.
    pub async fn get_reactions(
        &self,
        timestamp: &SlackTs,
        channel_id: &str,
    ) -> Result<HashSet<String>, SyncError> {
        self.with_retry(|| async {
            let resp = HTTP_CLIENT
                .get("https://slack.com/api/reactions.get")
                .bearer_auth(&self.token.token_value.0)
                .query(&[
                    ("channel", channel_id),
                    ("timestamp", timestamp.0.as_str()),
                    ("full", "true"),
                ])
                .send()
                .await?;

            let data: ReactionsGetResponse = resp.json().await.map_err(|e| {
                SyncError::SlackError(format!("Failed to parse reactions.get response: {}", e))
            })?;

            if !data.ok {
                return Err(SyncError::SlackError(format!(
                    "reactions.get failed: {}",
                    data.error.unwrap_or_default()
                )));
            }

            Ok(data
                .message
                .map(|msg| msg.reactions.into_iter().map(|r| r.name).collect())
                .unwrap_or_default())
        })
        .await
    }

    pub async fn add_reaction(
        &self,
        timestamp: &SlackTs,
        emoji: &str,
        channel_id: &str,
    ) -> Result<(), SyncError> {
        self.write_reaction("reactions.add", timestamp, emoji, channel_id)
            .await
    }

    pub async fn remove_reaction(
        &self,
        timestamp: &SlackTs,
        emoji: &str,
        channel_id: &str,
    ) -> Result<(), SyncError> {
        self.write_reaction("reactions.remove", timestamp, emoji, channel_id)
            .await
    }

    // reactions.add and reactions.remove share a request/response shape;
    // slack-morphism does not model them, so call the Web API directly.
    async fn write_reaction(
        &self,
        method: &str,
        timestamp: &SlackTs,
        emoji: &str,
        channel_id: &str,
    ) -> Result<(), SyncError> {
        self.with_retry(|| async {
            let payload = json!({
                "channel": channel_id,
                "name": emoji,
                "timestamp": timestamp.0,
            });

            let resp = HTTP_CLIENT
                .post(format!("https://slack.com/api/{}", method))
                .bearer_auth(&self.token.token_value.0)
                .json(&payload)
                .send()
                .await?;

            let data: ReactionWriteResponse = resp.json().await.map_err(|e| {
                SyncError::SlackError(format!("Failed to parse {} response: {}", method, e))
            })?;

            if !data.ok {
                return Err(SyncError::SlackError(format!(
                    "{} failed: {}",
                    method,
                    data.error.unwrap_or_default()
                )));
            }

            Ok(())
        })
        .await
    }
}
