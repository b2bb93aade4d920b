//! The orchestrator: one linear pass from webhook event to reconciled
//! reactions.

use std::path::Path;

use tracing::info;

use crate::config::AppConfig;
use crate::errors::SyncError;
use crate::github::{self, GithubClient};
use crate::slack::SlackClient;
use crate::status::{diff_reactions, emoji_for_reviews};

/// Synchronize the Slack review-request message's reactions with the PR's
/// current review status.
///
/// Two outcomes short-circuit successfully: no status emoji for the reviews,
/// and no Slack message announcing the PR. Everything else that goes wrong is
/// propagated; a failure partway through step 7 leaves already-applied
/// reaction changes in place.
pub async fn run(config: &AppConfig) -> Result<(), SyncError> {
    let event = github::read_event(Path::new(&config.github_event_path))?;
    let pr = &event.pull_request;
    info!(pr_number = pr.number, pr_url = %pr.html_url, "Handling review event");

    let github = GithubClient::new(config)?;
    let reviews = github.list_reviews(pr.number).await?;

    let Some(emoji) =
        emoji_for_reviews(&reviews, &config.emoji_needs_changes, &config.emoji_ready_to_merge)
    else {
        info!(?reviews, "No status emoji for reviews, nothing to do");
        return Ok(());
    };
    info!(emoji = %emoji, "Computed status emoji");

    let slack = SlackClient::new(config.slack_bot_token.clone());

    let Some(timestamp) = slack
        .find_review_request_ts(&pr.html_url, &config.slack_channel_id)
        .await?
    else {
        info!(pr_url = %pr.html_url, "No message found requesting review, nothing to do");
        return Ok(());
    };
    info!(ts = %timestamp, "Found review request message");

    let current = slack
        .get_reactions(&timestamp, &config.slack_channel_id)
        .await?;
    info!(?current, "Existing reactions");

    let (to_add, to_remove) = diff_reactions(&emoji, &current);

    for emoji in &to_add {
        info!(emoji = %emoji, "Adding reaction");
        slack
            .add_reaction(&timestamp, emoji, &config.slack_channel_id)
            .await?;
    }

    for emoji in &to_remove {
        info!(emoji = %emoji, "Removing reaction");
        slack
            .remove_reaction(&timestamp, emoji, &config.slack_channel_id)
            .await?;
    }

    Ok(())
}
