//! Typed view of the `pull_request_review` webhook payload.
//!
//! GitHub Actions writes the full event JSON to the file named by
//! `GITHUB_EVENT_PATH`; only the two fields the sync needs are modeled here.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::SyncError;

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: PullRequestRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {
    pub number: u64,
    pub html_url: String,
}

/// Read and decode the webhook payload. Missing or malformed fields are
/// fatal: without a PR number and URL there is nothing to sync.
pub fn read_event(path: &Path) -> Result<PullRequestEvent, SyncError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| SyncError::EventError(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&raw).map_err(|e| SyncError::EventError(e.to_string()))
}
