//! GitHub-specific functionality: webhook payload parsing and the API client.

pub mod client;
pub mod event;

// Re-export main types for convenience
pub use client::{GithubClient, Review, ReviewState, ReviewUser};
pub use event::{PullRequestEvent, read_event};
