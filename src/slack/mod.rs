//! All Slack-specific functionality

pub mod client;
pub mod links;

// Re-export main types for convenience
pub use client::SlackClient;
