/// pr-reaction-sync - keeps a Slack "review requested" message's reactions in
/// step with a pull request's review status.
///
/// The binary is meant to run from a `pull_request_review` workflow job. It
/// reads the webhook payload from `GITHUB_EVENT_PATH`, fetches the PR's
/// reviews from the GitHub API, reduces them to a single status emoji
/// (changes requested wins over approved), finds the Slack message that
/// announced the review request, and adds/removes reactions until exactly
/// that emoji is present.
///
/// The system uses:
/// - slack-morphism for Slack channel history
/// - reqwest for the GitHub API and the Slack reactions endpoints
/// - Tokio for the async runtime
// Module declarations
pub mod config;
pub mod errors;
pub mod github;
pub mod slack;
pub mod status;
pub mod sync;

/// Configure structured logging for CI output.
///
/// Sets up a tracing-subscriber fmt layer writing human-readable lines to
/// stdout. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
