use regex::Regex;
use serde_json::Value;
use slack_morphism::SlackHistoryMessage;
use url::Url;

/// Extract HTTP(S) links from a Slack message in a best-effort way.
///
/// We intentionally support:
/// - raw URLs like `https://example.com/foo`
/// - Slack link markup like `<https://example.com|label>` or `<https://example.com>`
/// - URLs embedded in `blocks` / `attachments` (by JSON string scanning)
#[must_use]
pub fn extract_links_from_message(msg: &SlackHistoryMessage) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    if let Some(text) = msg.content.text.as_deref() {
        out.extend(extract_links_from_text(text));
    }

    if let Some(blocks) = msg.content.blocks.as_ref()
        && let Ok(v) = serde_json::to_value(blocks)
    {
        out.extend(extract_links_from_json_value(&v));
    }

    if let Some(atts) = msg.content.attachments.as_ref()
        && let Ok(v) = serde_json::to_value(atts)
    {
        out.extend(extract_links_from_json_value(&v));
    }

    out
}

/// Whether a message links to `target_url`, ignoring fragments and a
/// trailing slash on either side.
#[must_use]
pub fn message_links_to(msg: &SlackHistoryMessage, target_url: &str) -> bool {
    let Some(target) = normalize_link(target_url) else {
        return false;
    };

    extract_links_from_message(msg)
        .iter()
        .filter_map(|link| normalize_link(link))
        .any(|link| link == target)
}

#[must_use]
fn normalize_link(raw: &str) -> Option<String> {
    let mut url = Url::parse(raw).ok()?;
    url.set_fragment(None);

    Some(url.to_string().trim_end_matches('/').to_string())
}

#[must_use]
pub fn extract_links_from_text(text: &str) -> Vec<String> {
    // Slack link formatting uses angle brackets:
    // - <http://example.com/>
    // - <http://www.example.com|This message *is* a link>
    // Source: https://docs.slack.dev/messaging/formatting-message-text/#linking-urls
    static SLACK_LINK_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r"<(https?://[^>|\s>]+)(?:\|[^>]+)?>").expect("slack link regex compiles")
    });

    static RAW_URL_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r#"https?://[^\s<>()\[\]{}"']+"#).expect("raw url regex compiles")
    });

    let mut out: Vec<String> = Vec::new();

    for caps in SLACK_LINK_RE.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            out.push(trim_trailing_punctuation(m.as_str()).to_string());
        }
    }

    for m in RAW_URL_RE.find_iter(text) {
        out.push(trim_trailing_punctuation(m.as_str()).to_string());
    }

    out
}

#[must_use]
fn extract_links_from_json_value(v: &Value) -> Vec<String> {
    // We don't attempt to fully model the Slack block schema. Instead, scan
    // any string values for URLs. This catches fields like `url`, as well as
    // markdown text that contains a link.
    static RAW_URL_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r#"https?://[^\s<>()\[\]{}"']+"#).expect("raw url regex compiles")
    });

    let mut out: Vec<String> = Vec::new();

    walk_value_for_links(v, &mut out, &RAW_URL_RE);
    out
}

fn walk_value_for_links(node: &Value, out: &mut Vec<String>, re: &Regex) {
    match node {
        Value::String(s) => {
            for m in re.find_iter(s) {
                out.push(trim_trailing_punctuation(m.as_str()).to_string());
            }
        }
        Value::Array(arr) => {
            for item in arr {
                walk_value_for_links(item, out, re);
            }
        }
        Value::Object(map) => {
            for (_, val) in map {
                walk_value_for_links(val, out, re);
            }
        }
        _ => {}
    }
}

#[must_use]
fn trim_trailing_punctuation(s: &str) -> &str {
    s.trim_end_matches(&['.', ',', ';', ':', '!', '?', ')', ']', '}'][..])
}
