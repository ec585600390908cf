//! Best-effort field extraction from YouTube's embedded JSON.
//!
//! Renderer nodes are untyped and structurally unstable, so every helper here
//! takes whatever `.get()` produced and degrades to `None` instead of failing.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref VIEW_COUNT_RE: Regex = Regex::new(r"(?i)([\d,.]+)\s*([KMB])?\s*view").unwrap();
    static ref VIDEO_COUNT_RE: Regex = Regex::new(r"(\d+)\s+video").unwrap();
}

/// Extract the `ytInitialData` JSON blob embedded in a YouTube HTML page.
pub fn extract_initial_data(html: &str) -> Option<Value> {
    let start_marker = "ytInitialData = ";
    let start = html.find(start_marker)? + start_marker.len();

    let end_marker = ";</script>";
    let end = html[start..].find(end_marker)?;

    serde_json::from_str(&html[start..start + end]).ok()
}

/// Pull the first meaningful plain-text run out of a rich text node.
///
/// Handles both the `{"simpleText": ".."}` and `{"runs": [{"text": ".."}]}`
/// shapes; run texts are joined. Empty or malformed nodes yield None.
pub fn text_of(node: Option<&Value>) -> Option<String> {
    let node = node?;
    if let Some(text) = node.as_str() {
        let trimmed = text.trim();
        return (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
    if let Some(simple) = node.get("simpleText").and_then(Value::as_str) {
        let trimmed = simple.trim();
        return (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
    if let Some(runs) = node.get("runs").and_then(Value::as_array) {
        let joined = runs
            .iter()
            .filter_map(|run| run.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("");
        let trimmed = joined.trim();
        return (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
    None
}

/// Channel URL from a byline node's navigation endpoint.
///
/// Prefers the canonical base URL (`/c/name`, `/@handle`) and falls back to
/// the raw browse id.
pub fn channel_url_of(node: Option<&Value>) -> Option<String> {
    let runs = node?.get("runs")?.as_array()?;
    for run in runs {
        let Some(browse) = run
            .get("navigationEndpoint")
            .and_then(|endpoint| endpoint.get("browseEndpoint"))
        else {
            continue;
        };
        if let Some(base) = browse.get("canonicalBaseUrl").and_then(Value::as_str) {
            return Some(format!("https://www.youtube.com{base}"));
        }
        if let Some(browse_id) = browse.get("browseId").and_then(Value::as_str) {
            return Some(format!("https://www.youtube.com/channel/{browse_id}"));
        }
    }
    None
}

/// View count from free-form text like "1.2M views" or "1,234 views".
///
/// The K/M/B suffix only counts when it sits between the number and "views".
/// Unparseable text is None, never zero: "no views here" is not zero views.
pub fn view_count_of(node: Option<&Value>) -> Option<u64> {
    let text = text_of(node)?;
    let captures = VIEW_COUNT_RE.captures(&text)?;
    let number: f64 = captures
        .get(1)?
        .as_str()
        .replace(',', "")
        .parse()
        .ok()?;
    let multiplier = match captures
        .get(2)
        .map(|m| m.as_str().to_ascii_uppercase())
        .as_deref()
    {
        Some("K") => 1_000.0,
        Some("M") => 1_000_000.0,
        Some("B") => 1_000_000_000.0,
        _ => 1.0,
    };
    Some((number * multiplier) as u64)
}

/// Reported video count from a playlist subtitle like "100 videos".
pub fn video_count_of(subtitle: &str) -> Option<u64> {
    VIDEO_COUNT_RE
        .captures(subtitle)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}
