use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::errors::ApiError;
use crate::services::sorter::SortBy;

/// YouTube web hosts we are willing to scrape. Continuation requests and
/// playlist URLs must both resolve to one of these.
pub const ALLOWED_YOUTUBE_HOSTS: &[&str] = &[
    "www.youtube.com",
    "youtube.com",
    "m.youtube.com",
    "music.youtube.com",
];

lazy_static! {
    static ref VIDEO_ID_RE: Regex = Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap();
    static ref PLAYLIST_ID_RE: Regex = Regex::new(r"^[a-zA-Z0-9_-]{6,50}$").unwrap();
}

pub fn is_valid_video_id(video_id: &str) -> bool {
    VIDEO_ID_RE.is_match(video_id)
}

pub fn is_allowed_youtube_host(host: &str) -> bool {
    ALLOWED_YOUTUBE_HOSTS.contains(&host)
}

/// Keyword must be present and 1-200 chars after trimming.
pub fn validate_keyword(keyword: Option<&str>) -> Result<String, ApiError> {
    let value = keyword.unwrap_or("").trim().to_string();
    if value.is_empty() {
        return Err(ApiError::MissingParameter(
            "keyword is a required parameter".to_string(),
        ));
    }
    if value.len() > 200 {
        return Err(ApiError::invalid(
            "keyword must be between 1 and 200 characters",
            "INVALID_KEYWORD_LENGTH",
        ));
    }
    Ok(value)
}

/// Result limit within 1-100 inclusive; defaults to 1 when absent.
pub fn validate_limit(limit: Option<i64>) -> Result<usize, ApiError> {
    match limit {
        None => Ok(1),
        Some(value) if (1..=100).contains(&value) => Ok(value as usize),
        Some(_) => Err(ApiError::invalid(
            "limit must be between 1 and 100",
            "INVALID_LIMIT",
        )),
    }
}

/// Sort field; defaults to relevance.
pub fn validate_sort_by(sort_by: Option<&str>) -> Result<SortBy, ApiError> {
    match sort_by {
        None => Ok(SortBy::Relevance),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "date" => Ok(SortBy::Date),
            _ => Err(ApiError::invalid(
                "sort_by only supports relevance or date",
                "INVALID_SORT_BY",
            )),
        },
    }
}

/// Validate a playlist URL and pull out the `list` parameter.
///
/// The URL must be http(s) on an allowed YouTube host and carry a `list`
/// query value of 6-50 id characters. Watch URLs with an attached playlist
/// (`/watch?v=..&list=..`) are accepted.
pub fn extract_playlist_id(playlist_url: &str) -> Result<String, ApiError> {
    let parsed = Url::parse(playlist_url).map_err(|_| {
        ApiError::invalid("playlist_url is not a valid URL", "INVALID_PLAYLIST_URL")
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::invalid(
            "playlist_url must use http or https",
            "INVALID_PLAYLIST_URL",
        ));
    }

    let host = parsed.host_str().unwrap_or("");
    if !is_allowed_youtube_host(host) {
        return Err(ApiError::invalid(
            "playlist_url must point at a YouTube domain",
            "INVALID_PLAYLIST_URL",
        ));
    }

    let playlist_id = parsed
        .query_pairs()
        .find(|(key, _)| key == "list")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            ApiError::invalid(
                "playlist_url is missing the list parameter",
                "PLAYLIST_ID_NOT_FOUND",
            )
        })?;

    if !PLAYLIST_ID_RE.is_match(&playlist_id) {
        return Err(ApiError::invalid(
            "list parameter is not a valid playlist id",
            "INVALID_PLAYLIST_ID",
        ));
    }

    Ok(playlist_id)
}
