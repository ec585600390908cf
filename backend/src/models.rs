use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::is_valid_video_id;

/// ISO 8601 UTC timestamp with second precision, e.g. "2025-12-08T10:30:45Z".
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Video {
    /// Construct a video with only its identity set. Returns None when the
    /// id does not look like a YouTube video id (11 chars of [A-Za-z0-9_-]).
    pub fn new(video_id: &str) -> Option<Self> {
        if !is_valid_video_id(video_id) {
            return None;
        }
        Some(Video {
            video_id: video_id.to_string(),
            title: None,
            url: watch_url(video_id),
            channel: None,
            channel_url: None,
            publish_date: None,
            view_count: None,
            description: None,
        })
    }
}

/// A playlist entry. Same shape as Video plus the display duration and the
/// 1-based position assigned in scrape order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub video_id: String,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    pub position: u32,
}

impl Track {
    pub fn new(video_id: &str, title: String, position: u32) -> Option<Self> {
        if !is_valid_video_id(video_id) || title.trim().is_empty() {
            return None;
        }
        Some(Track {
            video_id: video_id.to_string(),
            title,
            url: watch_url(video_id),
            channel: None,
            channel_url: None,
            publish_date: None,
            duration: None,
            view_count: None,
            position,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub playlist_id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub video_count: u64,
    pub partial: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_reason: Option<PartialReason>,
    pub fetched_at: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist from a finished scrape. The reported video count wins
    /// when present; otherwise the number of fetched tracks is used.
    pub fn from_scrape(
        playlist_id: String,
        url: String,
        report: &ScrapeReport,
        partial: bool,
        tracks: Vec<Track>,
    ) -> Self {
        Playlist {
            playlist_id,
            url,
            title: report.title.clone(),
            video_count: report.video_count.unwrap_or(tracks.len() as u64),
            partial,
            partial_reason: report.partial_reason,
            fetched_at: iso_timestamp(),
            tracks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub search_keyword: String,
    pub result_count: usize,
    pub videos: Vec<Video>,
    pub timestamp: String,
}

impl SearchResult {
    /// result_count always equals videos.len(); there is no other way to
    /// build one.
    pub fn new(search_keyword: String, videos: Vec<Video>) -> Self {
        SearchResult {
            search_keyword,
            result_count: videos.len(),
            videos,
            timestamp: iso_timestamp(),
        }
    }
}

/// Why a playlist scrape stopped before reaching the end of the track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartialReason {
    Timeout,
    ContinuationTimeout,
    ContinuationError,
    BatchLimitExceeded,
}

/// Diagnostics accumulated across one playlist scrape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub title: Option<String>,
    pub video_count: Option<u64>,
    pub continuation_batches: u32,
    pub elapsed_seconds: f64,
    pub fetched_track_count: usize,
    pub partial_reason: Option<PartialReason>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}
