//! Sort policy for search results.

use serde::{Deserialize, Serialize};

use crate::models::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Relevance, // YouTube's native ranking, i.e. scrape order
    Date,
}

pub fn sort_videos(videos: Vec<Video>, sort_by: SortBy) -> Vec<Video> {
    match sort_by {
        SortBy::Relevance => videos,
        SortBy::Date => sort_by_date(videos),
    }
}

/// Newest first by normalized publish date. Videos without a date keep their
/// relative order and go after all dated entries.
fn sort_by_date(videos: Vec<Video>) -> Vec<Video> {
    let (mut dated, undated): (Vec<Video>, Vec<Video>) =
        videos.into_iter().partition(|v| v.publish_date.is_some());

    // ISO 8601 strings with a fixed precision sort chronologically as text.
    dated.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

    dated.extend(undated);
    dated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, publish_date: Option<&str>) -> Video {
        let mut video = Video::new(id).unwrap();
        video.publish_date = publish_date.map(str::to_string);
        video
    }

    #[test]
    fn relevance_preserves_order() {
        let videos = vec![
            video("video000001", None),
            video("video000002", Some("2024-01-01T00:00:00Z")),
            video("video000003", None),
        ];
        let sorted = sort_videos(videos, SortBy::Relevance);
        let ids: Vec<_> = sorted.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["video000001", "video000002", "video000003"]);
    }

    #[test]
    fn date_sorts_newest_first() {
        let videos = vec![
            video("old12345678", Some("2023-01-01T00:00:00Z")),
            video("new12345678", Some("2024-06-15T12:00:00Z")),
            video("mid12345678", Some("2023-12-31T23:59:59Z")),
        ];
        let sorted = sort_videos(videos, SortBy::Date);
        let ids: Vec<_> = sorted.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["new12345678", "mid12345678", "old12345678"]);
    }

    #[test]
    fn date_puts_undated_last_preserving_their_order() {
        let videos = vec![
            video("nodate00001", None),
            video("dated000001", Some("2024-01-01T00:00:00Z")),
            video("nodate00002", None),
            video("dated000002", Some("2025-01-01T00:00:00Z")),
        ];
        let sorted = sort_videos(videos, SortBy::Date);
        let ids: Vec<_> = sorted.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(
            ids,
            ["dated000002", "dated000001", "nodate00001", "nodate00002"]
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(sort_videos(vec![], SortBy::Relevance).is_empty());
        assert!(sort_videos(vec![], SortBy::Date).is_empty());
    }
}
