//! Search page scraper: fetch a results page and walk its embedded JSON.

use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::ApiError;
use crate::models::Video;
use crate::services::extractor::{
    channel_url_of, extract_initial_data, text_of, view_count_of,
};

pub struct SearchScraper {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SearchScraper {
    pub fn new(client: Client, base_url: String, timeout: Duration) -> Self {
        SearchScraper {
            client,
            base_url,
            timeout,
        }
    }

    /// Fetch search results for a keyword.
    ///
    /// Transport failures and non-2xx responses are hard errors. A page the
    /// marker or JSON cannot be pulled from is an empty result set: a
    /// transient empty page is far more common than a broken scraper.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Video>, ApiError> {
        let url = format!("{}/results", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("search_query", keyword), ("hl", "en")])
            .timeout(self.timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!("YouTube search request failed: {e}");
                ApiError::YouTubeUnavailable
            })?;

        let html = response.text().await.map_err(|e| {
            warn!("Failed to read YouTube search response body: {e}");
            ApiError::YouTubeUnavailable
        })?;

        let Some(data) = extract_initial_data(&html) else {
            warn!("ytInitialData not found in search page, returning no results");
            return Ok(Vec::new());
        };

        let videos = extract_videos(&data);
        debug!("Extracted {} videos for keyword '{keyword}'", videos.len());
        Ok(videos)
    }
}

/// Collect every video entry in the parsed page, in document order.
pub fn extract_videos(data: &Value) -> Vec<Video> {
    let mut renderers = Vec::new();
    collect_video_renderers(data, &mut renderers);
    renderers.into_iter().filter_map(parse_video_renderer).collect()
}

/// Depth-first walk over the whole structure. Search result layouts move
/// around between page variants, so we match on the `videoRenderer`
/// signature key wherever it appears instead of fixed paths.
fn collect_video_renderers<'a>(node: &'a Value, out: &mut Vec<&'a Value>) {
    match node {
        Value::Object(map) => {
            if let Some(renderer) = map.get("videoRenderer") {
                out.push(renderer);
            }
            for value in map.values() {
                collect_video_renderers(value, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_video_renderers(item, out);
            }
        }
        _ => {}
    }
}

fn parse_video_renderer(renderer: &Value) -> Option<Video> {
    let video_id = renderer.get("videoId")?.as_str()?;
    let mut video = Video::new(video_id)?;

    video.title = text_of(renderer.get("title"));
    video.channel = text_of(renderer.get("ownerText"));
    video.channel_url = channel_url_of(renderer.get("ownerText"));
    video.publish_date = text_of(renderer.get("publishedTimeText"));
    video.view_count = view_count_of(renderer.get("viewCountText"));
    video.description = renderer
        .get("detailedMetadataSnippets")
        .and_then(Value::as_array)
        .and_then(|snippets| snippets.first())
        .and_then(|snippet| text_of(snippet.get("snippetText")));

    Some(video)
}
