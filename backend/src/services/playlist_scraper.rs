//! Playlist scraper: initial page fetch plus continuation-token pagination
//! under a wall-clock budget.

use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use url::Url;

use crate::errors::ApiError;
use crate::models::{PartialReason, ScrapeReport, Track};
use crate::services::extractor::{
    channel_url_of, extract_initial_data, text_of, video_count_of, view_count_of,
};
use crate::utils::is_allowed_youtube_host;

/// Circuit breaker against upstreams that hand out tokens forever.
pub const MAX_CONTINUATION_BATCHES: u32 = 15;
/// Wall-clock budget for one whole scrape, initial fetch included.
pub const MAX_TOTAL_SCRAPE_SECONDS: u64 = 30;
pub const INITIAL_REQUEST_TIMEOUT: u64 = 10;
pub const CONTINUATION_REQUEST_TIMEOUT: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ContinuationError {
    #[error("continuation request timed out")]
    Timeout,
    #[error("continuation request failed: {0}")]
    Upstream(String),
}

/// One page of continuation results. Implemented by the real scraper and by
/// synthetic sources in tests.
#[async_trait]
pub trait ContinuationSource: Sync {
    async fn fetch_batch(&self, token: &str, timeout: Duration)
        -> Result<Value, ContinuationError>;
}

pub struct PlaylistScraper {
    client: Client,
    base_url: String,
}

impl PlaylistScraper {
    pub fn new(client: Client, base_url: String) -> Self {
        PlaylistScraper { client, base_url }
    }

    fn continuation_endpoint(&self) -> String {
        format!("{}/youtubei/v1/browse", self.base_url)
    }

    /// Fetch all tracks reachable within budget.
    ///
    /// Returns the accumulated tracks, whether the result is partial, and a
    /// scrape report with header metadata and diagnostics. Initial fetch or
    /// top-level parse failures are hard errors; continuation failures
    /// degrade to a partial result.
    pub async fn fetch_playlist(
        &self,
        playlist_url: &str,
    ) -> Result<(Vec<Track>, bool, ScrapeReport), ApiError> {
        let started = Instant::now();

        // Continuation requests may only ever target the domain we scrape.
        let endpoint = self.continuation_endpoint();
        ensure_scrapeable_endpoint(&endpoint)?;

        debug!("Fetching playlist page: {playlist_url}");
        let response = self
            .client
            .get(playlist_url)
            .timeout(Duration::from_secs(INITIAL_REQUEST_TIMEOUT))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                error!("Failed to fetch playlist page: {e}");
                ApiError::scraping(format!("playlist page request failed: {e}"))
            })?;
        let html = response.text().await.map_err(|e| {
            error!("Failed to read playlist page body: {e}");
            ApiError::scraping(format!("playlist page read failed: {e}"))
        })?;

        // Unlike search, an unparseable playlist page is a real error: the
        // URL was validated as a playlist, so there is no empty fallback.
        let data = extract_initial_data(&html).ok_or_else(|| {
            error!("ytInitialData not found in playlist page");
            ApiError::scraping("ytInitialData not found in playlist page")
        })?;

        let (title, video_count) = extract_playlist_header(&data);

        let mut tracks = Vec::new();
        let mut position = 0u32;
        tracks.extend(extract_tracks(&data, &mut position));

        let (batches, partial_reason) = match extract_continuation_token(&data) {
            Some(token) => {
                drain_continuations(self, token, started, &mut tracks, &mut position).await
            }
            None => (0, None),
        };

        let partial = partial_reason.is_some();
        let report = ScrapeReport {
            title,
            video_count,
            continuation_batches: batches,
            elapsed_seconds: started.elapsed().as_secs_f64(),
            fetched_track_count: tracks.len(),
            partial_reason,
        };
        info!(
            "Playlist scrape complete: {} tracks, partial={partial}, batches={batches}",
            tracks.len()
        );
        Ok((tracks, partial, report))
    }
}

#[async_trait]
impl ContinuationSource for PlaylistScraper {
    async fn fetch_batch(
        &self,
        token: &str,
        timeout: Duration,
    ) -> Result<Value, ContinuationError> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": "WEB",
                    "clientVersion": "2.20240101.00.00",
                }
            },
            "continuation": token,
        });

        let response = self
            .client
            .post(self.continuation_endpoint())
            .json(&body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ContinuationError::Timeout
                } else {
                    ContinuationError::Upstream(e.to_string())
                }
            })?
            .error_for_status()
            .map_err(|e| ContinuationError::Upstream(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ContinuationError::Upstream(e.to_string()))
    }
}

/// Follow continuation tokens until the list ends or a budget trips.
///
/// The per-batch timeout shrinks as the total budget is consumed, so one
/// slow batch cannot blow the whole budget, and the batch cap terminates
/// token loops that never end. Returns the batch count and, when the scrape
/// stopped early, why.
pub(crate) async fn drain_continuations<S: ContinuationSource>(
    source: &S,
    first_token: String,
    started: Instant,
    tracks: &mut Vec<Track>,
    position: &mut u32,
) -> (u32, Option<PartialReason>) {
    let total_budget = Duration::from_secs(MAX_TOTAL_SCRAPE_SECONDS);
    let mut token = first_token;
    let mut batches = 0u32;

    loop {
        if batches >= MAX_CONTINUATION_BATCHES {
            warn!("Reached continuation batch limit ({MAX_CONTINUATION_BATCHES})");
            return (batches, Some(PartialReason::BatchLimitExceeded));
        }

        let elapsed = started.elapsed();
        if elapsed >= total_budget {
            warn!(
                "Playlist scrape exceeded {MAX_TOTAL_SCRAPE_SECONDS}s budget after {} tracks",
                tracks.len()
            );
            return (batches, Some(PartialReason::Timeout));
        }

        let timeout =
            (total_budget - elapsed).min(Duration::from_secs(CONTINUATION_REQUEST_TIMEOUT));
        batches += 1;
        debug!(
            "Fetching continuation batch {batches}, elapsed {:.1}s",
            elapsed.as_secs_f64()
        );

        match source.fetch_batch(&token, timeout).await {
            Ok(data) => {
                tracks.extend(extract_tracks(&data, position));
                match extract_continuation_token(&data) {
                    Some(next) => token = next,
                    None => {
                        debug!("No more continuation tokens");
                        return (batches, None);
                    }
                }
            }
            Err(ContinuationError::Timeout) => {
                warn!("Continuation batch {batches} timed out");
                return (batches, Some(PartialReason::ContinuationTimeout));
            }
            Err(ContinuationError::Upstream(e)) => {
                error!("Continuation batch {batches} failed: {e}");
                return (batches, Some(PartialReason::ContinuationError));
            }
        }
    }
}

fn ensure_scrapeable_endpoint(endpoint: &str) -> Result<(), ApiError> {
    let host = Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default();
    if !is_allowed_youtube_host(&host) {
        return Err(ApiError::scraping(format!(
            "continuation endpoint host '{host}' is not an allowed YouTube domain"
        )));
    }
    Ok(())
}

/// Best-effort header metadata: (title, reported video count). Track data is
/// primary; a missing or reshaped header is not an error.
fn extract_playlist_header(data: &Value) -> (Option<String>, Option<u64>) {
    let Some(header) = data
        .get("header")
        .and_then(|header| header.get("playlistHeaderRenderer"))
    else {
        debug!("Playlist header not found");
        return (None, None);
    };
    let title = text_of(header.get("title"));
    let video_count = text_of(header.get("subtitle"))
        .as_deref()
        .and_then(video_count_of);
    (title, video_count)
}

/// Extract tracks from any of the response shapes we know.
///
/// Pages come in two layouts (dedicated playlist pages, and watch pages with
/// an attached playlist panel), and continuation responses carry items in a
/// third wrapper. The watch shape is tried first, then the playlist page
/// shape, then continuation items. The position counter is shared across
/// calls and never resets between batches.
pub(crate) fn extract_tracks(data: &Value, position: &mut u32) -> Vec<Track> {
    let mut tracks = Vec::new();

    if let Some(playlist) = watch_playlist(data) {
        let items = playlist
            .get("contents")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for item in items {
            if let Some(renderer) = item.get("playlistPanelVideoRenderer") {
                *position += 1;
                if let Some(track) = parse_panel_renderer(renderer, *position) {
                    tracks.push(track);
                }
            }
        }
        return tracks;
    }

    if let Some(sections) = browse_item_sections(data) {
        for section in sections {
            let items = section
                .get("contents")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            for item in items {
                if let Some(renderer) = item.get("playlistVideoRenderer") {
                    *position += 1;
                    if let Some(track) = parse_playlist_video_renderer(renderer, *position) {
                        tracks.push(track);
                    }
                }
            }
        }
        return tracks;
    }

    for item in continuation_items(data) {
        if let Some(renderer) = item.get("playlistVideoRenderer") {
            *position += 1;
            if let Some(track) = parse_playlist_video_renderer(renderer, *position) {
                tracks.push(track);
            }
        }
    }

    tracks
}

/// Next continuation token, if any, from a page or continuation response.
pub(crate) fn extract_continuation_token(data: &Value) -> Option<String> {
    if let Some(playlist) = watch_playlist(data) {
        return legacy_continuation_token(playlist);
    }

    if let Some(sections) = browse_item_sections(data) {
        for section in sections {
            if let Some(token) = legacy_continuation_token(section) {
                return Some(token);
            }
            if let Some(items) = section.get("contents").and_then(Value::as_array) {
                if let Some(token) = items.iter().find_map(|item| item_continuation_token(item)) {
                    return Some(token);
                }
            }
        }
        return None;
    }

    continuation_items(data)
        .into_iter()
        .find_map(item_continuation_token)
}

/// Watch page shape: /watch?v=..&list=.. renders the playlist in a panel.
fn watch_playlist(data: &Value) -> Option<&Value> {
    data.get("contents")?
        .get("twoColumnWatchNextResults")?
        .get("playlist")?
        .get("playlist")
}

/// Playlist page shape: /playlist?list=.. renders tracks inside browse tabs.
fn browse_item_sections(data: &Value) -> Option<Vec<&Value>> {
    let tabs = data
        .get("contents")?
        .get("twoColumnBrowseResultsRenderer")?
        .get("tabs")?
        .as_array()?;

    let mut sections = Vec::new();
    for tab in tabs {
        let contents = tab
            .get("tabRenderer")
            .and_then(|tab| tab.get("content"))
            .and_then(|content| content.get("sectionListRenderer"))
            .and_then(|list| list.get("contents"))
            .and_then(Value::as_array);
        if let Some(contents) = contents {
            for section in contents {
                if let Some(section) = section.get("itemSectionRenderer") {
                    sections.push(section);
                }
            }
        }
    }
    Some(sections)
}

/// Continuation response shape: appended items arrive under
/// onResponseReceivedActions.
fn continuation_items(data: &Value) -> Vec<&Value> {
    data.get("onResponseReceivedActions")
        .and_then(Value::as_array)
        .map(|actions| {
            actions
                .iter()
                .filter_map(|action| {
                    action
                        .get("appendContinuationItemsAction")?
                        .get("continuationItems")?
                        .as_array()
                })
                .flatten()
                .collect()
        })
        .unwrap_or_default()
}

fn legacy_continuation_token(node: &Value) -> Option<String> {
    node.get("continuations")?
        .as_array()?
        .first()?
        .get("nextContinuationData")?
        .get("continuation")?
        .as_str()
        .map(str::to_string)
}

fn item_continuation_token(item: &Value) -> Option<String> {
    item.get("continuationItemRenderer")?
        .get("continuationEndpoint")?
        .get("continuationCommand")?
        .get("token")?
        .as_str()
        .map(str::to_string)
}

fn parse_playlist_video_renderer(renderer: &Value, position: u32) -> Option<Track> {
    let video_id = renderer.get("videoId")?.as_str()?;
    let title = text_of(renderer.get("title"))?;
    let mut track = Track::new(video_id, title, position)?;

    track.channel = text_of(renderer.get("shortBylineText"));
    track.channel_url = channel_url_of(renderer.get("shortBylineText"));
    track.publish_date = text_of(renderer.get("publishedTimeText"));
    track.duration = text_of(renderer.get("lengthText")).or_else(|| {
        raw_seconds(renderer.get("videoDetails"))
    });
    track.view_count = view_count_of(
        renderer
            .get("videoDetails")
            .and_then(|details| details.get("viewCountText")),
    );

    Some(track)
}

/// Watch panel entries carry less metadata: byline moves to longBylineText
/// and there is no publish date or view count.
fn parse_panel_renderer(renderer: &Value, position: u32) -> Option<Track> {
    let video_id = renderer.get("videoId")?.as_str()?;
    let title = text_of(renderer.get("title"))?;
    let mut track = Track::new(video_id, title, position)?;

    track.channel = text_of(renderer.get("longBylineText"));
    track.channel_url = channel_url_of(renderer.get("longBylineText"));
    track.duration = text_of(renderer.get("lengthText"));

    Some(track)
}

fn raw_seconds(details: Option<&Value>) -> Option<String> {
    let details = details?;
    for key in ["durationSeconds", "lengthSeconds"] {
        match details.get(key) {
            Some(Value::String(seconds)) => return Some(seconds.clone()),
            Some(Value::Number(seconds)) => return Some(seconds.to_string()),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn playlist_video(id: &str, title: &str) -> Value {
        json!({
            "playlistVideoRenderer": {
                "videoId": id,
                "title": {"runs": [{"text": title}]},
                "shortBylineText": {
                    "runs": [{
                        "text": "Some Channel",
                        "navigationEndpoint": {"browseEndpoint": {"browseId": "UCchan"}}
                    }]
                },
                "lengthText": {"simpleText": "3:45"},
            }
        })
    }

    fn browse_page(items: Vec<Value>) -> Value {
        json!({
            "contents": {
                "twoColumnBrowseResultsRenderer": {
                    "tabs": [{
                        "tabRenderer": {
                            "content": {
                                "sectionListRenderer": {
                                    "contents": [{
                                        "itemSectionRenderer": {"contents": items}
                                    }]
                                }
                            }
                        }
                    }]
                }
            }
        })
    }

    fn watch_page(items: Vec<Value>) -> Value {
        json!({
            "contents": {
                "twoColumnWatchNextResults": {
                    "playlist": {"playlist": {"contents": items}}
                }
            }
        })
    }

    fn continuation_batch(id: &str, next_token: Option<&str>) -> Value {
        let mut items = vec![playlist_video(id, "Batch Track")];
        if let Some(token) = next_token {
            items.push(json!({
                "continuationItemRenderer": {
                    "continuationEndpoint": {"continuationCommand": {"token": token}}
                }
            }));
        }
        json!({
            "onResponseReceivedActions": [{
                "appendContinuationItemsAction": {"continuationItems": items}
            }]
        })
    }

    fn batch_video_id(n: u32) -> String {
        format!("video{n:06}")
    }

    struct AlwaysMore {
        calls: AtomicU32,
    }

    #[async_trait]
    impl ContinuationSource for AlwaysMore {
        async fn fetch_batch(
            &self,
            _token: &str,
            _timeout: Duration,
        ) -> Result<Value, ContinuationError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(continuation_batch(&batch_video_id(n), Some("again")))
        }
    }

    struct EndsAfter {
        remaining: AtomicU32,
    }

    #[async_trait]
    impl ContinuationSource for EndsAfter {
        async fn fetch_batch(
            &self,
            _token: &str,
            _timeout: Duration,
        ) -> Result<Value, ContinuationError> {
            let left = self.remaining.fetch_sub(1, Ordering::SeqCst);
            let next = if left > 1 { Some("again") } else { None };
            Ok(continuation_batch(&batch_video_id(left), next))
        }
    }

    struct Breaks;

    #[async_trait]
    impl ContinuationSource for Breaks {
        async fn fetch_batch(
            &self,
            _token: &str,
            _timeout: Duration,
        ) -> Result<Value, ContinuationError> {
            Err(ContinuationError::Upstream("boom".to_string()))
        }
    }

    struct Stalls;

    #[async_trait]
    impl ContinuationSource for Stalls {
        async fn fetch_batch(
            &self,
            _token: &str,
            _timeout: Duration,
        ) -> Result<Value, ContinuationError> {
            Err(ContinuationError::Timeout)
        }
    }

    #[test]
    fn browse_page_tracks_get_positions() {
        let data = browse_page(vec![
            playlist_video("aaaaaaaaaaa", "First"),
            playlist_video("bbbbbbbbbbb", "Second"),
        ]);
        let mut position = 0;
        let tracks = extract_tracks(&data, &mut position);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].position, 1);
        assert_eq!(tracks[1].position, 2);
        assert_eq!(tracks[0].channel.as_deref(), Some("Some Channel"));
        assert_eq!(
            tracks[0].channel_url.as_deref(),
            Some("https://www.youtube.com/channel/UCchan")
        );
        assert_eq!(tracks[0].duration.as_deref(), Some("3:45"));
    }

    #[test]
    fn watch_page_panel_tracks() {
        let data = watch_page(vec![
            json!({
                "playlistPanelVideoRenderer": {
                    "videoId": "ccccccccccc",
                    "title": {"simpleText": "Panel Track"},
                    "longBylineText": {"runs": [{"text": "Artist"}]},
                    "lengthText": {"simpleText": "4:20"},
                }
            }),
            json!({"somethingElse": {}}),
        ]);
        let mut position = 0;
        let tracks = extract_tracks(&data, &mut position);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Panel Track");
        assert_eq!(tracks[0].channel.as_deref(), Some("Artist"));
        assert_eq!(tracks[0].duration.as_deref(), Some("4:20"));
        assert_eq!(tracks[0].publish_date, None);
        assert_eq!(tracks[0].view_count, None);
    }

    #[test]
    fn positions_continue_across_batches() {
        let mut position = 0;
        let first = extract_tracks(&browse_page(vec![playlist_video("aaaaaaaaaaa", "One")]), &mut position);
        let second = extract_tracks(&continuation_batch("bbbbbbbbbbb", None), &mut position);
        assert_eq!(first[0].position, 1);
        assert_eq!(second[0].position, 2);
    }

    #[test]
    fn entries_without_id_or_title_are_skipped() {
        let data = browse_page(vec![
            json!({"playlistVideoRenderer": {"title": {"simpleText": "No id"}}}),
            json!({"playlistVideoRenderer": {"videoId": "ddddddddddd"}}),
            playlist_video("eeeeeeeeeee", "Kept"),
        ]);
        let mut position = 0;
        let tracks = extract_tracks(&data, &mut position);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].video_id, "eeeeeeeeeee");
    }

    #[test]
    fn header_extraction_is_best_effort() {
        let data = json!({
            "header": {
                "playlistHeaderRenderer": {
                    "title": {"simpleText": "Learning Python"},
                    "subtitle": {"simpleText": "50 videos · updated today"},
                }
            }
        });
        let (title, count) = extract_playlist_header(&data);
        assert_eq!(title.as_deref(), Some("Learning Python"));
        assert_eq!(count, Some(50));

        let (title, count) = extract_playlist_header(&json!({}));
        assert_eq!(title, None);
        assert_eq!(count, None);
    }

    #[test]
    fn token_from_legacy_and_modern_shapes() {
        let legacy = json!({
            "contents": {
                "twoColumnBrowseResultsRenderer": {
                    "tabs": [{
                        "tabRenderer": {
                            "content": {
                                "sectionListRenderer": {
                                    "contents": [{
                                        "itemSectionRenderer": {
                                            "continuations": [{
                                                "nextContinuationData": {"continuation": "tok-legacy"}
                                            }]
                                        }
                                    }]
                                }
                            }
                        }
                    }]
                }
            }
        });
        assert_eq!(
            extract_continuation_token(&legacy).as_deref(),
            Some("tok-legacy")
        );

        let modern = continuation_batch("fffffffffff", Some("tok-modern"));
        assert_eq!(
            extract_continuation_token(&modern).as_deref(),
            Some("tok-modern")
        );

        let done = continuation_batch("fffffffffff", None);
        assert_eq!(extract_continuation_token(&done), None);
    }

    #[test]
    fn watch_page_token_comes_from_playlist_continuations() {
        let data = json!({
            "contents": {
                "twoColumnWatchNextResults": {
                    "playlist": {
                        "playlist": {
                            "contents": [],
                            "continuations": [{
                                "nextContinuationData": {"continuation": "tok-watch"}
                            }]
                        }
                    }
                }
            }
        });
        assert_eq!(
            extract_continuation_token(&data).as_deref(),
            Some("tok-watch")
        );
    }

    #[rocket::async_test]
    async fn endless_tokens_hit_the_batch_cap() {
        let source = AlwaysMore {
            calls: AtomicU32::new(0),
        };
        let mut tracks = Vec::new();
        let mut position = 0;
        let (batches, reason) = drain_continuations(
            &source,
            "start".to_string(),
            Instant::now(),
            &mut tracks,
            &mut position,
        )
        .await;

        assert_eq!(batches, MAX_CONTINUATION_BATCHES);
        assert_eq!(reason, Some(PartialReason::BatchLimitExceeded));
        assert_eq!(tracks.len(), MAX_CONTINUATION_BATCHES as usize);
    }

    #[rocket::async_test]
    async fn loop_ends_cleanly_when_tokens_run_out() {
        let source = EndsAfter {
            remaining: AtomicU32::new(3),
        };
        let mut tracks = Vec::new();
        let mut position = 0;
        let (batches, reason) = drain_continuations(
            &source,
            "start".to_string(),
            Instant::now(),
            &mut tracks,
            &mut position,
        )
        .await;

        assert_eq!(batches, 3);
        assert_eq!(reason, None);
        assert_eq!(tracks.len(), 3);
    }

    #[rocket::async_test]
    async fn upstream_error_marks_partial() {
        let source = Breaks;
        let mut tracks = Vec::new();
        let mut position = 0;
        let (batches, reason) = drain_continuations(
            &source,
            "start".to_string(),
            Instant::now(),
            &mut tracks,
            &mut position,
        )
        .await;

        assert_eq!(batches, 1);
        assert_eq!(reason, Some(PartialReason::ContinuationError));
        assert!(tracks.is_empty());
    }

    #[rocket::async_test]
    async fn batch_timeout_marks_partial() {
        let source = Stalls;
        let mut tracks = Vec::new();
        let mut position = 0;
        let (_, reason) = drain_continuations(
            &source,
            "start".to_string(),
            Instant::now(),
            &mut tracks,
            &mut position,
        )
        .await;

        assert_eq!(reason, Some(PartialReason::ContinuationTimeout));
    }

    #[rocket::async_test]
    async fn exhausted_budget_marks_timeout_without_fetching() {
        let source = AlwaysMore {
            calls: AtomicU32::new(0),
        };
        let long_ago = Instant::now() - Duration::from_secs(MAX_TOTAL_SCRAPE_SECONDS + 1);
        let mut tracks = Vec::new();
        let mut position = 0;
        let (batches, reason) = drain_continuations(
            &source,
            "start".to_string(),
            long_ago,
            &mut tracks,
            &mut position,
        )
        .await;

        assert_eq!(batches, 0);
        assert_eq!(reason, Some(PartialReason::Timeout));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn continuation_endpoint_must_be_youtube() {
        assert!(ensure_scrapeable_endpoint("https://www.youtube.com/youtubei/v1/browse").is_ok());
        let err =
            ensure_scrapeable_endpoint("https://youtube.example.com/youtubei/v1/browse")
                .unwrap_err();
        assert_eq!(err.error_code(), "PLAYLIST_SCRAPING_ERROR");
        assert!(ensure_scrapeable_endpoint("not a url").is_err());
    }
}
