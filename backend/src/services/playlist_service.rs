//! Playlist orchestration: URL validation, cache policy, scrape, normalize.

use log::{debug, info, warn};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::Playlist;
use crate::services::cache::CacheService;
use crate::services::normalizer::normalize_track;
use crate::services::playlist_scraper::PlaylistScraper;
use crate::utils::extract_playlist_id;

pub struct PlaylistService {
    scraper: PlaylistScraper,
    cache: Arc<CacheService>,
}

impl PlaylistService {
    pub fn new(scraper: PlaylistScraper, cache: Arc<CacheService>) -> Self {
        PlaylistService { scraper, cache }
    }

    /// Fetch full playlist metadata with all reachable tracks.
    pub async fn get_playlist_metadata(
        &self,
        playlist_url: &str,
        force_refresh: bool,
    ) -> Result<Playlist, ApiError> {
        let playlist_id = extract_playlist_id(playlist_url)?;
        info!("Processing playlist_id: {playlist_id}");

        let cache_key = playlist_cache_key(&playlist_id);
        if !force_refresh {
            if let Some(cached) = self.cache.get::<Playlist>(&cache_key).await {
                debug!("Cache hit for playlist_id: {playlist_id}");
                return Ok(cached);
            }
        }

        let (tracks, partial, report) = self.scraper.fetch_playlist(playlist_url).await?;
        let tracks: Vec<_> = tracks.into_iter().map(normalize_track).collect();

        let playlist = Playlist::from_scrape(
            playlist_id,
            playlist_url.to_string(),
            &report,
            partial,
            tracks,
        );
        self.store_if_complete(&playlist).await;

        info!(
            "Playlist fetch complete: {}, tracks={}, partial={}",
            playlist.playlist_id,
            playlist.tracks.len(),
            playlist.partial
        );
        Ok(playlist)
    }

    /// Cache-population policy: only complete, non-empty playlists are
    /// eligible. A partial result cached under the canonical key would serve
    /// incomplete data to everyone until the TTL expires.
    pub async fn store_if_complete(&self, playlist: &Playlist) {
        if playlist.partial {
            warn!(
                "Skipping cache for partial playlist {} (reason: {:?})",
                playlist.playlist_id, playlist.partial_reason
            );
            return;
        }
        if playlist.tracks.is_empty() {
            debug!("Skipping cache for empty playlist {}", playlist.playlist_id);
            return;
        }
        self.cache
            .set(&playlist_cache_key(&playlist.playlist_id), playlist)
            .await;
    }
}

fn playlist_cache_key(playlist_id: &str) -> String {
    format!("playlist:{playlist_id}")
}
