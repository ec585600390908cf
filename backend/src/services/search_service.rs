//! Search orchestration: validation, cache, scrape, normalize, sort, limit.

use log::debug;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::SearchResult;
use crate::services::cache::CacheService;
use crate::services::normalizer::normalize_video;
use crate::services::scraper::SearchScraper;
use crate::services::sorter::sort_videos;
use crate::utils::{validate_keyword, validate_limit, validate_sort_by};

pub struct SearchService {
    scraper: SearchScraper,
    cache: Arc<CacheService>,
}

impl SearchService {
    pub fn new(scraper: SearchScraper, cache: Arc<CacheService>) -> Self {
        SearchService { scraper, cache }
    }

    /// Search YouTube for a keyword.
    ///
    /// The cache stores the full normalized result set before sort and limit
    /// are applied, so any limit/sort combination for the same keyword is
    /// served from one cached scrape within the TTL window.
    pub async fn search(
        &self,
        keyword: Option<&str>,
        limit: Option<i64>,
        sort_by: Option<&str>,
    ) -> Result<SearchResult, ApiError> {
        let keyword = validate_keyword(keyword)?;
        let limit = validate_limit(limit)?;
        let sort_by = validate_sort_by(sort_by)?;

        if let Some(cached) = self.cache.get::<SearchResult>(&keyword).await {
            debug!("Serving '{keyword}' from cache");
            let mut videos = sort_videos(cached.videos, sort_by);
            videos.truncate(limit);
            return Ok(SearchResult::new(keyword, videos));
        }

        let videos = self.scraper.search(&keyword).await?;
        let normalized: Vec<_> = videos.into_iter().map(normalize_video).collect();

        let full = SearchResult::new(keyword.clone(), normalized);
        self.cache.set(&keyword, &full).await;

        let mut videos = sort_videos(full.videos, sort_by);
        videos.truncate(limit);
        Ok(SearchResult::new(keyword, videos))
    }
}
