use crate::services::cache::CacheService;
use crate::services::playlist_scraper::PlaylistScraper;
use crate::services::playlist_service::PlaylistService;
use crate::services::scraper::SearchScraper;
use crate::services::search_service::SearchService;
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;
use std::time::Duration;

// YouTube serves a consent interstitial to unknown agents; a desktop UA plus
// the CONSENT cookie gets the regular results page.
const SCRAPER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

lazy_static! {
    pub static ref YOUTUBE_BASE_URL: String = env::var("YOUTUBE_BASE_URL")
        .unwrap_or_else(|_| "https://www.youtube.com".to_string());
    pub static ref YOUTUBE_TIMEOUT_SECONDS: u64 = env::var("YOUTUBE_TIMEOUT_SECONDS")
        .unwrap_or_else(|_| "10".to_string())
        .parse::<u64>()
        .unwrap_or(10);
    pub static ref REDIS_URL: String =
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/".to_string());
    pub static ref REDIS_ENABLED: bool = env::var("REDIS_ENABLED")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(true);
    pub static ref CACHE_ENABLED: bool = env::var("CACHE_ENABLED")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(true);
    pub static ref CACHE_TTL_SECONDS: u64 = env::var("CACHE_TTL_SECONDS")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<u64>()
        .unwrap_or(3600);
    pub static ref ALLOWED_ORIGIN: String =
        env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting YouTube metadata search backend...");
}

/// The one HTTP client shared by every scrape. Holds the connection pool and
/// default headers; carries no per-request state.
pub fn create_http_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(SCRAPER_USER_AGENT));
    headers.insert(COOKIE, HeaderValue::from_static("CONSENT=YES+"));
    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

pub async fn create_cache_service() -> CacheService {
    let ttl = Duration::from_secs(*CACHE_TTL_SECONDS);
    if !*CACHE_ENABLED {
        info!("Result cache disabled by configuration");
        return CacheService::disabled();
    }
    if *REDIS_ENABLED {
        CacheService::connect_redis(&REDIS_URL, ttl).await
    } else {
        info!("Using in-process result cache (redis disabled)");
        CacheService::memory(ttl)
    }
}

/// Wire every service once at startup; components are passed explicitly
/// instead of living behind globals.
pub async fn create_app_state() -> Result<AppState> {
    let client = create_http_client()?;
    let cache = Arc::new(create_cache_service().await);

    let search_scraper = SearchScraper::new(
        client.clone(),
        YOUTUBE_BASE_URL.clone(),
        Duration::from_secs(*YOUTUBE_TIMEOUT_SECONDS),
    );
    let playlist_scraper = PlaylistScraper::new(client, YOUTUBE_BASE_URL.clone());

    Ok(AppState {
        search_service: SearchService::new(search_scraper, cache.clone()),
        playlist_service: PlaylistService::new(playlist_scraper, cache),
    })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[ALLOWED_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
