pub mod cache;
pub mod extractor;
pub mod normalizer;
pub mod playlist_scraper;
pub mod playlist_service;
pub mod scraper;
pub mod search_service;
pub mod sorter;
