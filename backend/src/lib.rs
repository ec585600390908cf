pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

use rocket::serde::json::{json, Value};
use rocket::{get, routes, Build, Rocket};

use crate::services::playlist_service::PlaylistService;
use crate::services::search_service::SearchService;

pub struct AppState {
    pub search_service: SearchService,
    pub playlist_service: PlaylistService,
}

#[get("/health")]
fn health() -> Value {
    json!({"status": "ok"})
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![health])
        .mount(
            "/api/v1",
            routes![api::search::search_videos, api::playlist::get_playlist_metadata],
        )
}
