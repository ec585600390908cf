use rocket::serde::json::Json;
use rocket::{get, State};

use crate::errors::ApiError;
use crate::models::Playlist;
use crate::AppState;

#[get("/playlist/metadata?<playlist_url>&<force_refresh>")]
pub async fn get_playlist_metadata(
    playlist_url: Option<String>,
    force_refresh: Option<bool>,
    state: &State<AppState>,
) -> Result<Json<Playlist>, ApiError> {
    let playlist_url = playlist_url.ok_or_else(|| {
        ApiError::MissingParameter("playlist_url is a required parameter".to_string())
    })?;
    let playlist = state
        .playlist_service
        .get_playlist_metadata(&playlist_url, force_refresh.unwrap_or(false))
        .await?;
    Ok(Json(playlist))
}
