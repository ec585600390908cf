use rocket::serde::json::Json;
use rocket::{get, State};

use crate::errors::ApiError;
use crate::models::SearchResult;
use crate::AppState;

#[get("/search?<keyword>&<limit>&<sort_by>")]
pub async fn search_videos(
    keyword: Option<String>,
    limit: Option<i64>,
    sort_by: Option<String>,
    state: &State<AppState>,
) -> Result<Json<SearchResult>, ApiError> {
    let result = state
        .search_service
        .search(keyword.as_deref(), limit, sort_by.as_deref())
        .await?;
    Ok(Json(result))
}
