use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use std::io::Cursor;

use crate::models::ErrorResponse;

/// Application error taxonomy. Every variant carries enough to produce the
/// JSON error body and the HTTP status the routing layer returns.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("{message}")]
    InvalidParameter {
        message: String,
        code: &'static str,
    },

    #[error("YouTube search is temporarily unreachable")]
    YouTubeUnavailable,

    #[error("failed to scrape playlist: {reason}")]
    PlaylistScraping { reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>, code: &'static str) -> Self {
        ApiError::InvalidParameter {
            message: message.into(),
            code,
        }
    }

    pub fn scraping(reason: impl Into<String>) -> Self {
        ApiError::PlaylistScraping {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::MissingParameter(_) => Status::BadRequest,
            ApiError::InvalidParameter { .. } => Status::BadRequest,
            ApiError::YouTubeUnavailable => Status::ServiceUnavailable,
            ApiError::PlaylistScraping { .. } => Status::BadGateway,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            ApiError::MissingParameter(_) => "MISSING_PARAMETER",
            ApiError::InvalidParameter { code, .. } => code,
            ApiError::YouTubeUnavailable => "YOUTUBE_UNAVAILABLE",
            ApiError::PlaylistScraping { .. } => "PLAYLIST_SCRAPING_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = ErrorResponse {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        };
        let json = serde_json::to_string(&body).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_code_mapping() {
        let err = ApiError::MissingParameter("keyword is required".to_string());
        assert_eq!(err.status(), Status::BadRequest);
        assert_eq!(err.error_code(), "MISSING_PARAMETER");

        let err = ApiError::invalid("limit out of range", "INVALID_LIMIT");
        assert_eq!(err.status(), Status::BadRequest);
        assert_eq!(err.error_code(), "INVALID_LIMIT");

        assert_eq!(ApiError::YouTubeUnavailable.status(), Status::ServiceUnavailable);
        assert_eq!(
            ApiError::scraping("ytInitialData missing").status(),
            Status::BadGateway
        );
        assert_eq!(
            ApiError::scraping("ytInitialData missing").error_code(),
            "PLAYLIST_SCRAPING_ERROR"
        );
    }
}
