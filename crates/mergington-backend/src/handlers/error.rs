use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::ErrorResponse;
use mergington::errors::RosterError;
use mergington::log;

/// Errors surfaced to HTTP clients. Every variant is a client error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("Missing required query parameter 'email'")]
    MissingEmail,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roster(_) | ApiError::MissingEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("Rejected request: {}", self);

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
