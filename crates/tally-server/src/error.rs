use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-rejection taxonomy for the HTTP boundary.
///
/// The aggregation core is total and never fails; everything here happens
/// before it runs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Empty username or password")]
    EmptyCredentials,
    #[error("Missing authorization header")]
    MissingAuthorization,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Invalid request body: {0}")]
    BadRequest(String),
    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyCredentials | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingAuthorization | ApiError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
