use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::auth::{TokenIssuer, TokenValidator};
use crate::config::ServerConfig;
use crate::digest::sha256_hex;
use crate::error::ApiError;

/// Immutable per-process state shared by the handlers.
pub struct AppState {
    issuer: TokenIssuer,
    validator: TokenValidator,
}

#[derive(Debug, Deserialize)]
struct Credentials {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Builds the application router: token issuance on `/auth`, aggregation on
/// `/sum`. Non-POST methods get 405 from the router itself.
pub fn app(config: &ServerConfig) -> Router {
    let secret = config.token_secret.as_bytes();
    let state = Arc::new(AppState {
        issuer: TokenIssuer::new(secret, config.token_ttl()),
        validator: TokenValidator::new(secret),
    });

    Router::new()
        .route("/auth", post(auth_handler))
        .route("/sum", post(sum_handler))
        .with_state(state)
}

async fn auth_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<String, ApiError> {
    let creds: Credentials =
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if creds.username.is_empty() || creds.password.is_empty() {
        return Err(ApiError::EmptyCredentials);
    }

    let token = state.issuer.issue(&creds.username)?;
    tracing::info!(user = %creds.username, "issued token");
    Ok(token)
}

async fn sum_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<String, ApiError> {
    let token = bearer_token(&headers)?;
    let claims = state.validator.validate(token).map_err(|e| {
        tracing::warn!(error = %e, "rejected token");
        ApiError::InvalidToken(e.to_string())
    })?;

    // The body is one generic JSON document; any shape is accepted here and
    // the core is total over it.
    let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected body");
        ApiError::BadRequest(e.to_string())
    })?;

    let total = tally_core::aggregate(&value);
    tracing::info!(user = %claims.sub, total = %total, "aggregated document");
    Ok(sha256_hex(total.to_string().as_bytes()))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::MissingAuthorization)?;
    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::InvalidToken("not a bearer token".to_string()))
}
