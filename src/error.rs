use axum::http::StatusCode;
use tracing::error;

use crate::store::StoreError;

/// Handler error: status plus a plain-text message.
pub type ApiError = (StatusCode, String);

pub fn internal(e: StoreError) -> ApiError {
    error!(error = %e, "store write failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

pub fn bad_request(msg: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, msg.into())
}

pub fn not_found(msg: impl Into<String>) -> ApiError {
    (StatusCode::NOT_FOUND, msg.into())
}
