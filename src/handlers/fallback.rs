use crate::core::error::ApiError;
use axum::http::Uri;
use tracing::debug;

/// Every unmatched route answers with the structured not-found body
pub async fn fallback_handler(uri: Uri) -> ApiError {
    debug!(path = %uri.path(), "No route matched");
    ApiError::NotFound
}
