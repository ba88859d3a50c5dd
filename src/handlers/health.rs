use crate::core::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    /// Records served by the directory
    pub users: usize,
    pub timestamp: u64,
}

/// Liveness plus a summary of the loaded directory
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    let status = if state.directory.is_empty() { "empty" } else { "ok" };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            users: state.directory.len(),
            timestamp,
        }),
    )
}
