use crate::core::error::{ApiError, ValidationError};
use crate::core::state::AppState;
use crate::validation::params::parse_user_id;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Look up a single user
///
/// GET /api/users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    // Undecodable segments (e.g. invalid UTF-8) never reach the parser
    let Path(raw_id) = path.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected undecodable user id");
        ValidationError::InvalidId { raw: String::new() }
    })?;

    let id = parse_user_id(&raw_id).inspect_err(|_| {
        debug!(raw_id = %raw_id, "Rejected malformed user id");
    })?;

    let user = state.directory.find_by_id(id).ok_or_else(|| {
        debug!(user_id = id, "User not found");
        ApiError::NotFound
    })?;

    debug!(user_id = id, role = %user.role, "User found");

    Ok((StatusCode::OK, Json(user)).into_response())
}
