// Centralized error handling for the user directory service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::response::ErrorResponse;

/// Malformed or missing input
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("invalid id")]
    InvalidId { raw: String },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

/// Errors surfaced at the HTTP boundary
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound,

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                error!(error = %e, "Request failed with internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Errors raised while building the directory
#[derive(Error, Debug, PartialEq)]
pub enum DirectoryError {
    #[error("duplicate user id: {0}")]
    DuplicateId(u64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscountError {
    #[error("unrecognized user type: {0}")]
    UnknownUserType(String),
}
