//! Error types for the lease API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lease_core::{LeaseError, StorageError};
use thiserror::Error;

use crate::models::ErrorResponse;

pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to save lease. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Lease(#[from] LeaseError),

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Lease(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: e.message(),
                    details: e.details(),
                },
            ),
            ApiError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: STORAGE_FAILURE_MESSAGE.to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
