//! HTTP handlers for the lease API

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::Html, Json};
use lease_core::validate_submission;

use crate::error::ApiError;
use crate::models::{CreateLeaseResponse, HealthResponse};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "lease-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Lease registration form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Validate a lease submission and hand it to the store
///
/// The body is read as raw bytes so that malformed JSON and a missing
/// Content-Type are reported through the same error envelope.
pub async fn create_lease(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateLeaseResponse>), ApiError> {
    let record = validate_submission(&body, state.policy).map_err(|e| {
        tracing::warn!("Rejected lease submission: {}", e);
        ApiError::from(e)
    })?;

    let lease_id = state.store.save(&record)?;

    tracing::info!(
        lease_id = %lease_id,
        store = state.store.name(),
        name = %record.name,
        building = %record.building_name,
        flat = %record.flat_number,
        tower = %record.tower_no,
        start = %record.lease_start_date,
        end = %record.lease_end_date,
        amount = record.monthly_lease_amount,
        "Simulated saving lease to database"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateLeaseResponse::created(record)),
    ))
}
