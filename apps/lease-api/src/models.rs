//! Response bodies for the lease API

use lease_core::LeaseRecord;
use serde::{Deserialize, Serialize};

pub const LEASE_CREATED_MESSAGE: &str = "Lease created successfully in core-platform";

/// Success envelope for `POST /api/leases`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaseResponse {
    pub success: bool,
    pub message: String,
    pub data: LeaseRecord,
}

impl CreateLeaseResponse {
    pub fn created(record: LeaseRecord) -> Self {
        Self {
            success: true,
            message: LEASE_CREATED_MESSAGE.to_string(),
            data: record,
        }
    }
}

/// Error body; `details` is only present for unparseable requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
