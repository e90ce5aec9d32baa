use thiserror::Error;

use crate::types::RequiredField;

/// Client-facing error category, in the order the pipeline checks them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedRequest,
    MissingFields,
    InvalidAmount,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeaseError {
    #[error("Invalid request format: {0}")]
    MalformedRequest(String),

    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),

    #[error("Invalid time value for {field}")]
    InvalidDate { field: RequiredField },

    #[error("monthlyLeaseAmount must be a valid number")]
    InvalidAmount,
}

impl LeaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeaseError::MalformedRequest(_) | LeaseError::InvalidDate { .. } => {
                ErrorKind::MalformedRequest
            }
            LeaseError::MissingFields(_) => ErrorKind::MissingFields,
            LeaseError::InvalidAmount => ErrorKind::InvalidAmount,
        }
    }

    /// Message shown to the user in the `error` field of the response
    pub fn message(&self) -> String {
        match self.kind() {
            ErrorKind::MalformedRequest => "Invalid request format".to_string(),
            _ => self.to_string(),
        }
    }

    /// Extra diagnostic carried in the `details` field, if any
    pub fn details(&self) -> Option<String> {
        match self {
            LeaseError::MalformedRequest(details) => Some(details.clone()),
            LeaseError::InvalidDate { .. } => Some("Invalid time value".to_string()),
            _ => None,
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Lease store is full ({0} records)")]
    CapacityExceeded(usize),

    #[error("Lease store unavailable: {0}")]
    Unavailable(String),
}
