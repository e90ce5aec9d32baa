//! Lease submission validation and normalization
//!
//! This crate turns an untyped client payload into a typed [`LeaseRecord`]:
//! - `types`: the record, the required field list and the presence policy
//! - `coerce`: loose string/number conversions applied to client values
//! - `date`: date parsing and ISO-8601 formatting
//! - `validate`: the ordered validation pipeline
//! - `storage`: the [`LeaseStore`] seam and the bundled stores
//!
//! The pipeline itself is a pure function of its input. Storage is injected
//! by the caller after a record has been produced.

pub mod coerce;
pub mod date;
pub mod error;
pub mod storage;
pub mod types;
pub mod validate;

pub use error::{ErrorKind, LeaseError, StorageError};
pub use storage::{InMemoryLeaseStore, LeaseStore, LoggingLeaseStore};
pub use types::{LeaseId, LeaseRecord, PresencePolicy, RequiredField};
pub use validate::{parse_submission, validate_fields, validate_submission, LeaseSubmission};
