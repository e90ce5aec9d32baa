//! Lease registration form collector
//!
//! Holds the form fields and submission status on the client side and
//! submits them to the lease API:
//! - `form`: field values and the idle/loading/success/error state machine
//! - `client`: the HTTP submitter that drives the state machine

pub mod client;
pub mod error;
pub mod form;

pub use client::{LeaseClient, SubmitOutcome, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use form::{FormState, FormStatus, LeaseForm};
