//! HTTP submitter for the lease form

use std::time::Duration;

use serde::Deserialize;

use crate::error::ClientError;
use crate::form::{FormState, FormStatus, LeaseForm};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to create lease";

/// Result of one round trip to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response
    Accepted { message: String },
    /// Non-2xx response carrying an error message
    Rejected { message: String },
    /// Connection failure, timeout or unreadable response body
    NetworkFailure,
}

/// Fields the collector reads from either response envelope
#[derive(Debug, Default, Deserialize)]
struct ApiReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct LeaseClient {
    http: reqwest::Client,
    base_url: String,
}

impl LeaseClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/leases", self.base_url.trim_end_matches('/'))
    }

    /// POST the form and classify the response
    pub async fn send(&self, form: &LeaseForm) -> SubmitOutcome {
        let response = match self.http.post(self.endpoint()).json(form).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Lease submission failed: {}", e);
                return SubmitOutcome::NetworkFailure;
            }
        };

        let status = response.status();
        let reply: ApiReply = match response.json().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Unreadable response ({}): {}", status, e);
                return SubmitOutcome::NetworkFailure;
            }
        };

        tracing::debug!("Lease API responded with {}", status);

        if status.is_success() {
            SubmitOutcome::Accepted {
                message: reply.message.unwrap_or_default(),
            }
        } else {
            SubmitOutcome::Rejected {
                message: reply
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            }
        }
    }

    /// Run one full submit cycle on `state`
    pub async fn submit<'a>(&self, state: &'a mut FormState) -> Result<&'a FormStatus, ClientError> {
        let payload = state.begin_submit()?;
        let outcome = self.send(&payload).await;
        state.finish(outcome);
        Ok(state.status())
    }
}
