//! Form fields and submission state

use lease_core::RequiredField;
use serde::{Deserialize, Serialize};

use crate::client::SubmitOutcome;
use crate::error::ClientError;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseForm {
    pub name: String,
    pub building_name: String,
    pub flat_number: String,
    pub tower_no: String,
    pub lease_start_date: String,
    pub lease_end_date: String,
    pub monthly_lease_amount: String,
}

impl LeaseForm {
    pub fn field_mut(&mut self, field: RequiredField) -> &mut String {
        match field {
            RequiredField::Name => &mut self.name,
            RequiredField::BuildingName => &mut self.building_name,
            RequiredField::FlatNumber => &mut self.flat_number,
            RequiredField::TowerNo => &mut self.tower_no,
            RequiredField::LeaseStartDate => &mut self.lease_start_date,
            RequiredField::LeaseEndDate => &mut self.lease_end_date,
            RequiredField::MonthlyLeaseAmount => &mut self.monthly_lease_amount,
        }
    }

    pub fn set(&mut self, field: RequiredField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success { message: String },
    Error { message: String },
}

impl FormStatus {
    /// Banner text for the current status, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Success { message } | FormStatus::Error { message } => {
                Some(message.as_str())
            }
            FormStatus::Idle | FormStatus::Loading => None,
        }
    }
}

/// Form fields plus the status of the last submission
#[derive(Debug, Clone, Default)]
pub struct FormState {
    form: LeaseForm,
    status: FormStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: LeaseForm) -> Self {
        Self {
            form,
            status: FormStatus::Idle,
        }
    }

    pub fn form(&self) -> &LeaseForm {
        &self.form
    }

    pub fn set_field(&mut self, field: RequiredField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// The submit control is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Loading
    }

    /// Enter `Loading` and return the payload to send
    pub fn begin_submit(&mut self) -> Result<LeaseForm, ClientError> {
        if !self.can_submit() {
            return Err(ClientError::AlreadySubmitting);
        }
        self.status = FormStatus::Loading;
        Ok(self.form.clone())
    }

    /// Leave `Loading` with the result of the request
    ///
    /// Fields are cleared on success and kept for correction on error.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        if self.status != FormStatus::Loading {
            tracing::warn!("Ignoring submit outcome while form is {:?}", self.status);
            return;
        }

        self.status = match outcome {
            SubmitOutcome::Accepted { message } => {
                self.form.clear();
                FormStatus::Success { message }
            }
            SubmitOutcome::Rejected { message } => FormStatus::Error { message },
            SubmitOutcome::NetworkFailure => FormStatus::Error {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            },
        };
    }
}
