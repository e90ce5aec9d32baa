//! Lease validation pipeline
//!
//! Checks run in a fixed order and the first failing stage wins:
//! 1. the body must be a JSON object
//! 2. every required field must be present under the [`PresencePolicy`]
//! 3. text fields are stringified, dates normalized, the amount numified
//! 4. the amount must be a finite number

use serde_json::{Map, Value};

use crate::coerce::{to_display_string, to_number};
use crate::date::normalize_date;
use crate::error::LeaseError;
use crate::types::{LeaseRecord, PresencePolicy, RequiredField};

/// Raw client payload, keyed by wire field name
pub type LeaseSubmission = Map<String, Value>;

static NULL: Value = Value::Null;

/// Parse a request body into a submission object
pub fn parse_submission(body: &[u8]) -> Result<LeaseSubmission, LeaseError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| LeaseError::MalformedRequest(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(LeaseError::MalformedRequest(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

/// Run the full pipeline over a raw request body
pub fn validate_submission(
    body: &[u8],
    policy: PresencePolicy,
) -> Result<LeaseRecord, LeaseError> {
    let submission = parse_submission(body)?;
    validate_fields(&submission, policy)
}

/// Validate and normalize an already-parsed submission
pub fn validate_fields(
    submission: &LeaseSubmission,
    policy: PresencePolicy,
) -> Result<LeaseRecord, LeaseError> {
    let missing: Vec<RequiredField> = RequiredField::ALL
        .iter()
        .copied()
        .filter(|field| !policy.is_present(submission.get(field.as_str())))
        .collect();

    if !missing.is_empty() {
        return Err(LeaseError::MissingFields(missing));
    }

    let field = |f: RequiredField| submission.get(f.as_str()).unwrap_or(&NULL);
    let date = |f: RequiredField| {
        normalize_date(field(f)).ok_or(LeaseError::InvalidDate { field: f })
    };

    let record = LeaseRecord {
        name: to_display_string(field(RequiredField::Name)),
        building_name: to_display_string(field(RequiredField::BuildingName)),
        flat_number: to_display_string(field(RequiredField::FlatNumber)),
        tower_no: to_display_string(field(RequiredField::TowerNo)),
        lease_start_date: date(RequiredField::LeaseStartDate)?,
        lease_end_date: date(RequiredField::LeaseEndDate)?,
        monthly_lease_amount: to_number(field(RequiredField::MonthlyLeaseAmount)),
    };

    if !record.monthly_lease_amount.is_finite() {
        return Err(LeaseError::InvalidAmount);
    }

    Ok(record)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid_submission() -> Value {
        json!({
            "name": "John Doe",
            "buildingName": "Oceanview",
            "flatNumber": "402B",
            "towerNo": "A",
            "leaseStartDate": "2024-01-01",
            "leaseEndDate": "2025-01-01",
            "monthlyLeaseAmount": "2500.50"
        })
    }

    fn run(body: &Value, policy: PresencePolicy) -> Result<LeaseRecord, LeaseError> {
        validate_submission(body.to_string().as_bytes(), policy)
    }

    #[test]
    fn test_valid_submission_is_normalized() {
        let record = run(&valid_submission(), PresencePolicy::Truthy).unwrap();
        assert_eq!(
            record,
            LeaseRecord {
                name: "John Doe".into(),
                building_name: "Oceanview".into(),
                flat_number: "402B".into(),
                tower_no: "A".into(),
                lease_start_date: "2024-01-01T00:00:00.000Z".into(),
                lease_end_date: "2025-01-01T00:00:00.000Z".into(),
                monthly_lease_amount: 2500.5,
            }
        );
    }

    #[test]
    fn test_non_string_text_fields_are_stringified() {
        let mut body = valid_submission();
        body["flatNumber"] = json!(402);
        body["towerNo"] = json!(true);
        let record = run(&body, PresencePolicy::Truthy).unwrap();
        assert_eq!(record.flat_number, "402");
        assert_eq!(record.tower_no, "true");
    }

    #[test]
    fn test_malformed_json() {
        let err = validate_submission(b"not json", PresencePolicy::Truthy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
        assert_eq!(err.message(), "Invalid request format");
        assert!(err.details().is_some());
    }

    #[test]
    fn test_non_object_body() {
        for body in ["[]", "42", "null", "\"lease\""] {
            let err = validate_submission(body.as_bytes(), PresencePolicy::Truthy).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedRequest, "body {}", body);
        }
    }

    #[test]
    fn test_all_fields_missing_are_listed_in_order() {
        let err = run(&json!({}), PresencePolicy::Truthy).unwrap_err();
        assert_eq!(
            err.message(),
            "Missing required fields: name, buildingName, flatNumber, towerNo, \
             leaseStartDate, leaseEndDate, monthlyLeaseAmount"
        );
    }

    #[test]
    fn test_missing_fields_follow_declared_order() {
        let mut body = valid_submission();
        body["monthlyLeaseAmount"] = json!("");
        body["name"] = json!(null);
        body.as_object_mut().unwrap().remove("towerNo");
        let err = run(&body, PresencePolicy::Truthy).unwrap_err();
        assert_eq!(
            err,
            LeaseError::MissingFields(vec![
                RequiredField::Name,
                RequiredField::TowerNo,
                RequiredField::MonthlyLeaseAmount,
            ])
        );
    }

    #[test]
    fn test_zero_amount_depends_on_policy() {
        let mut body = valid_submission();
        body["monthlyLeaseAmount"] = json!(0);

        let err = run(&body, PresencePolicy::Truthy).unwrap_err();
        assert_eq!(
            err.message(),
            "Missing required fields: monthlyLeaseAmount"
        );

        let record = run(&body, PresencePolicy::Explicit).unwrap();
        assert_eq!(record.monthly_lease_amount, 0.0);
    }

    #[test]
    fn test_invalid_amount() {
        let mut body = valid_submission();
        for amount in [json!("abc"), json!("Infinity"), json!({"value": 1})] {
            body["monthlyLeaseAmount"] = amount;
            let err = run(&body, PresencePolicy::Truthy).unwrap_err();
            assert_eq!(err, LeaseError::InvalidAmount);
            assert_eq!(err.message(), "monthlyLeaseAmount must be a valid number");
        }
    }

    #[test]
    fn test_invalid_date_wins_over_invalid_amount() {
        let mut body = valid_submission();
        body["leaseEndDate"] = json!("someday");
        body["monthlyLeaseAmount"] = json!("abc");
        let err = run(&body, PresencePolicy::Truthy).unwrap_err();
        assert_eq!(
            err,
            LeaseError::InvalidDate {
                field: RequiredField::LeaseEndDate
            }
        );
    }

    #[test]
    fn test_day_past_month_end_is_carried_forward() {
        let mut body = valid_submission();
        body["leaseEndDate"] = json!("2024-02-30");
        let record = run(&body, PresencePolicy::Truthy).unwrap();
        assert_eq!(record.lease_end_date, "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn test_missing_fields_win_over_invalid_amount() {
        let mut body = valid_submission();
        body["name"] = json!("");
        body["monthlyLeaseAmount"] = json!("abc");
        let err = run(&body, PresencePolicy::Truthy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingFields);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut body = valid_submission();
        body["notes"] = json!("corner unit");
        assert!(run(&body, PresencePolicy::Truthy).is_ok());
    }
}
