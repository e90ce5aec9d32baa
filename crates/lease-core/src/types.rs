//! Lease data model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::coerce::is_truthy;

/// Fields every submission must carry, in the order they are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    Name,
    BuildingName,
    FlatNumber,
    TowerNo,
    LeaseStartDate,
    LeaseEndDate,
    MonthlyLeaseAmount,
}

impl RequiredField {
    pub const ALL: [RequiredField; 7] = [
        RequiredField::Name,
        RequiredField::BuildingName,
        RequiredField::FlatNumber,
        RequiredField::TowerNo,
        RequiredField::LeaseStartDate,
        RequiredField::LeaseEndDate,
        RequiredField::MonthlyLeaseAmount,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::BuildingName => "buildingName",
            RequiredField::FlatNumber => "flatNumber",
            RequiredField::TowerNo => "towerNo",
            RequiredField::LeaseStartDate => "leaseStartDate",
            RequiredField::LeaseEndDate => "leaseEndDate",
            RequiredField::MonthlyLeaseAmount => "monthlyLeaseAmount",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the required-field check decides that a field is present
///
/// `Truthy` rejects every falsy value (`null`, `false`, `0`, `""`), which
/// means a zero lease amount is reported as missing. `Explicit` only rejects
/// absent, `null` and empty-string values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresencePolicy {
    #[default]
    Truthy,
    Explicit,
}

impl PresencePolicy {
    pub fn is_present(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (_, None) => false,
            (PresencePolicy::Truthy, Some(v)) => is_truthy(v),
            (PresencePolicy::Explicit, Some(Value::Null)) => false,
            (PresencePolicy::Explicit, Some(Value::String(s))) => !s.is_empty(),
            (PresencePolicy::Explicit, Some(_)) => true,
        }
    }
}

impl fmt::Display for PresencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresencePolicy::Truthy => write!(f, "truthy"),
            PresencePolicy::Explicit => write!(f, "explicit"),
        }
    }
}

impl FromStr for PresencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truthy" => Ok(PresencePolicy::Truthy),
            "explicit" => Ok(PresencePolicy::Explicit),
            other => Err(format!(
                "Unknown presence policy '{}', expected 'truthy' or 'explicit'",
                other
            )),
        }
    }
}

/// Validated, normalized lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseRecord {
    pub name: String,
    pub building_name: String,
    pub flat_number: String,
    pub tower_no: String,
    /// ISO-8601, e.g. `2024-01-15T00:00:00.000Z`
    pub lease_start_date: String,
    pub lease_end_date: String,
    pub monthly_lease_amount: f64,
}

/// Identifier issued by a [`crate::LeaseStore`] when a record is saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaseId(Uuid);

impl LeaseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LeaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LeaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_fields_keep_declared_order() {
        let names: Vec<&str> = RequiredField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "buildingName",
                "flatNumber",
                "towerNo",
                "leaseStartDate",
                "leaseEndDate",
                "monthlyLeaseAmount"
            ]
        );
    }

    #[test]
    fn truthy_policy_rejects_falsy_values() {
        let policy = PresencePolicy::Truthy;
        assert!(!policy.is_present(None));
        assert!(!policy.is_present(Some(&json!(null))));
        assert!(!policy.is_present(Some(&json!(0))));
        assert!(!policy.is_present(Some(&json!(false))));
        assert!(!policy.is_present(Some(&json!(""))));
        assert!(policy.is_present(Some(&json!("0"))));
        assert!(policy.is_present(Some(&json!([]))));
        assert!(policy.is_present(Some(&json!({}))));
    }

    #[test]
    fn explicit_policy_accepts_zero_and_false() {
        let policy = PresencePolicy::Explicit;
        assert!(!policy.is_present(None));
        assert!(!policy.is_present(Some(&json!(null))));
        assert!(!policy.is_present(Some(&json!(""))));
        assert!(policy.is_present(Some(&json!(0))));
        assert!(policy.is_present(Some(&json!(false))));
    }

    #[test]
    fn presence_policy_parses_case_insensitively() {
        assert_eq!("Explicit".parse::<PresencePolicy>(), Ok(PresencePolicy::Explicit));
        assert_eq!("truthy".parse::<PresencePolicy>(), Ok(PresencePolicy::Truthy));
        assert!("strict".parse::<PresencePolicy>().is_err());
    }

    #[test]
    fn lease_record_serializes_camel_case() {
        let record = LeaseRecord {
            name: "John Doe".into(),
            building_name: "Oceanview".into(),
            flat_number: "402B".into(),
            tower_no: "A".into(),
            lease_start_date: "2024-01-01T00:00:00.000Z".into(),
            lease_end_date: "2025-01-01T00:00:00.000Z".into(),
            monthly_lease_amount: 2500.5,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["buildingName"], "Oceanview");
        assert_eq!(value["towerNo"], "A");
        assert_eq!(value["monthlyLeaseAmount"], 2500.5);
    }
}
