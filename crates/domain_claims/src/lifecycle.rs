//! Claim lifecycle rules
//!
//! Pure validation for intake payloads, status values and status filters,
//! plus the transition rule of the status machine. Nothing here touches the
//! store; callers pass data in and get data or a [`ClaimError`] back.
//!
//! # Required field rule
//!
//! Intake payloads are raw JSON objects. Each required key is classified by
//! an explicit table rather than by any notion of truthiness:
//!
//! | value                          | outcome                          |
//! |--------------------------------|----------------------------------|
//! | absent, `null`                 | missing                          |
//! | `false`                        | missing                          |
//! | numeric zero                   | missing                          |
//! | `""`                           | missing                          |
//! | any other string               | accepted verbatim (whitespace ok)|
//! | `true`, other numbers          | accepted as JSON text            |
//! | arrays, objects                | accepted as compact JSON text    |
//!
//! `damageDate` receives no format check.

use serde_json::{Map, Value};

use crate::claim::{Claim, ClaimStatus, NewClaim};
use crate::error::ClaimError;

/// Intake keys, in the order they are reported
pub const REQUIRED_FIELDS: [&str; 4] = [
    "policyNumber",
    "claimantName",
    "damageDate",
    "lossDescription",
];

/// Classifies one payload value; `None` means the field counts as missing
fn required_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

/// Validates an intake payload, ignoring keys other than the required four
pub fn validate_new_claim(payload: &Map<String, Value>) -> Result<NewClaim, ClaimError> {
    let [policy_number, claimant_name, damage_date, loss_description] =
        REQUIRED_FIELDS.map(|key| required_text(payload.get(key)));

    match (policy_number, claimant_name, damage_date, loss_description) {
        (Some(policy_number), Some(claimant_name), Some(damage_date), Some(loss_description)) => {
            Ok(NewClaim {
                policy_number,
                claimant_name,
                damage_date,
                loss_description,
            })
        }
        _ => Err(ClaimError::MissingRequiredFields {
            missing: REQUIRED_FIELDS
                .into_iter()
                .filter(|key| required_text(payload.get(*key)).is_none())
                .collect(),
        }),
    }
}

/// Reads the status requested by an update payload.
///
/// Only a JSON string naming one of the four statuses is accepted.
pub fn parse_requested_status(value: Option<&Value>) -> Result<ClaimStatus, ClaimError> {
    match value {
        Some(Value::String(s)) => s.parse().map_err(|_| ClaimError::InvalidStatus),
        _ => Err(ClaimError::InvalidStatus),
    }
}

/// Reads a list filter. An absent or empty filter means "no filter".
pub fn parse_status_filter(raw: Option<&str>) -> Result<Option<ClaimStatus>, ClaimError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| ClaimError::InvalidStatusFilter(s.to_string())),
    }
}

/// Checks that `to` is the designated successor of `from`
pub fn check_transition(from: ClaimStatus, to: ClaimStatus) -> Result<(), ClaimError> {
    match from.next() {
        Some(next) if next == to => Ok(()),
        None => Err(ClaimError::AlreadyFinal { status: from }),
        Some(_) => Err(ClaimError::InvalidStatusTransition { from, to }),
    }
}

/// Moves a claim to `to` if the transition is legal; leaves it untouched otherwise
pub fn apply_transition(claim: &mut Claim, to: ClaimStatus) -> Result<(), ClaimError> {
    check_transition(claim.status(), to)?;
    claim.set_status(to);
    Ok(())
}
