//! Custom Test Assertions
//!
//! Assertion helpers for claim and error JSON that give more meaningful
//! messages than comparing whole documents.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use domain_claims::lifecycle::REQUIRED_FIELDS;

/// Asserts that a claim body echoes the payload's four required fields
///
/// # Panics
///
/// Panics if any field differs
pub fn assert_claim_matches_payload(claim: &Value, payload: &Value) {
    for key in REQUIRED_FIELDS {
        assert_eq!(
            claim[key], payload[key],
            "Field {} differs: claim={}, payload={}",
            key, claim[key], payload[key]
        );
    }
}

/// Asserts that a claim body has exactly the documented keys
pub fn assert_claim_shape(claim: &Value) {
    let object = claim
        .as_object()
        .unwrap_or_else(|| panic!("Expected claim object, got {}", claim));

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "claimantName",
            "createdAt",
            "damageDate",
            "id",
            "lossDescription",
            "policyNumber",
            "status",
        ],
        "Unexpected claim keys"
    );
    assert!(
        claim["id"].as_u64().is_some_and(|id| id > 0),
        "Expected positive integer id, got {}",
        claim["id"]
    );
    assert_iso_millis(&claim["createdAt"]);
}

/// Asserts that a value is an RFC 3339 timestamp with millisecond precision
pub fn assert_iso_millis(value: &Value) {
    let text = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected timestamp string, got {}", value));
    let parsed = DateTime::parse_from_rfc3339(text)
        .unwrap_or_else(|err| panic!("Invalid timestamp {}: {}", text, err));
    assert_eq!(
        parsed.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true),
        text,
        "Timestamp is not in millisecond UTC form"
    );
}

/// Asserts an error body's kind and that its message contains `needle`
pub fn assert_error_body(body: &Value, kind: &str, needle: &str) {
    assert_eq!(body["error"], kind, "Unexpected error kind in {}", body);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(
        message.contains(needle),
        "Expected message containing {:?}, got {:?}",
        needle,
        message
    );
}

/// Asserts that an error message names every required intake field
pub fn assert_names_required_fields(body: &Value) {
    let message = body["message"].as_str().unwrap_or_default();
    for key in REQUIRED_FIELDS {
        assert!(message.contains(key), "Message {:?} does not name {}", message, key);
    }
}
