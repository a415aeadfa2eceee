//! Property-Based Test Generators
//!
//! Provides proptest strategies for statuses and for the values the
//! required-field rule classifies.

use proptest::prelude::*;
use serde_json::{json, Value};

use domain_claims::ClaimStatus;

/// Strategy for any claim status
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Open),
        Just(ClaimStatus::InReview),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Paid),
    ]
}

/// Strategy for a path through the lifecycle: how many legal steps to take
pub fn lifecycle_depth_strategy() -> impl Strategy<Value = usize> {
    0usize..ClaimStatus::ALL.len()
}

/// Strategy for values that count as a missing required field
pub fn falsy_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(false)),
        Just(json!(0)),
        Just(json!(0.0)),
        Just(json!("")),
    ]
}

/// Strategy for non-empty text, whitespace-only strings included
pub fn accepted_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 -]{1,40}",
        " {1,5}",
        "\\PC{1,20}",
    ]
}

/// Strategy for text that is not a status name
pub fn unknown_status_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_]{0,12}".prop_filter("must not name a status", |s| {
        s.parse::<ClaimStatus>().is_err()
    })
}
