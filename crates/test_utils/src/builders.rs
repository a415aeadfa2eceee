//! Test Data Builders
//!
//! Builds claim intake payloads with generated defaults. Tests override only
//! the fields they care about, or drop fields entirely to exercise the
//! required-field rule.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use fake::faker::chrono::en::Date;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{Map, Value};

use domain_claims::lifecycle::REQUIRED_FIELDS;

static POLICY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Builder for `POST /claims` bodies
#[derive(Debug, Clone)]
pub struct ClaimPayloadBuilder {
    fields: Map<String, Value>,
}

impl Default for ClaimPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimPayloadBuilder {
    /// Creates a builder with a unique policy number and generated values
    pub fn new() -> Self {
        let sequence = POLICY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let damage_date: NaiveDate = Date().fake();
        let claimant: String = Name().fake();
        let description: String = Sentence(3..8).fake();

        let mut fields = Map::new();
        fields.insert("policyNumber".into(), Value::String(format!("PN-{sequence:06}")));
        fields.insert("claimantName".into(), Value::String(claimant));
        fields.insert(
            "damageDate".into(),
            Value::String(damage_date.format("%Y-%m-%d").to_string()),
        );
        fields.insert("lossDescription".into(), Value::String(description));
        Self { fields }
    }

    /// Sets the policy number
    pub fn with_policy_number(self, number: impl Into<String>) -> Self {
        self.with_value("policyNumber", Value::String(number.into()))
    }

    /// Sets the claimant name
    pub fn with_claimant_name(self, name: impl Into<String>) -> Self {
        self.with_value("claimantName", Value::String(name.into()))
    }

    /// Sets the damage date text
    pub fn with_damage_date(self, date: impl Into<String>) -> Self {
        self.with_value("damageDate", Value::String(date.into()))
    }

    /// Sets the loss description
    pub fn with_loss_description(self, description: impl Into<String>) -> Self {
        self.with_value("lossDescription", Value::String(description.into()))
    }

    /// Sets any key to any JSON value, including keys the API ignores
    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Removes a key from the payload
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    /// Removes every required key
    pub fn without_required_fields(self) -> Self {
        REQUIRED_FIELDS
            .into_iter()
            .fold(self, |builder, key| builder.without(key))
    }

    /// Builds the payload as a JSON object map
    pub fn build_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Builds the payload as a JSON value
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
