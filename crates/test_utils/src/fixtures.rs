//! Pre-built Test Fixtures
//!
//! Ready-to-use payloads and stores for claims tests. Values are fixed so
//! assertions can compare against them directly.

use std::sync::Arc;

use serde_json::{json, Value};

use domain_claims::{seed, ClaimService, ClaimStore};

/// Fixture for intake payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// The walkthrough payload used by the lifecycle scenario
    pub fn scenario() -> Value {
        json!({
            "policyNumber": "PN-X",
            "claimantName": "Y",
            "damageDate": "2025-11-01",
            "lossDescription": "Z",
        })
    }

    /// A complete payload with the default test values
    pub fn valid() -> Value {
        json!({
            "policyNumber": "PN-TEST-1",
            "claimantName": "Test User",
            "damageDate": "2025-11-01",
            "lossDescription": "Integration test loss",
        })
    }

    /// Payload carrying non-ASCII text in the free-text fields
    pub fn unicode() -> Value {
        json!({
            "policyNumber": "PN-UNI-1",
            "claimantName": "José 😀",
            "damageDate": "2025-11-01",
            "lossDescription": "Пошкодження даху від граду – thử nghiệm",
        })
    }
}

/// Fixture for claim services
pub struct ServiceFixtures;

impl ServiceFixtures {
    /// A service over an empty store
    pub fn empty() -> ClaimService {
        ClaimService::new(Arc::new(ClaimStore::new()))
    }

    /// A service over the four demonstration claims
    pub fn seeded() -> ClaimService {
        ClaimService::new(Arc::new(ClaimStore::with_claims(seed::sample_claims())))
    }
}
