//! Claims application service
//!
//! Runs the lifecycle checks against the store in the order the API
//! promises: a status update first resolves the claim, then the requested
//! status, then the transition.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

use core_kernel::ClaimId;

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::lifecycle;
use crate::store::ClaimStore;

/// Entry point used by the transport layer
#[derive(Debug, Clone)]
pub struct ClaimService {
    store: Arc<ClaimStore>,
}

impl ClaimService {
    pub fn new(store: Arc<ClaimStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ClaimStore {
        &self.store
    }

    /// Validates an intake payload and stores a new `OPEN` claim
    pub fn create(&self, payload: &Map<String, Value>) -> Result<Claim, ClaimError> {
        let fields = lifecycle::validate_new_claim(payload).inspect_err(|err| {
            if let ClaimError::MissingRequiredFields { missing } = err {
                debug!(?missing, "Rejected claim intake");
            }
        })?;

        let claim = self.store.insert(fields);
        info!(
            claim_id = %claim.id(),
            policy_number = %claim.policy_number(),
            "Claim created"
        );
        Ok(claim)
    }

    pub fn get(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| ClaimError::ClaimNotFound(id.to_string()))
    }

    /// Lists every claim, or only those in `filter`
    pub fn list(&self, filter: Option<ClaimStatus>) -> Vec<Claim> {
        match filter {
            Some(status) => self.store.list_by_status(status),
            None => self.store.list_all(),
        }
    }

    /// Moves a claim to the requested status.
    ///
    /// An unknown id is reported as not found whatever `requested` holds.
    pub fn advance_status(
        &self,
        id: ClaimId,
        requested: Option<&Value>,
    ) -> Result<Claim, ClaimError> {
        let outcome = self
            .store
            .modify(id, |claim| -> Result<(ClaimStatus, Claim), ClaimError> {
                let target = lifecycle::parse_requested_status(requested)?;
                let from = claim.status();
                lifecycle::apply_transition(claim, target)?;
                Ok((from, claim.clone()))
            })
            .ok_or_else(|| ClaimError::ClaimNotFound(id.to_string()))?;

        let (from, claim) = outcome?;
        info!(claim_id = %id, %from, to = %claim.status(), "Claim status advanced");
        Ok(claim)
    }
}
