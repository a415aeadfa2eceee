//! Claims domain errors

use core_kernel::CoreError;
use thiserror::Error;

use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    /// One or more required intake fields were absent or empty
    #[error("policyNumber, claimantName, damageDate, and lossDescription are required")]
    MissingRequiredFields { missing: Vec<&'static str> },

    #[error("Valid status is required")]
    InvalidStatus,

    #[error("Invalid status filter")]
    InvalidStatusFilter(String),

    #[error("Claim not found")]
    ClaimNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Claim is already in final status {status}")]
    AlreadyFinal { status: ClaimStatus },
}

impl From<ClaimError> for CoreError {
    fn from(err: ClaimError) -> Self {
        let message = err.to_string();
        match err {
            ClaimError::MissingRequiredFields { .. }
            | ClaimError::InvalidStatus
            | ClaimError::InvalidStatusFilter(_) => CoreError::validation(message),
            ClaimError::ClaimNotFound(_) => CoreError::not_found(message),
            ClaimError::InvalidStatusTransition { .. } | ClaimError::AlreadyFinal { .. } => {
                CoreError::invalid_state(message)
            }
        }
    }
}
