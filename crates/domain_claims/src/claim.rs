//! Claim record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::ClaimId;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Received, awaiting review
    Open,
    /// Under review by an adjuster
    InReview,
    /// Approved for payment
    Approved,
    /// Paid out; terminal
    Paid,
}

impl ClaimStatus {
    /// Every status in lifecycle order
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Open,
        ClaimStatus::InReview,
        ClaimStatus::Approved,
        ClaimStatus::Paid,
    ];

    /// Wire name of the status
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::Open => "OPEN",
            ClaimStatus::InReview => "IN_REVIEW",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Paid => "PAID",
        }
    }

    /// The designated successor, or `None` for the terminal status
    pub fn next(self) -> Option<ClaimStatus> {
        match self {
            ClaimStatus::Open => Some(ClaimStatus::InReview),
            ClaimStatus::InReview => Some(ClaimStatus::Approved),
            ClaimStatus::Approved => Some(ClaimStatus::Paid),
            ClaimStatus::Paid => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text is not one of the four status names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown claim status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ClaimStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Validated intake fields for a new claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub policy_number: String,
    pub claimant_name: String,
    pub damage_date: String,
    pub loss_description: String,
}

/// An insurance claim
///
/// Only `status` ever changes after creation, and only through
/// [`crate::lifecycle::apply_transition`] or the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    id: ClaimId,
    policy_number: String,
    claimant_name: String,
    damage_date: String,
    loss_description: String,
    status: ClaimStatus,
    #[serde(with = "core_kernel::iso_millis")]
    created_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a freshly opened claim
    pub fn open(id: ClaimId, fields: NewClaim, created_at: DateTime<Utc>) -> Self {
        Self::from_record(id, fields, ClaimStatus::Open, created_at)
    }

    /// Rebuilds a claim in an arbitrary status, used for seed data
    pub fn from_record(
        id: ClaimId,
        fields: NewClaim,
        status: ClaimStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NewClaim {
            policy_number,
            claimant_name,
            damage_date,
            loss_description,
        } = fields;

        Self {
            id,
            policy_number,
            claimant_name,
            damage_date,
            loss_description,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    pub fn claimant_name(&self) -> &str {
        &self.claimant_name
    }

    /// Date of damage, stored verbatim as supplied
    pub fn damage_date(&self) -> &str {
        &self.damage_date
    }

    pub fn loss_description(&self) -> &str {
        &self.loss_description
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
    }
}
