//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain_claims::{lifecycle, Claim, ClaimError, ClaimStatus};

/// Query string of `GET /claims`, kept as raw pairs so a repeated
/// `status` key can be detected
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ListClaimsQuery(pub Vec<(String, String)>);

impl ListClaimsQuery {
    /// Resolves the optional status filter
    pub fn status_filter(&self) -> Result<Option<ClaimStatus>, ClaimError> {
        let values: Vec<&str> = self
            .0
            .iter()
            .filter(|(key, _)| key == "status")
            .map(|(_, value)| value.as_str())
            .collect();

        match values.as_slice() {
            [] => Ok(None),
            [single] => lifecycle::parse_status_filter(Some(*single)),
            many => Err(ClaimError::InvalidStatusFilter(many.join(","))),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: u64,
    pub policy_number: String,
    pub claimant_name: String,
    pub damage_date: String,
    pub loss_description: String,
    pub status: ClaimStatus,
    #[serde(with = "core_kernel::iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id().value(),
            policy_number: claim.policy_number().to_string(),
            claimant_name: claim.claimant_name().to_string(),
            damage_date: claim.damage_date().to_string(),
            loss_description: claim.loss_description().to_string(),
            status: claim.status(),
            created_at: claim.created_at(),
        }
    }
}
