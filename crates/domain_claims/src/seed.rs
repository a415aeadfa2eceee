//! Demonstration claims loaded at startup when seeding is enabled

use chrono::{DateTime, TimeZone, Utc};

use core_kernel::ClaimId;

use crate::claim::{Claim, ClaimStatus, NewClaim};

struct SampleClaim {
    id: u64,
    policy_number: &'static str,
    claimant_name: &'static str,
    damage_date: &'static str,
    loss_description: &'static str,
    status: ClaimStatus,
    created_at: (u32, u32, u32, u32),
}

const SAMPLES: [SampleClaim; 4] = [
    SampleClaim {
        id: 1,
        policy_number: "PN-1001",
        claimant_name: "Alice Johnson",
        damage_date: "2025-10-01",
        loss_description: "Water leak in kitchen",
        status: ClaimStatus::Open,
        created_at: (1, 10, 0, 0),
    },
    SampleClaim {
        id: 2,
        policy_number: "PN-1002",
        claimant_name: "Bob Smith",
        damage_date: "2025-09-15",
        loss_description: "Car accident at intersection",
        status: ClaimStatus::InReview,
        created_at: (2, 9, 30, 0),
    },
    SampleClaim {
        id: 3,
        policy_number: "PN-1003",
        claimant_name: "Carol Davis",
        damage_date: "2025-08-20",
        loss_description: "Roof damage from hail",
        status: ClaimStatus::Approved,
        created_at: (3, 14, 45, 0),
    },
    SampleClaim {
        id: 4,
        policy_number: "PN-1004",
        claimant_name: "David Lee",
        damage_date: "2025-07-10",
        loss_description: "Theft of personal property",
        status: ClaimStatus::Paid,
        created_at: (4, 16, 20, 0),
    },
];

/// One claim per status, ids 1 through 4, created in November 2025
pub fn sample_claims() -> Vec<Claim> {
    SAMPLES
        .iter()
        .filter_map(|sample| {
            let (day, hour, min, sec) = sample.created_at;
            let created_at: DateTime<Utc> =
                Utc.with_ymd_and_hms(2025, 11, day, hour, min, sec).single()?;
            Some(Claim::from_record(
                ClaimId::new(sample.id)?,
                NewClaim {
                    policy_number: sample.policy_number.to_string(),
                    claimant_name: sample.claimant_name.to_string(),
                    damage_date: sample.damage_date.to_string(),
                    loss_description: sample.loss_description.to_string(),
                },
                sample.status,
                created_at,
            ))
        })
        .collect()
}
