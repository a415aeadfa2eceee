//! Claims Management Domain
//!
//! This crate implements the claim record, the validation rules applied on
//! intake, and the status lifecycle that moves a claim from intake to payout.
//!
//! # Claim Lifecycle
//!
//! ```text
//! OPEN -> IN_REVIEW -> APPROVED -> PAID (terminal)
//! ```
//!
//! Each status has exactly one designated successor. Claims enter at `OPEN`
//! through creation only; `PAID` has no outgoing transition.
//!
//! # Components
//!
//! - [`lifecycle`]: pure validation and transition rules, no I/O
//! - [`ClaimStore`]: the owned collection of claims and the identifier counter
//! - [`ClaimService`]: composes the two for the transport layer

pub mod claim;
pub mod lifecycle;
pub mod store;
pub mod service;
pub mod seed;
pub mod error;

pub use claim::{Claim, ClaimStatus, NewClaim};
pub use store::ClaimStore;
pub use service::ClaimService;
pub use error::ClaimError;
