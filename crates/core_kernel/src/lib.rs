//! Core Kernel - Foundational types shared by the claims service
//!
//! This crate provides the building blocks used by the domain and API layers:
//! - Integer claim identifiers with lenient path parsing
//! - Timestamp helpers with millisecond wire precision
//! - The kernel error taxonomy

pub mod temporal;
pub mod identifiers;
pub mod error;

pub use temporal::{iso_millis, now_millis};
pub use identifiers::ClaimId;
pub use error::CoreError;
