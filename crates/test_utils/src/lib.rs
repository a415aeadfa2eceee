//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built payloads and stores
//! - `builders`: Builder for claim intake payloads
//! - `assertions`: Assertion helpers for claim and error JSON
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
