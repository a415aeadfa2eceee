//! Request handlers

pub mod claims;
pub mod docs;
pub mod health;
