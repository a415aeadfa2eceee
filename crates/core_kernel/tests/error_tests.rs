//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_invalid_state() {
    let error = CoreError::invalid_state("Invalid status transition from OPEN to PAID");

    match error {
        CoreError::InvalidStateTransition(msg) => assert!(msg.contains("OPEN to PAID")),
        _ => panic!("Expected InvalidStateTransition error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Claim not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Claim not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_message_strips_kind_prefix() {
    let error = CoreError::configuration("Unknown log format: xml");

    assert_eq!(error.message(), "Unknown log format: xml");
    assert!(error.to_string().starts_with("Configuration error"));
}
