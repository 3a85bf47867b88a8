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
fn test_core_error_not_found() {
    let error = CoreError::not_found("Case not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Case not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_invalid_geometry() {
    let error = CoreError::invalid_geometry("expected a Polygon geometry");

    match error {
        CoreError::InvalidGeometry(msg) => assert!(msg.contains("Polygon")),
        _ => panic!("Expected InvalidGeometry error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}
