//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::money::MoneyError;
use core_kernel::temporal::TemporalError;
use chrono::NaiveDate;

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
    let error = CoreError::not_found("Rent sheet not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Rent sheet not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_from_money_error() {
    let core_error: CoreError = MoneyError::DivisionByZero.into();

    assert!(matches!(core_error, CoreError::Money(MoneyError::DivisionByZero)));
}

#[test]
fn test_core_error_from_temporal_error() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let core_error: CoreError = TemporalError::SpansMonths { start, end }.into();

    let display = core_error.to_string();
    assert!(display.contains("All days in period must be in the same month"));
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("Missing config");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "Missing config"),
        _ => panic!("Expected Configuration error"),
    }
}
