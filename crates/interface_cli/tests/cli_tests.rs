//! Integration tests for interface_cli

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

use core_kernel::{CoreError, MoneyError};
use domain_rent::RentError;
use interface_cli::{commands, CliConfig, CliError, OutputFormat};

fn write_json(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

fn config_for(dir: &Path, format: OutputFormat) -> CliConfig {
    CliConfig {
        sheets_dir: dir.to_path_buf(),
        format,
        ..CliConfig::default()
    }
}

/// Alice alone in January; Bob joins for February 1st to 10th
fn write_alice_and_bob_sheets(dir: &Path) {
    write_json(
        dir,
        "2024-01-01.json",
        json!({
            "period_starts": ["2024-01-01"],
            "rooms": [
                { "name": "Front", "base_price": 1000, "residents": ["Alice"] },
                { "name": "Back", "base_price": 1000, "residents": [""] }
            ],
            "extra_person_fee": 0,
            "rent_due": 2000
        }),
    );
    write_json(
        dir,
        "2024-02-01.json",
        json!({
            "timezone": "UTC",
            "period_starts": ["2024-02-01", "2024-02-11"],
            "rooms": [
                { "name": "Front", "base_price": 1000, "residents": ["Alice", "Alice"] },
                { "name": "Back", "base_price": 1000, "residents": ["Bob", ""] }
            ],
            "extra_person_fee": 0,
            "rent_due": 2000
        }),
    );
}

// ============================================================================
// Rent Command Tests
// ============================================================================

mod rent_command_tests {
    use super::*;

    #[test]
    fn test_rent_report_from_sheet() {
        let dir = TempDir::new().unwrap();
        let sheet = write_json(
            dir.path(),
            "2024-03-01.json",
            json!({
                "period_starts": ["2024-03-01", "2024-03-15"],
                "rooms": [
                    {
                        "name": "Big room",
                        "base_price": "2000",
                        "residents": ["Dani", "Dani (0.6); Sam"]
                    },
                    {
                        "name": "Small room",
                        "base_price": 1000,
                        "residents": ["Beatrice", "Beatrice"]
                    }
                ],
                "extra_person_fee": 250,
                "rent_due": 3000
            }),
        );

        let report = commands::rent(&sheet, &config_for(dir.path(), OutputFormat::Text)).unwrap();

        assert!(report.starts_with("Rent for 2024-03\n"));
        assert!(report.contains("Period 2024-03-01 - 2024-03-14 (14 of 31 days)"));
        assert!(report.contains("Period 2024-03-15 - 2024-03-31 (17 of 31 days)"));
        assert!(report.contains("Sam"));
        assert!(report.contains("$3,000.00"));
    }

    #[test]
    fn test_rent_json_report_totals_to_rent() {
        let dir = TempDir::new().unwrap();
        write_alice_and_bob_sheets(dir.path());

        let report = commands::rent(
            &dir.path().join("2024-02-01.json"),
            &config_for(dir.path(), OutputFormat::Json),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["month"], "2024-02");
        assert_eq!(value["periods"].as_array().unwrap().len(), 2);
        assert_eq!(value["month_totals"]["residents"][1]["resident"], "Bob");
    }

    #[test]
    fn test_share_too_large_to_price_is_an_error() {
        let dir = TempDir::new().unwrap();
        let sheet = write_json(
            dir.path(),
            "2024-04-01.json",
            json!({
                "period_starts": ["2024-04-01"],
                "rooms": [
                    {
                        "name": "Big room",
                        "base_price": 2000,
                        "residents": ["Dani (79228162514264337593543950335)"]
                    }
                ],
                "extra_person_fee": 0,
                "rent_due": 2000
            }),
        );

        let config = config_for(dir.path(), OutputFormat::Text);
        let error = commands::rent(&sheet, &config).unwrap_err();

        assert!(matches!(error, CliError::Rent(RentError::Money(MoneyError::Overflow))));
        assert_eq!(error.to_string(), "Overflow during calculation");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();

        let error =
            commands::rent(&dir.path().join("nope.json"), &CliConfig::default()).unwrap_err();

        assert!(matches!(error, CliError::Read { .. }));
        assert!(error.to_string().contains("nope.json"));
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"period_starts\": [").unwrap();

        let error = commands::rent(&path, &CliConfig::default()).unwrap_err();

        assert!(matches!(error, CliError::Document { .. }));
    }

    #[test]
    fn test_sheet_in_other_timezone_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_alice_and_bob_sheets(dir.path());
        let config = CliConfig {
            timezone: "Europe/Berlin".parse().unwrap(),
            ..config_for(dir.path(), OutputFormat::Text)
        };

        let error = commands::rent(&dir.path().join("2024-02-01.json"), &config).unwrap_err();

        assert!(matches!(error, CliError::Core(CoreError::Configuration(_))));
    }
}

// ============================================================================
// Bills Command Tests
// ============================================================================

mod bills_command_tests {
    use super::*;

    #[test]
    fn test_bill_split_across_sheets() {
        let dir = TempDir::new().unwrap();
        write_alice_and_bob_sheets(dir.path());
        let bills = write_json(
            dir.path(),
            "bills.json",
            json!({
                "timezone": "UTC",
                "bills": [
                    {
                        "name": "Internet",
                        "amount": 300,
                        "first_day": "2024-01-20",
                        "last_day": "2024-02-10"
                    }
                ]
            }),
        );

        let report = commands::bills(&bills, &config_for(dir.path(), OutputFormat::Text)).unwrap();

        assert!(report.starts_with("Bill: Internet\n"));
        assert!(report.contains("Num days: 22\n"));
        assert!(report.contains("Daily amount: $13.64\n"));
        assert!(report.contains(
            "  2024-01-20 - 2024-01-31: 12 days, $163.64, $163.64 per person (Alice)\n"
        ));
        assert!(report.contains(
            "  2024-02-01 - 2024-02-10: 10 days, $136.36, $68.18 per person (Alice, Bob)\n"
        ));
        assert!(report.contains("  Alice: $231.82 ($163.64 + $68.18)\n"));
        assert!(report.contains("  Bob: $68.18 ($68.18)\n"));
    }

    #[test]
    fn test_missing_month_sheet_names_it() {
        let dir = TempDir::new().unwrap();
        write_alice_and_bob_sheets(dir.path());
        let bills = write_json(
            dir.path(),
            "bills.json",
            json!({
                "bills": [
                    {
                        "name": "Gas",
                        "amount": 80,
                        "first_day": "2024-02-20",
                        "last_day": "2024-03-19"
                    }
                ]
            }),
        );

        let config = config_for(dir.path(), OutputFormat::Text);
        let error = commands::bills(&bills, &config).unwrap_err();

        assert!(matches!(error, CliError::Core(CoreError::NotFound(_))));
        assert!(error.to_string().contains("could not find rent sheet 2024-03-01"));
    }

    #[test]
    fn test_empty_bills_document_fails() {
        let dir = TempDir::new().unwrap();
        let bills = write_json(dir.path(), "bills.json", json!({ "bills": [] }));

        let result = commands::bills(&bills, &config_for(dir.path(), OutputFormat::Text));

        assert!(matches!(result, Err(CliError::Bill(domain_bills::BillError::NoBills))));
    }
}

// ============================================================================
// Template Tests
// ============================================================================

mod template_tests {
    use super::*;

    #[test]
    fn test_new_rent_sheet_round_trips_through_rent_command() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path(), OutputFormat::Text);

        let (name, document) = commands::new_rent(&config).unwrap();
        let path = dir.path().join(&name);
        fs::write(&path, document).unwrap();

        let report = commands::rent(&path, &config).unwrap();

        assert!(name.ends_with("-01.json"));
        assert!(report.contains("Dani"));
        assert!(report.contains("$5,095.00"));
    }

    #[test]
    fn test_new_bills_document_parses() {
        let document = commands::new_bills(&CliConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&document).unwrap();

        assert_eq!(value["bills"], json!([]));
        assert_eq!(value["timezone"], "UTC");
    }
}
