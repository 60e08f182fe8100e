//! Residency cell parsing
//!
//! A cell lists the residents of one room during one period:
//!
//! ```text
//! Name1 (ratio1); Name2 (ratio2); Name3
//! ```
//!
//! A ratio in parentheses is explicit; a name without one takes the default
//! share. A blank cell means nobody lived in the room.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::Ratio;
use domain_rent::Resident;

static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[A-Za-z0-9 -]+?)\s*(?:\((?P<ratio>[^()]*)\))?$")
        .expect("resident entry pattern")
});

static ROOM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 -]+$").expect("room name pattern"));

/// Errors in a residency cell
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResidencyParseError {
    #[error("empty resident entry in '{0}'")]
    EmptyEntry(String),

    #[error("malformed resident entry '{0}'")]
    Malformed(String),

    #[error("cost ratio '{ratio}' for {name} is not a number")]
    InvalidRatio { name: String, ratio: String },

    #[error("cost ratio {ratio} for {name} is negative")]
    NegativeRatio { name: String, ratio: Decimal },
}

/// Parses one residency cell into residents, in listed order
///
/// Returns an empty list for a blank cell.
pub fn parse_residency_cell(cell: &str) -> Result<Vec<Resident>, ResidencyParseError> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }

    cell.split(';').map(|entry| parse_entry(cell, entry.trim())).collect()
}

fn parse_entry(cell: &str, entry: &str) -> Result<Resident, ResidencyParseError> {
    if entry.is_empty() {
        return Err(ResidencyParseError::EmptyEntry(cell.to_string()));
    }

    let captures = ENTRY
        .captures(entry)
        .ok_or_else(|| ResidencyParseError::Malformed(entry.to_string()))?;
    let name = captures["name"].trim().to_string();

    match captures.name("ratio") {
        None => Ok(Resident::sharing(name)),
        Some(text) => {
            let text = text.as_str().trim();
            let value = Decimal::from_str(text).map_err(|_| ResidencyParseError::InvalidRatio {
                name: name.clone(),
                ratio: text.to_string(),
            })?;
            let ratio = Ratio::new(value).map_err(|_| ResidencyParseError::NegativeRatio {
                name: name.clone(),
                ratio: value,
            })?;
            Ok(Resident::with_ratio(name, ratio))
        }
    }
}

/// Whether a room name uses only letters, digits, spaces and hyphens
pub fn is_valid_room_name(name: &str) -> bool {
    ROOM_NAME.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_rent::CostRatio;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_blank_cell_has_no_residents() {
        assert_eq!(parse_residency_cell("   ").unwrap(), vec![]);
    }

    #[test]
    fn test_mixed_explicit_and_default() {
        let residents = parse_residency_cell("Dani (0.6); Sam").unwrap();

        assert_eq!(residents.len(), 2);
        assert_eq!(residents[0].name.as_str(), "Dani");
        assert_eq!(residents[0].cost_ratio, CostRatio::Explicit(Ratio::new(dec!(0.6)).unwrap()));
        assert_eq!(residents[1].name.as_str(), "Sam");
        assert_eq!(residents[1].cost_ratio, CostRatio::Default);
    }

    #[test]
    fn test_names_may_hold_spaces_digits_and_hyphens() {
        let residents = parse_residency_cell("Mary-Jo 2 (0.25)").unwrap();
        assert_eq!(residents[0].name.as_str(), "Mary-Jo 2");
    }

    #[test]
    fn test_non_numeric_ratio_is_rejected() {
        let result = parse_residency_cell("Dani (half)");
        assert!(matches!(result, Err(ResidencyParseError::InvalidRatio { .. })));
    }

    #[test]
    fn test_negative_ratio_is_rejected() {
        let result = parse_residency_cell("Dani (-0.5)");
        assert!(matches!(result, Err(ResidencyParseError::NegativeRatio { .. })));
    }

    #[test]
    fn test_trailing_separator_is_rejected() {
        let result = parse_residency_cell("Dani;");
        assert!(matches!(result, Err(ResidencyParseError::EmptyEntry(_))));
    }

    #[test]
    fn test_punctuation_in_name_is_malformed() {
        let result = parse_residency_cell("Dani!");
        assert!(matches!(result, Err(ResidencyParseError::Malformed(_))));
    }

    proptest! {
        #[test]
        fn prop_listed_names_and_ratios_are_kept(
            names in prop::collection::vec("[A-Za-z][A-Za-z0-9 -]{0,12}[A-Za-z0-9]", 1..4),
            percents in prop::collection::vec(prop::option::of(0u32..=100u32), 4),
        ) {
            let cell = names
                .iter()
                .zip(&percents)
                .map(|(name, percent)| match percent {
                    Some(p) => format!("{} ({})", name, Decimal::from(*p) / dec!(100)),
                    None => name.clone(),
                })
                .collect::<Vec<_>>()
                .join("; ");

            let residents = parse_residency_cell(&cell).unwrap();

            prop_assert_eq!(residents.len(), names.len());
            for ((resident, name), percent) in residents.iter().zip(&names).zip(&percents) {
                prop_assert_eq!(resident.name.as_str(), name.as_str());
                let expected = percent.map(|p| Decimal::from(p) / dec!(100));
                prop_assert_eq!(resident.cost_ratio.explicit().map(|r| r.as_decimal()), expected);
            }
        }
    }

    #[test]
    fn test_room_names() {
        assert!(is_valid_room_name("Big room"));
        assert!(is_valid_room_name("Room-2"));
        assert!(!is_valid_room_name(""));
        assert!(!is_valid_room_name("Room #2"));
    }
}
