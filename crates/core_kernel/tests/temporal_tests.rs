//! Unit tests for the calendar types
//!
//! Tests cover DateRange, YearMonth and Timezone functionality.

use core_kernel::{days_in_month, days_inclusive, DateRange, TemporalError, Timezone, YearMonth};
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod date_range {
    use super::*;

    #[test]
    fn test_new_fails_when_start_after_end() {
        let result = DateRange::new(date(2024, 3, 10), date(2024, 3, 9));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_days_counts_both_ends() {
        let range = DateRange::new(date(2024, 1, 20), date(2024, 2, 10)).unwrap();
        assert_eq!(range.days(), 22);
    }

    #[test]
    fn test_contains_edges() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 14)).unwrap();
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 14)));
        assert!(!range.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_intersect_overlapping() {
        let bill = DateRange::new(date(2024, 1, 20), date(2024, 2, 10)).unwrap();
        let january = DateRange::month(YearMonth::new(2024, 1).unwrap());

        let overlap = bill.intersect(&january).unwrap();
        assert_eq!(overlap.start, date(2024, 1, 20));
        assert_eq!(overlap.end, date(2024, 1, 31));
        assert_eq!(overlap.days(), 12);
    }

    #[test]
    fn test_intersect_disjoint_is_none() {
        let a = DateRange::new(date(2024, 1, 1), date(2024, 1, 10)).unwrap();
        let b = DateRange::new(date(2024, 1, 11), date(2024, 1, 31)).unwrap();
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn test_within_month_accepts_full_leap_february() {
        let range = DateRange::within_month(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
        assert_eq!(range.days(), 29);
        assert_eq!(days_in_month(range.start), 29);
    }

    #[test]
    fn test_months_of_range() {
        let range = DateRange::new(date(2023, 12, 15), date(2024, 2, 3)).unwrap();
        assert_eq!(range.first_month(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(range.last_month(), YearMonth::new(2024, 2).unwrap());
        assert!(!range.is_single_month());
    }

    #[test]
    fn test_days_inclusive_reversed_is_zero() {
        assert_eq!(days_inclusive(date(2024, 1, 2), date(2024, 1, 1)), 0);
    }
}

mod year_month {
    use super::*;

    #[test]
    fn test_rejects_month_out_of_range() {
        assert!(YearMonth::new(2024, 13).is_err());
        assert!(YearMonth::new(2024, 0).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let month: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(month.to_string(), "2024-03");
        assert!("2024/03".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_days_in_month_table() {
        let cases = [(1, 31), (2, 29), (4, 30), (12, 31)];
        for (month, days) in cases {
            assert_eq!(YearMonth::new(2024, month).unwrap().days_in_month(), days);
        }
    }

    #[test]
    fn test_range_inclusive_crosses_year() {
        let months: Vec<_> = YearMonth::range_inclusive(
            YearMonth::new(2023, 11).unwrap(),
            YearMonth::new(2024, 2).unwrap(),
        )
        .map(|m| m.to_string())
        .collect();

        assert_eq!(months, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_range_inclusive_empty_when_reversed() {
        let count = YearMonth::range_inclusive(
            YearMonth::new(2024, 2).unwrap(),
            YearMonth::new(2024, 1).unwrap(),
        )
        .count();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_serde_as_string() {
        let month = YearMonth::new(2024, 7).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-07\"");
        let parsed: YearMonth = serde_json::from_str("\"2024-07\"").unwrap();
        assert_eq!(parsed, month);
    }
}

mod timezone {
    use super::*;

    #[test]
    fn test_default_is_utc() {
        assert_eq!(Timezone::default().name(), "UTC");
    }

    #[test]
    fn test_parse_unknown_fails() {
        let result = "Nowhere/Special".parse::<Timezone>();
        assert!(matches!(result, Err(TemporalError::UnknownTimezone(_))));
    }

    #[test]
    fn test_date_of_respects_offset() {
        let tz: Timezone = "America/Los_Angeles".parse().unwrap();
        // 2024-03-01 05:00 UTC is still Feb 29 in Los Angeles
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 5, 0, 0).unwrap();
        assert_eq!(tz.date_of(instant), date(2024, 2, 29));
    }
}
