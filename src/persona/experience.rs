//! Experience level estimation from account age and relative score strength.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;

/// Seniority prefix plus a years label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    /// `"Principal"`, `"Staff"`, `"Senior"` or empty.
    pub prefix: &'static str,
    /// `"{age}+ years"` or `"Active"`.
    pub years: String,
}

/// Map account age and score ratio to an experience level.
///
/// Rules are checked top to bottom; the first match wins:
///
/// | ratio  | age | prefix    |
/// |--------|-----|-----------|
/// | > 0.85 | > 8 | Principal |
/// | > 0.70 | > 5 | Staff     |
/// | > 0.50 | > 3 | Senior    |
/// | > 0.30 |     | (none)    |
///
/// Anything else yields no prefix and the label `"Active"`. An unparseable
/// creation date counts as age 0.
pub fn estimate(
    created_at: Option<&str>,
    category_score: u32,
    max_score: u32,
    current_year: i32,
) -> Experience {
    let age = created_at
        .and_then(created_year)
        .map_or(0, |year| (current_year - year).max(0));
    let ratio = f64::from(category_score) / f64::from(max_score.max(1));
    let years = format!("{}+ years", age);

    if ratio > 0.85 && age > 8 {
        Experience {
            prefix: "Principal",
            years,
        }
    } else if ratio > 0.70 && age > 5 {
        Experience {
            prefix: "Staff",
            years,
        }
    } else if ratio > 0.50 && age > 3 {
        Experience {
            prefix: "Senior",
            years,
        }
    } else if ratio > 0.30 {
        Experience {
            prefix: "",
            years,
        }
    } else {
        Experience {
            prefix: "",
            years: "Active".to_string(),
        }
    }
}

/// Year of an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
fn created_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.year());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal() {
        let e = estimate(Some("2016-03-01T12:00:00Z"), 90, 100, 2026);
        assert_eq!(e.prefix, "Principal");
        assert_eq!(e.years, "10+ years");
    }

    #[test]
    fn test_staff_and_senior() {
        let e = estimate(Some("2019-01-01"), 75, 100, 2026);
        assert_eq!(e.prefix, "Staff");
        assert_eq!(e.years, "7+ years");

        let e = estimate(Some("2022-06-15"), 55, 100, 2026);
        assert_eq!(e.prefix, "Senior");
        assert_eq!(e.years, "4+ years");
    }

    #[test]
    fn test_high_ratio_young_account() {
        let e = estimate(Some("2025-01-01T00:00:00Z"), 100, 100, 2026);
        assert_eq!(e.prefix, "");
        assert_eq!(e.years, "1+ years");
    }

    #[test]
    fn test_low_ratio_is_active() {
        let e = estimate(Some("2010-01-01"), 30, 100, 2026);
        assert_eq!(e.prefix, "");
        assert_eq!(e.years, "Active");
    }

    #[test]
    fn test_malformed_date_is_age_zero() {
        let e = estimate(Some("last tuesday"), 100, 100, 2026);
        assert_eq!(e.prefix, "");
        assert_eq!(e.years, "0+ years");

        let e = estimate(None, 10, 100, 2026);
        assert_eq!(e.years, "Active");
    }

    #[test]
    fn test_zero_max_guarded() {
        let e = estimate(Some("2000-01-01"), 0, 0, 2026);
        assert_eq!(e.years, "Active");
    }

    #[test]
    fn test_future_date_clamps() {
        let e = estimate(Some("2030-01-01"), 100, 100, 2026);
        assert_eq!(e.years, "0+ years");
    }
}
