//! Salary band parsing ("5 to 10 lakh", "8 lakhs").

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const RUPEES_PER_LAKH: u64 = 100_000;

/// Tried in order; the first pattern that matches wins.
static BUDGET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\s*(?:to|-)\s*(\d+)\s*(?:lakh|lacs|lakhs)",
        r"(?i)(\d+)\s*(?:lakh|lacs|lakhs)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid budget pattern"))
    .collect()
});

/// Inclusive salary band in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryBand {
    pub min: u64,
    pub max: u64,
}

/// Parse a lakh amount or range. A single amount `n` means `n..=2n` lakh.
pub fn extract_budget(text: &str) -> Option<SalaryBand> {
    for pattern in BUDGET_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let first = lakhs(caps.get(1)?.as_str())?;
        let second = match caps.get(2) {
            Some(m) => lakhs(m.as_str())?,
            None => first.saturating_mul(2),
        };
        return Some(SalaryBand {
            min: first.min(second),
            max: first.max(second),
        });
    }
    None
}

fn lakhs(digits: &str) -> Option<u64> {
    digits.parse::<u64>().ok()?.checked_mul(RUPEES_PER_LAKH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let band = extract_budget("careers with salary 5 to 10 lakh").unwrap();
        assert_eq!(band, SalaryBand { min: 500_000, max: 1_000_000 });
    }

    #[test]
    fn test_dash_range_reversed() {
        let band = extract_budget("something paying 12-6 lakhs").unwrap();
        assert_eq!(band, SalaryBand { min: 600_000, max: 1_200_000 });
    }

    #[test]
    fn test_single_amount_doubles() {
        let band = extract_budget("at least 8 LAKHS please").unwrap();
        assert_eq!(band, SalaryBand { min: 800_000, max: 1_600_000 });
    }

    #[test]
    fn test_no_amount() {
        assert!(extract_budget("a well paid job").is_none());
        assert!(extract_budget("5 rupees").is_none());
    }
}
