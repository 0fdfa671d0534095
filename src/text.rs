//! Cell text normalization and year parsing.
//!
//! Every field pulled from a table cell goes through [`normalize_text`]
//! before it is compared, keyed or searched, so incidental markup whitespace
//! never changes the result.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// First `19xx` occurrence; the capture holds the two-digit suffix.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"19(\d{2})").expect("YEAR_RE regex"));

/// Trim and collapse whitespace runs into single spaces.
///
/// Non-breaking spaces count as whitespace, which wiki tables use heavily
/// between day and month.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}

/// Extract the two-digit year from the first `19xx` in a date string.
///
/// Dates outside the 1900s never match.
///
/// ```
/// use nes_catalog::text::parse_two_digit_year;
///
/// assert_eq!(parse_two_digit_year("September 13, 1985"), Some(85));
/// assert_eq!(parse_two_digit_year("Unknown"), None);
/// ```
#[must_use]
pub fn parse_two_digit_year(date: &str) -> Option<u8> {
    YEAR_RE
        .captures(date)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Inclusive range check on two-digit years.
#[inline]
#[must_use]
pub fn year_in_range(year: u8, min_year: u8, max_year: u8) -> bool {
    (min_year..=max_year).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_edges() {
        assert_eq!(normalize_text("  Nintendo \n"), "Nintendo");
    }

    #[test]
    fn normalize_collapses_inner_runs() {
        assert_eq!(normalize_text("Super\n   Mario\tBros."), "Super Mario Bros.");
    }

    #[test]
    fn normalize_treats_nbsp_as_space() {
        assert_eq!(normalize_text("October\u{a0}18,\u{a0}1985"), "October 18, 1985");
    }

    #[test]
    fn normalize_empty_and_blank() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \t\n "), "");
    }

    #[test]
    fn year_from_full_date() {
        assert_eq!(parse_two_digit_year("February 21, 1986"), Some(86));
    }

    #[test]
    fn year_from_bare_year() {
        assert_eq!(parse_two_digit_year("1990"), Some(90));
    }

    #[test]
    fn year_takes_first_match() {
        assert_eq!(parse_two_digit_year("1989 (re-release 1993)"), Some(89));
    }

    #[test]
    fn year_ignores_other_centuries() {
        assert_eq!(parse_two_digit_year("March 2, 2004"), None);
        assert_eq!(parse_two_digit_year("Unknown"), None);
        assert_eq!(parse_two_digit_year(""), None);
    }

    #[test]
    fn year_needs_two_digits_after_prefix() {
        assert_eq!(parse_two_digit_year("Vol. 19"), None);
        assert_eq!(parse_two_digit_year("19x5"), None);
    }

    #[test]
    fn range_is_inclusive() {
        assert!(year_in_range(85, 85, 95));
        assert!(year_in_range(95, 85, 95));
        assert!(!year_in_range(84, 85, 95));
        assert!(!year_in_range(96, 85, 95));
    }
}
