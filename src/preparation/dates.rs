//! Date field parsing.
//!
//! The HR export writes dates as `M/D/YY` for birth dates and `M/D/YYYY`
//! for hire dates; ISO `YYYY-MM-DD` is accepted as well so hand-edited or
//! re-exported files keep working.

use chrono::{Datelike, NaiveDate};

/// Two-digit years land within this many years either side of the as-of year.
const TWO_DIGIT_YEAR_WINDOW: i32 = 50;

/// Parses a date field relative to the `as_of` reference date.
///
/// Accepted formats:
/// - `YYYY-MM-DD`
/// - `M/D/YYYY`
/// - `M/D/YY`, where the two-digit year is placed in the hundred-year
///   window starting 50 years before the `as_of` year
///
/// A two-digit year can therefore resolve to a date after `as_of`
/// (`11/24/51` is 2051 for an `as_of` in 2026); callers decide what a
/// future date means for them.
///
/// Returns `None` for empty or unparseable values.
///
/// # Examples
///
/// ```
/// use hr_dashboard::preparation::parse_date;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// assert_eq!(parse_date("07/10/83", as_of), NaiveDate::from_ymd_opt(1983, 7, 10));
/// assert_eq!(parse_date("11/24/51", as_of), NaiveDate::from_ymd_opt(2051, 11, 24));
/// assert_eq!(parse_date("7/5/2011", as_of), NaiveDate::from_ymd_opt(2011, 7, 5));
/// assert_eq!(parse_date("1990-01-15", as_of), NaiveDate::from_ymd_opt(1990, 1, 15));
/// assert_eq!(parse_date("not a date", as_of), None);
/// ```
pub fn parse_date(value: &str, as_of: NaiveDate) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.contains('-') {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    }

    let year_digits = value.rsplit('/').next().map_or(0, str::len);
    match year_digits {
        4 => NaiveDate::parse_from_str(value, "%m/%d/%Y").ok(),
        2 => NaiveDate::parse_from_str(value, "%m/%d/%y")
            .ok()
            .and_then(|date| resolve_two_digit_year(date, as_of)),
        _ => None,
    }
}

/// Moves a date parsed from a two-digit year into the window around `as_of`.
fn resolve_two_digit_year(date: NaiveDate, as_of: NaiveDate) -> Option<NaiveDate> {
    let pivot = as_of.year();
    let mut year = pivot.div_euclid(100) * 100 + date.year().rem_euclid(100);
    if year >= pivot + TWO_DIGIT_YEAR_WINDOW {
        year -= 100;
    } else if year < pivot - TWO_DIGIT_YEAR_WINDOW {
        year += 100;
    }
    date.with_year(year)
}
