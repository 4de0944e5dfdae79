//! Derived field calculations.
//!
//! Age and tenure are measured in 365-day years from a source date to the
//! dataset's as-of date. Age is the whole number of such years; tenure keeps
//! the fraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days counted as one year for age and tenure.
pub const DAYS_PER_YEAR: i64 = 365;

/// Youngest age kept in the prepared dataset.
pub const DEFAULT_MIN_AGE: i64 = 18;

/// Oldest age kept in the prepared dataset.
pub const DEFAULT_MAX_AGE: i64 = 99;

/// Inclusive bounds on the derived age of a kept record.
///
/// # Example
///
/// ```
/// use hr_dashboard::preparation::AgeBounds;
///
/// let bounds = AgeBounds::default();
/// assert!(!bounds.contains(17));
/// assert!(bounds.contains(18));
/// assert!(bounds.contains(99));
/// assert!(!bounds.contains(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBounds {
    /// Minimum age kept (inclusive).
    pub min: i64,
    /// Maximum age kept (inclusive).
    pub max: i64,
}

impl AgeBounds {
    /// Returns true if `age` lies within the bounds.
    pub fn contains(&self, age: i64) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

/// Calculates age in whole years at `as_of`.
///
/// The result is negative when `date_of_birth` is after `as_of`.
///
/// # Examples
///
/// ```
/// use hr_dashboard::preparation::age_in_years;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1983, 7, 10).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert_eq!(age_in_years(dob, as_of), 43);
/// ```
pub fn age_in_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - date_of_birth).num_days().div_euclid(DAYS_PER_YEAR)
}

/// Calculates tenure in fractional years at `as_of`.
///
/// Returns `None` when the hire date is after `as_of`.
///
/// # Examples
///
/// ```
/// use hr_dashboard::preparation::tenure_in_years;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert_eq!(tenure_in_years(hire, as_of), Some(1.0));
/// ```
pub fn tenure_in_years(date_of_hire: NaiveDate, as_of: NaiveDate) -> Option<f64> {
    if date_of_hire > as_of {
        return None;
    }
    Some((as_of - date_of_hire).num_days() as f64 / DAYS_PER_YEAR as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_age_uses_365_day_years() {
        let dob = as_of() - Duration::days(18 * 365);
        assert_eq!(age_in_years(dob, as_of()), 18);

        let dob = as_of() - Duration::days(18 * 365 - 1);
        assert_eq!(age_in_years(dob, as_of()), 17);
    }

    #[test]
    fn test_age_of_future_birth_is_negative() {
        let dob = as_of() + Duration::days(1);
        assert_eq!(age_in_years(dob, as_of()), -1);
    }

    #[test]
    fn test_age_on_as_of_is_zero() {
        assert_eq!(age_in_years(as_of(), as_of()), 0);
    }

    #[test]
    fn test_tenure_keeps_fraction() {
        let hire = as_of() - Duration::days(730 + 73);
        let tenure = tenure_in_years(hire, as_of()).unwrap();
        assert!((tenure - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_tenure_on_hire_day_is_zero() {
        assert_eq!(tenure_in_years(as_of(), as_of()), Some(0.0));
    }

    #[test]
    fn test_tenure_for_future_hire_is_undefined() {
        let hire = as_of() + Duration::days(30);
        assert_eq!(tenure_in_years(hire, as_of()), None);
    }

    #[test]
    fn test_default_age_bounds() {
        let bounds = AgeBounds::default();
        assert_eq!(bounds.min, 18);
        assert_eq!(bounds.max, 99);
    }
}
