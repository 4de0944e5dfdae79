//! Employee record model.
//!
//! A [`Record`] is one row of the HR dataset after preparation: parsed
//! dates, typed numeric fields, and the derived age and tenure. Numeric
//! fields are optional; a blank or unparseable source value is kept as
//! `None` and skipped by the aggregations that read it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Represents one employee in the prepared dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The employee's full name as it appears in the source.
    pub name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's position title.
    pub position: String,
    /// The employee's recorded sex.
    pub sex: String,
    /// Annual salary, if the source value parsed.
    pub salary: Option<Decimal>,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// The date the employee was hired, if the source value parsed.
    pub date_of_hire: Option<NaiveDate>,
    /// Number of recorded absences, if the source value parsed.
    pub absences: Option<u32>,
    /// Performance score category (e.g., "Fully Meets").
    pub performance_score: String,
    /// The channel through which the employee was recruited.
    pub recruitment_source: String,
    /// Employment satisfaction on a 1 to 5 scale, if the source value parsed.
    pub satisfaction: Option<u8>,
    /// Whether the employee has been terminated. Only a truthy source flag
    /// counts; anything else reads as `false`.
    pub terminated: bool,
    /// Whole years between date of birth and the dataset's as-of date.
    pub age: u32,
    /// Fractional years between date of hire and the dataset's as-of date.
    ///
    /// `None` when the hire date is missing, unparseable, or after the
    /// as-of date.
    pub tenure_years: Option<f64>,
}

impl Record {
    /// Returns the salary as a float for plotting and regression.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_dashboard::models::Record;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = Record {
    ///     name: "Adinolfi, Wilson K".to_string(),
    ///     department: "Production".to_string(),
    ///     position: "Production Technician I".to_string(),
    ///     sex: "M".to_string(),
    ///     salary: Some(Decimal::new(62506, 0)),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1983, 7, 10).unwrap(),
    ///     date_of_hire: NaiveDate::from_ymd_opt(2011, 7, 5),
    ///     absences: Some(1),
    ///     performance_score: "Exceeds".to_string(),
    ///     recruitment_source: "LinkedIn".to_string(),
    ///     satisfaction: Some(5),
    ///     terminated: false,
    ///     age: 42,
    ///     tenure_years: Some(14.3),
    /// };
    /// assert_eq!(record.salary_f64(), Some(62506.0));
    /// ```
    pub fn salary_f64(&self) -> Option<f64> {
        self.salary.and_then(|salary| salary.to_f64())
    }

    /// Returns the absence count as a float for box statistics.
    pub fn absences_f64(&self) -> Option<f64> {
        self.absences.map(f64::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> Record {
        Record {
            name: "Ait Sidi, Karthikeyan".to_string(),
            department: "IT/IS".to_string(),
            position: "Sr. DBA".to_string(),
            sex: "M".to_string(),
            salary: Some(Decimal::new(10413750, 2)),
            date_of_birth: NaiveDate::from_ymd_opt(1975, 5, 5).unwrap(),
            date_of_hire: NaiveDate::from_ymd_opt(2015, 3, 30),
            absences: Some(17),
            performance_score: "Fully Meets".to_string(),
            recruitment_source: "Indeed".to_string(),
            satisfaction: Some(3),
            terminated: true,
            age: 51,
            tenure_years: Some(11.5),
        }
    }

    #[test]
    fn test_salary_f64_keeps_cents() {
        let record = create_test_record();
        assert_eq!(record.salary_f64(), Some(104137.5));
    }

    #[test]
    fn test_missing_numeric_fields_have_no_float_value() {
        let mut record = create_test_record();
        record.salary = None;
        record.absences = None;

        assert_eq!(record.salary_f64(), None);
        assert_eq!(record.absences_f64(), None);
    }

    #[test]
    fn test_serialize_record_uses_iso_dates() {
        let record = create_test_record();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["date_of_birth"], "1975-05-05");
        assert_eq!(json["date_of_hire"], "2015-03-30");
        assert_eq!(json["terminated"], true);
    }

    #[test]
    fn test_serialize_record_without_hire_date() {
        let mut record = create_test_record();
        record.date_of_hire = None;
        record.tenure_years = None;

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["date_of_hire"].is_null());
        assert!(json["tenure_years"].is_null());
    }
}
