//! Record fixtures shared by aggregation and chart tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Dataset, Record};

pub(crate) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub(crate) fn record(name: &str, department: &str, source: &str) -> Record {
    Record {
        name: name.to_string(),
        department: department.to_string(),
        position: "Production Technician I".to_string(),
        sex: "F".to_string(),
        salary: Some(Decimal::new(60000, 0)),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        date_of_hire: NaiveDate::from_ymd_opt(2015, 1, 5),
        absences: Some(2),
        performance_score: "Fully Meets".to_string(),
        recruitment_source: source.to_string(),
        satisfaction: Some(3),
        terminated: false,
        age: 41,
        tenure_years: Some(11.8),
    }
}

pub(crate) fn dataset(records: Vec<Record>) -> Dataset {
    Dataset::new(as_of(), records)
}
