//! Preparation results: the kept dataset and the rows that were filtered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// Why a source row was left out of the prepared dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DropReason {
    /// The date of birth cell was empty.
    MissingDateOfBirth,
    /// The date of birth could not be parsed.
    UnparseableDateOfBirth {
        /// The raw cell value.
        value: String,
    },
    /// The date of birth was not strictly before the as-of date.
    DateOfBirthNotInPast {
        /// The parsed date of birth.
        date: NaiveDate,
    },
    /// The derived age fell outside the accepted bounds.
    AgeOutOfRange {
        /// The derived age in whole years.
        age: i64,
    },
    /// The row itself could not be decoded (e.g., invalid UTF-8).
    MalformedRow {
        /// A description of the problem.
        message: String,
    },
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::MissingDateOfBirth => write!(f, "missing date of birth"),
            DropReason::UnparseableDateOfBirth { value } => {
                write!(f, "unparseable date of birth '{}'", value)
            }
            DropReason::DateOfBirthNotInPast { date } => {
                write!(f, "date of birth {} is not in the past", date)
            }
            DropReason::AgeOutOfRange { age } => write!(f, "age {} out of range", age),
            DropReason::MalformedRow { message } => write!(f, "malformed row: {}", message),
        }
    }
}

/// A source row that was filtered out during preparation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRow {
    /// 1-based line number of the row in the source (the header is line 1).
    pub line: u64,
    /// Why the row was dropped.
    #[serde(flatten)]
    pub reason: DropReason,
}

/// The output of dataset preparation.
#[derive(Debug, Clone, PartialEq)]
pub struct Preparation {
    /// The prepared dataset.
    pub dataset: Dataset,
    /// Rows that were filtered out, in source order.
    pub dropped: Vec<DroppedRow>,
}

impl Preparation {
    /// Splits the preparation into the dataset and its dropped rows.
    pub fn into_parts(self) -> (Dataset, Vec<DroppedRow>) {
        (self.dataset, self.dropped)
    }
}

/// Serializable summary of a preparation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationReport {
    /// The reference date used for derived fields.
    pub as_of: NaiveDate,
    /// Number of records kept.
    pub kept: usize,
    /// Number of rows dropped.
    pub dropped_count: usize,
    /// The dropped rows with their reasons.
    pub dropped: Vec<DroppedRow>,
}

impl PreparationReport {
    /// Builds a report from a dataset and its dropped rows.
    pub fn new(dataset: &Dataset, dropped: &[DroppedRow]) -> Self {
        Self {
            as_of: dataset.as_of(),
            kept: dataset.len(),
            dropped_count: dropped.len(),
            dropped: dropped.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_row_serializes_flat() {
        let row = DroppedRow {
            line: 7,
            reason: DropReason::AgeOutOfRange { age: 104 },
        };
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["line"], 7);
        assert_eq!(json["reason"], "age_out_of_range");
        assert_eq!(json["age"], 104);
    }

    #[test]
    fn test_drop_reason_display() {
        let reason = DropReason::DateOfBirthNotInPast {
            date: NaiveDate::from_ymd_opt(2051, 11, 24).unwrap(),
        };
        assert_eq!(reason.to_string(), "date of birth 2051-11-24 is not in the past");
        assert_eq!(
            DropReason::MissingDateOfBirth.to_string(),
            "missing date of birth"
        );
    }

    #[test]
    fn test_report_counts() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let dataset = Dataset::new(as_of, vec![]);
        let dropped = vec![DroppedRow {
            line: 2,
            reason: DropReason::MissingDateOfBirth,
        }];

        let report = PreparationReport::new(&dataset, &dropped);
        assert_eq!(report.as_of, as_of);
        assert_eq!(report.kept, 0);
        assert_eq!(report.dropped_count, 1);
    }
}
