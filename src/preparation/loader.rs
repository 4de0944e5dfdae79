//! Dataset loading and preparation.
//!
//! [`prepare`] turns any CSV byte source into a [`Preparation`] without
//! touching the filesystem; [`DatasetLoader`] opens a file and delegates to
//! it.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Dataset, Record};

use super::dates::parse_date;
use super::derive::{AgeBounds, age_in_years, tenure_in_years};
use super::report::{DropReason, DroppedRow, Preparation};
use super::schema::ColumnIndex;

/// Prepares a dataset from CSV input.
///
/// Reads the header row, checks the required columns, then converts each
/// row into a [`Record`]. Only the date of birth decides membership: rows
/// whose date of birth is missing, unparseable, not in the past, or gives
/// an age outside `bounds` are recorded as [`DroppedRow`]s and left out of
/// the dataset. Short rows read their missing cells as blank, and blank or
/// unparseable numeric cells become `None` on an otherwise kept record.
///
/// # Errors
///
/// - `MissingColumns` if the header lacks any required column
/// - `DatasetReadError` if the underlying reader fails
///
/// # Example
///
/// ```
/// use hr_dashboard::preparation::{prepare, AgeBounds};
/// use chrono::NaiveDate;
///
/// let csv = "\
/// Employee_Name,Department,Position,Sex,Salary,DOB,DateofHire,Absences,PerformanceScore,RecruitmentSource,EmpSatisfaction,Termd
/// \"Adinolfi, Wilson K\",Production,Production Technician I,M,62506,07/10/83,7/5/2011,1,Exceeds,LinkedIn,5,0
/// ";
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let preparation = prepare(csv.as_bytes(), as_of, AgeBounds::default())?;
///
/// assert_eq!(preparation.dataset.len(), 1);
/// assert_eq!(preparation.dataset.records()[0].age, 43);
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
pub fn prepare<R: Read>(
    reader: R,
    as_of: NaiveDate,
    bounds: AgeBounds,
) -> DashboardResult<Preparation> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers().map_err(read_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut dropped = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let fallback_line = idx as u64 + 2;

        let outcome = match result {
            Ok(row) => {
                let line = row.position().map_or(fallback_line, |p| p.line());
                (line, prepare_row(&row, &columns, as_of, bounds))
            }
            Err(err) if err.is_io_error() => return Err(read_error(err)),
            Err(err) => {
                let line = err.position().map_or(fallback_line, |p| p.line());
                let reason = DropReason::MalformedRow {
                    message: err.to_string(),
                };
                (line, Err(reason))
            }
        };

        match outcome {
            (_, Ok(record)) => records.push(record),
            (line, Err(reason)) => {
                debug!(line, reason = %reason, "Dropping row");
                dropped.push(DroppedRow { line, reason });
            }
        }
    }

    info!(
        as_of = %as_of,
        kept = records.len(),
        dropped = dropped.len(),
        "Dataset prepared"
    );

    Ok(Preparation {
        dataset: Dataset::new(as_of, records),
        dropped,
    })
}

/// Converts one CSV row into a record, or explains why it was dropped.
fn prepare_row(
    row: &StringRecord,
    columns: &ColumnIndex,
    as_of: NaiveDate,
    bounds: AgeBounds,
) -> Result<Record, DropReason> {
    let cell = |index: usize| row.get(index).unwrap_or("").trim();

    let raw_dob = cell(columns.date_of_birth);
    if raw_dob.is_empty() {
        return Err(DropReason::MissingDateOfBirth);
    }
    let date_of_birth =
        parse_date(raw_dob, as_of).ok_or_else(|| DropReason::UnparseableDateOfBirth {
            value: raw_dob.to_string(),
        })?;
    if date_of_birth >= as_of {
        return Err(DropReason::DateOfBirthNotInPast {
            date: date_of_birth,
        });
    }

    let age = age_in_years(date_of_birth, as_of);
    if !bounds.contains(age) {
        return Err(DropReason::AgeOutOfRange { age });
    }

    let salary: Option<Decimal> = parse_optional(cell(columns.salary));
    let absences: Option<u32> = parse_optional(cell(columns.absences));
    let satisfaction: Option<u8> = parse_optional(cell(columns.satisfaction));
    let terminated = is_truthy(cell(columns.terminated));

    let date_of_hire = parse_date(cell(columns.date_of_hire), as_of);
    let tenure_years = date_of_hire.and_then(|hire| tenure_in_years(hire, as_of));

    Ok(Record {
        name: cell(columns.name).to_string(),
        department: cell(columns.department).to_string(),
        position: cell(columns.position).to_string(),
        sex: cell(columns.sex).to_string(),
        salary,
        date_of_birth,
        date_of_hire,
        absences,
        performance_score: cell(columns.performance_score).to_string(),
        recruitment_source: cell(columns.recruitment_source).to_string(),
        satisfaction,
        terminated,
        // bounds.contains guarantees a non-negative age that fits
        age: u32::try_from(age).unwrap_or_default(),
        tenure_years,
    })
}

/// Blank and unparseable cells both read as missing.
fn parse_optional<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

/// Reads a termination flag; only `1`, `true` or `yes` count as set.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

fn read_error(err: csv::Error) -> DashboardError {
    DashboardError::DatasetReadError {
        message: err.to_string(),
    }
}

/// Loads and prepares the dataset from a CSV file.
///
/// # Example
///
/// ```no_run
/// use hr_dashboard::preparation::{AgeBounds, DatasetLoader};
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let preparation = DatasetLoader::load("./data/HRDataset_v14.csv", as_of, AgeBounds::default())?;
/// println!("Loaded {} employees", preparation.dataset.len());
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader;

impl DatasetLoader {
    /// Opens the file at `path` and prepares it.
    ///
    /// # Errors
    ///
    /// - `DatasetNotFound` if the file does not exist
    /// - `DatasetReadError` if the file cannot be opened or read
    /// - `MissingColumns` if the header lacks any required column
    pub fn load<P: AsRef<Path>>(
        path: P,
        as_of: NaiveDate,
        bounds: AgeBounds,
    ) -> DashboardResult<Preparation> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DashboardError::DatasetNotFound {
                path: path_str.clone(),
            },
            _ => DashboardError::DatasetReadError {
                message: format!("{}: {}", path_str, err),
            },
        })?;

        info!(path = %path_str, "Loading dataset");
        prepare(file, as_of, bounds)
    }
}
