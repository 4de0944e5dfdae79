//! Input column contract.
//!
//! Maps the required HR export headers to their positions in the CSV so rows
//! can be read by name regardless of column order.

use csv::StringRecord;

use crate::error::{DashboardError, DashboardResult};

/// Column holding the employee name.
pub const COL_NAME: &str = "Employee_Name";
/// Column holding the department.
pub const COL_DEPARTMENT: &str = "Department";
/// Column holding the position title.
pub const COL_POSITION: &str = "Position";
/// Column holding the recorded sex.
pub const COL_SEX: &str = "Sex";
/// Column holding the salary.
pub const COL_SALARY: &str = "Salary";
/// Column holding the date of birth.
pub const COL_DATE_OF_BIRTH: &str = "DOB";
/// Column holding the hire date.
pub const COL_DATE_OF_HIRE: &str = "DateofHire";
/// Column holding the absence count.
pub const COL_ABSENCES: &str = "Absences";
/// Column holding the performance score.
pub const COL_PERFORMANCE_SCORE: &str = "PerformanceScore";
/// Column holding the recruitment source.
pub const COL_RECRUITMENT_SOURCE: &str = "RecruitmentSource";
/// Column holding the satisfaction score.
pub const COL_SATISFACTION: &str = "EmpSatisfaction";
/// Column holding the termination flag.
pub const COL_TERMINATED: &str = "Termd";

/// Every column the preparer requires, in schema order.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    COL_NAME,
    COL_DEPARTMENT,
    COL_POSITION,
    COL_SEX,
    COL_SALARY,
    COL_DATE_OF_BIRTH,
    COL_DATE_OF_HIRE,
    COL_ABSENCES,
    COL_PERFORMANCE_SCORE,
    COL_RECRUITMENT_SOURCE,
    COL_SATISFACTION,
    COL_TERMINATED,
];

/// Positions of the required columns within a CSV header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    pub name: usize,
    pub department: usize,
    pub position: usize,
    pub sex: usize,
    pub salary: usize,
    pub date_of_birth: usize,
    pub date_of_hire: usize,
    pub absences: usize,
    pub performance_score: usize,
    pub recruitment_source: usize,
    pub satisfaction: usize,
    pub terminated: usize,
}

impl ColumnIndex {
    /// Locates every required column in `headers`.
    ///
    /// Header names are matched after trimming whitespace. Extra columns are
    /// ignored. Fails with `MissingColumns` listing every absent column.
    pub fn from_headers(headers: &StringRecord) -> DashboardResult<Self> {
        let positions: Vec<Option<usize>> = REQUIRED_COLUMNS
            .iter()
            .map(|column| headers.iter().position(|h| h.trim() == *column))
            .collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .zip(&positions)
            .filter(|(_, position)| position.is_none())
            .map(|(column, _)| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DashboardError::MissingColumns { columns: missing });
        }

        let at = |i: usize| positions[i].unwrap_or_default();
        Ok(Self {
            name: at(0),
            department: at(1),
            position: at(2),
            sex: at(3),
            salary: at(4),
            date_of_birth: at(5),
            date_of_hire: at(6),
            absences: at(7),
            performance_score: at(8),
            recruitment_source: at(9),
            satisfaction: at(10),
            terminated: at(11),
        })
    }
}
