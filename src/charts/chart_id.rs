//! Chart identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Identifies one of the ten dashboard charts.
///
/// Identifiers serialize as kebab-case slugs and parse from either their
/// slug or their 1-based chart number.
///
/// # Example
///
/// ```
/// use hr_dashboard::charts::ChartId;
///
/// let id: ChartId = "terminations-by-department".parse().unwrap();
/// assert_eq!(id, ChartId::TerminationsByDepartment);
/// assert_eq!(id.number(), 8);
/// assert_eq!("8".parse::<ChartId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    /// Scatter of age against salary, coloured by sex.
    AgeVsSalary,
    /// Salary box plot per department.
    SalaryByDepartment,
    /// Histogram of dates of birth, split by sex.
    BirthDateDistribution,
    /// Absences box plot per sex.
    AbsencesBySex,
    /// Mean satisfaction per recruitment source.
    SatisfactionBySource,
    /// Histogram of salaries.
    SalaryDistribution,
    /// Share of each performance score.
    PerformanceScores,
    /// Termination count per department.
    TerminationsByDepartment,
    /// Scatter of tenure against salary with a trendline.
    TenureVsSalary,
    /// Position headcount split by sex.
    PositionsBySex,
}

impl ChartId {
    /// Every chart, in dashboard number order.
    pub const ALL: [ChartId; 10] = [
        ChartId::AgeVsSalary,
        ChartId::SalaryByDepartment,
        ChartId::BirthDateDistribution,
        ChartId::AbsencesBySex,
        ChartId::SatisfactionBySource,
        ChartId::SalaryDistribution,
        ChartId::PerformanceScores,
        ChartId::TerminationsByDepartment,
        ChartId::TenureVsSalary,
        ChartId::PositionsBySex,
    ];

    /// Returns the 1-based chart number shown on the dashboard.
    pub fn number(self) -> u8 {
        match self {
            ChartId::AgeVsSalary => 1,
            ChartId::SalaryByDepartment => 2,
            ChartId::BirthDateDistribution => 3,
            ChartId::AbsencesBySex => 4,
            ChartId::SatisfactionBySource => 5,
            ChartId::SalaryDistribution => 6,
            ChartId::PerformanceScores => 7,
            ChartId::TerminationsByDepartment => 8,
            ChartId::TenureVsSalary => 9,
            ChartId::PositionsBySex => 10,
        }
    }

    /// Returns the URL slug for this chart.
    pub fn slug(self) -> &'static str {
        match self {
            ChartId::AgeVsSalary => "age-vs-salary",
            ChartId::SalaryByDepartment => "salary-by-department",
            ChartId::BirthDateDistribution => "birth-date-distribution",
            ChartId::AbsencesBySex => "absences-by-sex",
            ChartId::SatisfactionBySource => "satisfaction-by-source",
            ChartId::SalaryDistribution => "salary-distribution",
            ChartId::PerformanceScores => "performance-scores",
            ChartId::TerminationsByDepartment => "terminations-by-department",
            ChartId::TenureVsSalary => "tenure-vs-salary",
            ChartId::PositionsBySex => "positions-by-sex",
        }
    }

    /// Returns the chart title.
    pub fn title(self) -> &'static str {
        match self {
            ChartId::AgeVsSalary => "Age vs Salary",
            ChartId::SalaryByDepartment => "Salaries by Department",
            ChartId::BirthDateDistribution => "Age Distribution by Sex",
            ChartId::AbsencesBySex => "Absences by Sex",
            ChartId::SatisfactionBySource => "Satisfaction by Recruitment Source",
            ChartId::SalaryDistribution => "Salary Distribution",
            ChartId::PerformanceScores => "Performance Scores",
            ChartId::TerminationsByDepartment => "Terminations by Department",
            ChartId::TenureVsSalary => "Tenure vs Salary",
            ChartId::PositionsBySex => "Positions by Sex",
        }
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ChartId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartId::ALL
            .into_iter()
            .find(|id| id.slug() == s || s.parse::<u8>().is_ok_and(|n| n == id.number()))
            .ok_or_else(|| DashboardError::ChartNotFound { id: s.to_string() })
    }
}
