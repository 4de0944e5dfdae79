//! Dashboard page assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::Dataset;
use crate::preparation::DroppedRow;

use super::builder::{ChartOptions, build_chart};
use super::data::Chart;
use super::ChartId;

/// Charts per section, sections per row, in page order.
pub const DASHBOARD_LAYOUT: [[&[ChartId]; 2]; 3] = [
    [
        &[ChartId::AgeVsSalary, ChartId::SalaryByDepartment],
        &[ChartId::BirthDateDistribution, ChartId::AbsencesBySex],
    ],
    [
        &[ChartId::SatisfactionBySource, ChartId::SalaryDistribution],
        &[ChartId::PerformanceScores, ChartId::TerminationsByDepartment],
    ],
    [&[ChartId::TenureVsSalary], &[ChartId::PositionsBySex]],
];

/// The complete dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Page title.
    pub title: String,
    /// The reference date the dataset was derived against.
    pub as_of: NaiveDate,
    /// Number of employees plotted.
    pub record_count: usize,
    /// Number of source rows filtered out during preparation.
    pub dropped_count: usize,
    /// Rows of sections, top to bottom.
    pub rows: Vec<DashboardRow>,
}

/// A horizontal row of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRow {
    /// Sections, left to right.
    pub sections: Vec<DashboardSection>,
}

/// A column of charts within a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSection {
    /// Charts, top to bottom.
    pub charts: Vec<Chart>,
}

impl Dashboard {
    /// Returns every chart in page order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.rows
            .iter()
            .flat_map(|row| &row.sections)
            .flat_map(|section| &section.charts)
    }
}

/// Builds every chart and arranges them in [`DASHBOARD_LAYOUT`].
pub fn build_dashboard(
    title: &str,
    dataset: &Dataset,
    dropped: &[DroppedRow],
    options: &ChartOptions,
) -> Dashboard {
    let rows = DASHBOARD_LAYOUT
        .iter()
        .map(|row| DashboardRow {
            sections: row
                .iter()
                .map(|section| DashboardSection {
                    charts: section
                        .iter()
                        .map(|id| build_chart(*id, dataset, options))
                        .collect(),
                })
                .collect(),
        })
        .collect();

    info!(
        records = dataset.len(),
        dropped = dropped.len(),
        "Dashboard built"
    );

    Dashboard {
        title: title.to_string(),
        as_of: dataset.as_of(),
        record_count: dataset.len(),
        dropped_count: dropped.len(),
        rows,
    }
}
