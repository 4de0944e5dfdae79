//! Builds chart data from the prepared dataset.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregation::{
    DEFAULT_HISTOGRAM_BINS, Group, HistogramSeries, box_stats_by, category_shares, cross_count,
    group_by, histogram, histogram_by_group, mean_satisfaction_by_source, ordinary_least_squares,
    terminations_by_department,
};
use crate::models::{Dataset, Record, SummaryTable};

use super::data::{
    Chart, ChartData, DateBin, DateHistogramSeries, DateRug, PointHover, ScatterPoint,
    ScatterSeries,
};
use super::descriptions::description;
use super::ChartId;

/// Fraction of the performance pie left open in the middle.
pub const PIE_HOLE: f64 = 0.3;

/// Options that shape chart data without changing what it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Number of bins for histogram charts.
    pub histogram_bins: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

/// Builds one chart from the dataset.
///
/// # Example
///
/// ```
/// use hr_dashboard::charts::{build_chart, ChartData, ChartId, ChartOptions};
/// use hr_dashboard::models::Dataset;
/// use chrono::NaiveDate;
///
/// let dataset = Dataset::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), vec![]);
/// let chart = build_chart(ChartId::TerminationsByDepartment, &dataset, &ChartOptions::default());
///
/// assert_eq!(chart.number, 8);
/// match chart.data {
///     ChartData::Bar { table, .. } => assert!(table.is_empty()),
///     other => panic!("unexpected chart data: {:?}", other),
/// }
/// ```
pub fn build_chart(id: ChartId, dataset: &Dataset, options: &ChartOptions) -> Chart {
    let data = match id {
        ChartId::AgeVsSalary => age_vs_salary(dataset),
        ChartId::SalaryByDepartment => ChartData::Box {
            x_label: "Department".to_string(),
            y_label: "Salary".to_string(),
            groups: box_stats_by(dataset, |r| r.department.as_str(), Record::salary_f64),
        },
        ChartId::BirthDateDistribution => birth_date_distribution(dataset, options),
        ChartId::AbsencesBySex => ChartData::Box {
            x_label: "Sex".to_string(),
            y_label: "Absences".to_string(),
            groups: box_stats_by(dataset, |r| r.sex.as_str(), Record::absences_f64),
        },
        ChartId::SatisfactionBySource => ChartData::Bar {
            table: mean_satisfaction_by_source(dataset),
            color_scale: "Blues".to_string(),
        },
        ChartId::SalaryDistribution => salary_distribution(dataset, options),
        ChartId::PerformanceScores => ChartData::Pie {
            slices: category_shares(dataset, |r| r.performance_score.as_str()),
            hole: PIE_HOLE,
        },
        ChartId::TerminationsByDepartment => ChartData::Bar {
            table: counts_as_values(terminations_by_department(dataset)),
            color_scale: "Reds".to_string(),
        },
        ChartId::TenureVsSalary => tenure_vs_salary(dataset),
        ChartId::PositionsBySex => ChartData::GroupedBar {
            x_label: "Position".to_string(),
            y_label: "Employees".to_string(),
            counts: cross_count(dataset, |r| r.position.as_str(), |r| r.sex.as_str()),
        },
    };

    debug!(chart = %id, records = dataset.len(), "Built chart");

    Chart {
        id,
        number: id.number(),
        title: id.title().to_string(),
        description: description(id).to_string(),
        data,
    }
}

fn hover(record: &Record) -> Option<PointHover> {
    Some(PointHover {
        name: record.name.clone(),
        department: record.department.clone(),
        position: record.position.clone(),
    })
}

/// Groups records by sex, sorted by name, for colour-split charts.
fn by_sex(dataset: &Dataset) -> Vec<Group<'_>> {
    let mut groups = group_by(dataset, |r| r.sex.as_str());
    groups.sort_by(|a, b| a.key.cmp(&b.key));
    groups
}

fn age_vs_salary(dataset: &Dataset) -> ChartData {
    let series = by_sex(dataset)
        .into_iter()
        .map(|group| ScatterSeries {
            name: group.key,
            points: group
                .records
                .iter()
                .filter_map(|r| {
                    r.salary_f64().map(|salary| ScatterPoint {
                        x: f64::from(r.age),
                        y: salary,
                        hover: hover(r),
                    })
                })
                .collect(),
        })
        .collect();

    ChartData::Scatter {
        x_label: "Age".to_string(),
        y_label: "Salary".to_string(),
        series,
        trendline: None,
    }
}

fn date_to_axis(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn axis_to_date(value: f64) -> NaiveDate {
    NaiveDate::from_num_days_from_ce_opt(value.floor() as i32).unwrap_or_default()
}

fn birth_date_distribution(dataset: &Dataset, options: &ChartOptions) -> ChartData {
    let groups = by_sex(dataset);

    let values: Vec<(String, Vec<f64>)> = groups
        .iter()
        .map(|g| {
            let days: Vec<f64> = g.records.iter().map(|r| date_to_axis(r.date_of_birth)).collect();
            (g.key.clone(), days)
        })
        .collect();

    let series = histogram_by_group(&values, options.histogram_bins)
        .into_iter()
        .map(|s| DateHistogramSeries {
            name: s.name,
            bins: s
                .bins
                .into_iter()
                .map(|b| DateBin {
                    start: axis_to_date(b.start),
                    end: axis_to_date(b.end),
                    count: b.count,
                })
                .collect(),
        })
        .collect();

    let rug = groups
        .into_iter()
        .map(|g| DateRug {
            name: g.key,
            dates: g.records.iter().map(|r| r.date_of_birth).collect(),
        })
        .collect();

    ChartData::DateHistogram {
        x_label: "Date of birth".to_string(),
        series,
        rug,
    }
}

fn salary_distribution(dataset: &Dataset, options: &ChartOptions) -> ChartData {
    let salaries: Vec<f64> = dataset.iter().filter_map(Record::salary_f64).collect();
    let bins = histogram(&salaries, options.histogram_bins);

    let series = if bins.is_empty() {
        Vec::new()
    } else {
        vec![HistogramSeries {
            name: "All employees".to_string(),
            bins,
        }]
    };

    ChartData::Histogram {
        x_label: "Salary".to_string(),
        series,
    }
}

fn counts_as_values(table: SummaryTable<u64>) -> SummaryTable<f64> {
    let rows = table
        .rows
        .into_iter()
        .map(|row| (row.key, row.value as f64))
        .collect();
    SummaryTable::new(table.key_label, table.value_label, rows)
}

fn tenure_vs_salary(dataset: &Dataset) -> ChartData {
    let points: Vec<ScatterPoint> = dataset
        .iter()
        .filter_map(|r| {
            let tenure = r.tenure_years?;
            let salary = r.salary_f64()?;
            Some(ScatterPoint {
                x: tenure,
                y: salary,
                hover: hover(r),
            })
        })
        .collect();

    let pairs: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    let trendline = ordinary_least_squares(&pairs);

    let series = if points.is_empty() {
        Vec::new()
    } else {
        vec![ScatterSeries {
            name: "Employees".to_string(),
            points,
        }]
    };

    ChartData::Scatter {
        x_label: "Tenure (years)".to_string(),
        y_label: "Salary".to_string(),
        series,
        trendline,
    }
}
