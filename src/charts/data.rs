//! Chart payloads handed to the renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregation::{CategoryShare, CrossCount, GroupBox, HistogramSeries, Trendline};
use crate::models::SummaryTable;

use super::ChartId;

/// A fully built chart: identity, text and data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// The chart identifier.
    pub id: ChartId,
    /// The 1-based chart number.
    pub number: u8,
    /// The chart title.
    pub title: String,
    /// Markdown commentary shown beneath the chart.
    pub description: String,
    /// The data to plot.
    pub data: ChartData,
}

/// The data behind one chart, tagged by chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    /// Points on two numeric axes, optionally with a fitted line.
    Scatter {
        /// Label of the x axis.
        x_label: String,
        /// Label of the y axis.
        y_label: String,
        /// One series per colour group.
        series: Vec<ScatterSeries>,
        /// Least squares fit over every point, if requested and defined.
        trendline: Option<Trendline>,
    },
    /// Box plots per category, with every point shown.
    Box {
        /// Label of the category axis.
        x_label: String,
        /// Label of the value axis.
        y_label: String,
        /// One box per category.
        groups: Vec<GroupBox>,
    },
    /// Histogram over a numeric axis.
    Histogram {
        /// Label of the x axis.
        x_label: String,
        /// One series per colour group, sharing bin edges.
        series: Vec<HistogramSeries>,
    },
    /// Histogram over a date axis, with a rug of raw dates.
    DateHistogram {
        /// Label of the x axis.
        x_label: String,
        /// One series per colour group, sharing bin edges.
        series: Vec<DateHistogramSeries>,
        /// Raw dates per colour group.
        rug: Vec<DateRug>,
    },
    /// One bar per category, coloured on a continuous scale.
    Bar {
        /// The category values.
        table: SummaryTable<f64>,
        /// Name of the continuous colour scale.
        color_scale: String,
    },
    /// Pie (or donut) of category shares.
    Pie {
        /// One slice per category.
        slices: Vec<CategoryShare>,
        /// Fraction of the radius left empty in the middle.
        hole: f64,
    },
    /// Side-by-side bars per category and group.
    GroupedBar {
        /// Label of the category axis.
        x_label: String,
        /// Label of the value axis.
        y_label: String,
        /// Counts per category and group.
        counts: CrossCount,
    },
}

/// A named set of scatter points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    /// The series name.
    pub name: String,
    /// The points.
    pub points: Vec<ScatterPoint>,
}

/// One scatter point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// The x value.
    pub x: f64,
    /// The y value.
    pub y: f64,
    /// Details shown on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<PointHover>,
}

/// Employee details attached to a scatter point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointHover {
    /// The employee name.
    pub name: String,
    /// The employee's department.
    pub department: String,
    /// The employee's position.
    pub position: String,
}

/// A histogram bin over dates covering `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBin {
    /// First day of the bin.
    pub start: NaiveDate,
    /// Day the bin ends.
    pub end: NaiveDate,
    /// Number of dates falling in the bin.
    pub count: u64,
}

/// A named date histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateHistogramSeries {
    /// The series name.
    pub name: String,
    /// The bins, in ascending order.
    pub bins: Vec<DateBin>,
}

/// Raw dates for one colour group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRug {
    /// The group name.
    pub name: String,
    /// The dates, in source order.
    pub dates: Vec<NaiveDate>,
}
