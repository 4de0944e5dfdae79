//! Equal-width histograms.

use serde::{Deserialize, Serialize};

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// One histogram bin covering `[start, end)`; the last bin also includes `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge of the bin.
    pub start: f64,
    /// Upper edge of the bin.
    pub end: f64,
    /// Number of values falling in the bin.
    pub count: u64,
}

/// A named histogram sharing bin edges with its sibling series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSeries {
    /// The series name (e.g., a category value).
    pub name: String,
    /// The bins, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// Bin edges spanning a value range.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Binning {
    min: f64,
    max: f64,
    bins: usize,
}

impl Binning {
    fn over<'a>(values: impl IntoIterator<Item = &'a f64>, bins: usize) -> Option<Self> {
        let mut range: Option<(f64, f64)> = None;
        for &v in values {
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }

        let (min, max) = range?;
        if bins == 0 {
            return None;
        }
        let bins = if min == max { 1 } else { bins };
        Some(Self { min, max, bins })
    }

    fn width(&self) -> f64 {
        (self.max - self.min) / self.bins as f64
    }

    fn index_of(&self, value: f64) -> usize {
        if self.max == self.min {
            return 0;
        }
        let index = ((value - self.min) / self.width()).floor() as usize;
        index.min(self.bins - 1)
    }

    fn count(&self, values: &[f64]) -> Vec<HistogramBin> {
        let width = self.width();
        let mut bins: Vec<HistogramBin> = (0..self.bins)
            .map(|i| HistogramBin {
                start: self.min + i as f64 * width,
                end: if i + 1 == self.bins {
                    self.max
                } else {
                    self.min + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        for &value in values {
            bins[self.index_of(value)].count += 1;
        }
        bins
    }
}

/// Bins values into `bins` equal-width buckets over their range.
///
/// An empty input (or zero bins) yields no bins; a constant input yields a
/// single bin holding every value.
///
/// # Examples
///
/// ```
/// use hr_dashboard::aggregation::histogram;
///
/// let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(bins.len(), 2);
/// assert_eq!(bins[0].count, 2);
/// assert_eq!(bins[1].count, 3);
/// ```
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    match Binning::over(values, bins) {
        Some(binning) => binning.count(values),
        None => Vec::new(),
    }
}

/// Bins several named series over one shared set of edges.
///
/// The edges span the combined range of every series, so bars line up when
/// overlaid. Returns one series per input, in input order.
pub fn histogram_by_group(groups: &[(String, Vec<f64>)], bins: usize) -> Vec<HistogramSeries> {
    let Some(binning) = Binning::over(groups.iter().flat_map(|(_, v)| v), bins) else {
        return Vec::new();
    };

    groups
        .iter()
        .map(|(name, values)| HistogramSeries {
            name: name.clone(),
            bins: binning.count(values),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_bins() {
        assert!(histogram(&[], 30).is_empty());
    }

    #[test]
    fn test_zero_bins_requested() {
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_constant_input_single_bin() {
        let bins = histogram(&[5.0, 5.0, 5.0], 30);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].start, 5.0);
        assert_eq!(bins[0].end, 5.0);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let bins = histogram(&[0.0, 10.0], 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[4].count, 1);
        assert_eq!(bins[4].end, 10.0);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let values: Vec<f64> = (0..97).map(|i| (i * 37 % 101) as f64).collect();
        let bins = histogram(&values, 30);
        assert_eq!(bins.len(), 30);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 97);
    }

    #[test]
    fn test_groups_share_edges() {
        let groups = vec![
            ("F".to_string(), vec![0.0, 1.0]),
            ("M".to_string(), vec![9.0, 10.0]),
        ];

        let series = histogram_by_group(&groups, 10);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].bins[0].start, series[1].bins[0].start);
        assert_eq!(series[0].bins[9].end, 10.0);
        assert_eq!(series[0].bins[0].count, 1);
        assert_eq!(series[0].bins[1].count, 1);
        assert_eq!(series[1].bins[9].count, 2);
    }

    #[test]
    fn test_groups_with_no_values() {
        let groups: Vec<(String, Vec<f64>)> = vec![];
        assert!(histogram_by_group(&groups, 10).is_empty());
    }
}
