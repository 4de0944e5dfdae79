//! Ordinary least squares trendline.

use serde::{Deserialize, Serialize};

/// A fitted straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    /// Change in y per unit of x.
    pub slope: f64,
    /// Value of y at x = 0.
    pub intercept: f64,
    /// Coefficient of determination of the fit.
    pub r_squared: f64,
    /// Smallest x in the fitted data.
    pub x_min: f64,
    /// Largest x in the fitted data.
    pub x_max: f64,
    /// Number of points fitted.
    pub count: usize,
}

impl Trendline {
    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits an ordinary least squares line through `(x, y)` points.
///
/// Returns `None` with fewer than two points or when every x is equal.
/// When every y is equal the fit is exact and `r_squared` is 1.
///
/// # Examples
///
/// ```
/// use hr_dashboard::aggregation::ordinary_least_squares;
///
/// let line = ordinary_least_squares(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
/// assert!((line.slope - 2.0).abs() < 1e-12);
/// assert!((line.intercept - 1.0).abs() < 1e-12);
/// assert!((line.r_squared - 1.0).abs() < 1e-12);
/// ```
pub fn ordinary_least_squares(points: &[(f64, f64)]) -> Option<Trendline> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let r_squared = if syy == 0.0 {
        1.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    let x_min = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|(x, _)| *x).fold(f64::NEG_INFINITY, f64::max);

    Some(Trendline {
        slope,
        intercept,
        r_squared,
        x_min,
        x_max,
        count: points.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_points() {
        assert!(ordinary_least_squares(&[]).is_none());
        assert!(ordinary_least_squares(&[(1.0, 2.0)]).is_none());
    }

    #[test]
    fn test_vertical_points_have_no_fit() {
        assert!(ordinary_least_squares(&[(3.0, 1.0), (3.0, 5.0)]).is_none());
    }

    #[test]
    fn test_flat_line() {
        let line = ordinary_least_squares(&[(1.0, 4.0), (2.0, 4.0), (5.0, 4.0)]).unwrap();
        assert_eq!(line.slope, 0.0);
        assert_eq!(line.intercept, 4.0);
        assert_eq!(line.r_squared, 1.0);
        assert_eq!(line.x_min, 1.0);
        assert_eq!(line.x_max, 5.0);
    }

    #[test]
    fn test_noisy_fit() {
        let points = [(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)];
        let line = ordinary_least_squares(&points).unwrap();

        // mean_x = 3, mean_y = 4, sxy = 6, sxx = 10, syy = 6
        assert!((line.slope - 0.6).abs() < 1e-12);
        assert!((line.intercept - 2.2).abs() < 1e-12);
        assert!((line.r_squared - 0.6).abs() < 1e-12);
        assert!((line.predict(10.0) - 8.2).abs() < 1e-12);
        assert_eq!(line.count, 5);
    }
}
