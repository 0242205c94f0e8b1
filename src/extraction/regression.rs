//! Ordinary least-squares line estimation.
//!
//! Minimizes vertical residuals, so the result is a `y = slope*x + intercept`
//! line. Groups that line up vertically (all points sharing one x) have no
//! such representation and are reported as degenerate.

use crate::core::{Line, ScanPoint};

use super::error::TrialFailure;

/// Fit a least-squares line through `points`.
///
/// Sums are accumulated in `f64` and only the final slope and intercept are
/// narrowed to `f32`.
///
/// Returns:
/// - [`TrialFailure::InsufficientPoints`] for fewer than 2 points
/// - [`TrialFailure::DegenerateFit`] if `n*Σx² - (Σx)²` is exactly zero, or if
///   the narrowed result is not finite
///
/// # Example
/// ```
/// use rekha::core::ScanPoint;
/// use rekha::extraction::fit_regression_line;
///
/// let points = [
///     ScanPoint::new(0.0, 3.0, 0.0),
///     ScanPoint::new(1.0, 5.0, 0.1),
///     ScanPoint::new(2.0, 7.0, 0.2),
/// ];
/// let line = fit_regression_line(&points).unwrap();
/// assert!((line.slope - 2.0).abs() < 1e-4);
/// assert!((line.intercept - 3.0).abs() < 1e-4);
/// ```
pub fn fit_regression_line(points: &[ScanPoint]) -> Result<Line, TrialFailure> {
    if points.len() < 2 {
        return Err(TrialFailure::InsufficientPoints {
            found: points.len(),
        });
    }

    let n = points.len() as f64;
    let mut x_sum = 0.0_f64;
    let mut y_sum = 0.0_f64;
    let mut x2_sum = 0.0_f64;
    let mut xy_sum = 0.0_f64;

    for p in points {
        let x = f64::from(p.x);
        let y = f64::from(p.y);
        x_sum += x;
        y_sum += y;
        x2_sum += x * x;
        xy_sum += x * y;
    }

    let denom = n * x2_sum - x_sum * x_sum;
    if denom == 0.0 {
        return Err(TrialFailure::DegenerateFit);
    }

    let slope = ((n * xy_sum - x_sum * y_sum) / denom) as f32;
    let intercept = ((y_sum * x2_sum - x_sum * xy_sum) / denom) as f32;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(TrialFailure::DegenerateFit);
    }

    Ok(Line::new(slope, intercept))
}
