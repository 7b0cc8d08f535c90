//! Unweighted least-squares fitting of a first-degree polynomial.
use std::iter::zip;

#[derive(Default)]
pub struct LeastSquaresValues {
    pub sum: f64,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xx: f64,
    pub sum_xy: f64,
    pub delta: f64,
    pub intercept: f64,
    pub slope: f64,
}

/// Fits `y = slope * x + intercept` through the given points.
///
/// With fewer than two distinct points `delta` is 0 and the slope and
/// intercept come out non-finite; callers decide what a degenerate fit means
/// for them.
pub fn two_parameter_line_fit(x_vals: &[f64], y_vals: &[f64]) -> LeastSquaresValues {
    let mut lsq: LeastSquaresValues = Default::default();
    find_sums(&mut lsq, x_vals, y_vals);

    lsq.delta = lsq.sum * lsq.sum_xx - lsq.sum_x * lsq.sum_x;
    lsq.intercept = (lsq.sum_xx * lsq.sum_y - lsq.sum_x * lsq.sum_xy) / lsq.delta;
    lsq.slope = (lsq.sum * lsq.sum_xy - lsq.sum_x * lsq.sum_y) / lsq.delta;
    lsq
}

fn find_sums(least_squares: &mut LeastSquaresValues, x_vals: &[f64], y_vals: &[f64]) {
    least_squares.sum = x_vals.len() as f64;
    for (x, y) in zip(x_vals, y_vals) {
        least_squares.sum_x += x;
        least_squares.sum_y += y;
        least_squares.sum_xx += x * x;
        least_squares.sum_xy += x * y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn exact_line_through_two_points() {
        let lsq = two_parameter_line_fit(&[20.0, 16.0], &[100.0, 96.0]);
        assert!(is_close!(lsq.slope, 1.0));
        assert!(is_close!(lsq.intercept, 80.0));
    }

    #[test]
    fn three_point_regression() {
        let lsq = two_parameter_line_fit(&[16.0, 12.0, 11.0], &[96.0, 91.0, 85.0]);
        assert!(is_close!(lsq.slope, 81.0 / 42.0));
        assert!(is_close!(lsq.intercept, 2755.0 / 42.0));
    }

    #[test]
    fn single_point_is_degenerate() {
        let lsq = two_parameter_line_fit(&[8.0], &[88.0]);
        assert_eq!(lsq.delta, 0.0);
        assert!(!lsq.slope.is_finite());
        assert!(!lsq.intercept.is_finite());
    }
}
