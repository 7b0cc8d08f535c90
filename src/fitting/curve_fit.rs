//! PA characterization curve fitting.
//!
//! Walks fixed-width windows of output power down from [`API_MAX_POWER`],
//! fits an independent line to each window, and converts the fits to the
//! fixed-point segments the firmware lookup table is built from.
use crate::fitting::error::CurveFitError;
use crate::fitting::fitstruct::{CurveSegment, WindowFit};
use crate::fitting::segmenting::fit_window;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

type Result<T> = std::result::Result<T, CurveFitError>;

/// Output power ceiling of the radio API, in dBm.
pub const API_MAX_POWER: f64 = 20.0;
/// Lowest output power the lookup table models, in dBm.
pub const API_MIN_POWER: f64 = -50.0;
/// Default width of one fitted window, in dBm.
pub const DEFAULT_INCREMENT: f64 = 4.0;
/// The firmware table holds at most this many segments.
pub const MAX_CURVE_SEGMENTS: usize = 8;

/// Lower and upper edges of each window to fit, walking downward from
/// [`API_MAX_POWER`] until the table is full or the walk passes
/// [`API_MIN_POWER`].
pub(crate) fn window_bounds(increment: f64) -> Vec<(f64, f64)> {
    let mut bounds = vec![];
    let mut hi = API_MAX_POWER;
    for _ in 0..MAX_CURVE_SEGMENTS {
        bounds.push((hi - increment, hi));
        hi -= increment;
        if hi < API_MIN_POWER {
            break;
        }
    }
    bounds
}

fn check_dimensions(levels: &[f64], outputs: &[f64]) -> Result<()> {
    if levels.len() != outputs.len() {
        Err(CurveFitError::BadFit(format!(
            "Cannot fit power curves - {} power levels for {} output powers",
            levels.len(),
            outputs.len()
        )))?;
    }
    Ok(())
}

/// Fits the characterization data into fixed-point curve segments, one per
/// window, highest power first.
///
/// # Errors
/// Will return `Err` if the power levels and output powers differ in length.
pub fn power_curves(levels: &[f64], outputs: &[f64], increment: f64) -> Result<Vec<CurveSegment>> {
    check_dimensions(levels, outputs)?;
    let fits: Vec<WindowFit> = window_bounds(increment)
        .iter()
        .map(|&(lo, hi)| fit_window(levels, outputs, lo, hi))
        .collect();
    Ok(fits.iter().map(CurveSegment::from).collect())
}

/// Fits the characterization data into fixed-point curve segments, fitting
/// the windows in parallel. Windows carry no cross-window dependency, so the
/// result matches [`power_curves`].
///
/// # Errors
/// Will return `Err` if the power levels and output powers differ in length.
pub fn par_power_curves(
    levels: &[f64],
    outputs: &[f64],
    increment: f64,
) -> Result<Vec<CurveSegment>> {
    check_dimensions(levels, outputs)?;

    // Fit the windows!
    let fits: Vec<WindowFit> = window_bounds(increment)
        .par_iter()
        .map(|&(lo, hi)| fit_window(levels, outputs, lo, hi))
        .collect();
    Ok(fits.iter().map(CurveSegment::from).collect())
}
