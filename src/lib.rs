//! Fits PA characterization measurements into the piecewise-linear,
//! fixed-point power curve table embedded in radio firmware.
//!
//! The pipeline loads a characterization csv (power-level setting per row,
//! repeated dBm samples per column), averages and normalizes it against the
//! API output ceiling, least-squares fits a line to each fixed-width window
//! of output power, pulls the segment boundaries onto the true intersections
//! of adjacent lines, and renders the result as a C array literal.
use crate::error::PacurveError;
use crate::fitting::boundaries::adjust_max_values;
use crate::fitting::curve_fit::power_curves;
use crate::fitting::fitstruct::CurveSegment;
use std::path::Path;

pub mod chardata;
pub mod error;
pub mod fitting;
pub mod formats;
pub mod plot;

/// Fits a characterization csv file into the boundary-adjusted curve
/// segments, ready for rendering with
/// [`formats::curve_segments_string`].
///
/// # Errors
/// Will return `Err` if the file cannot be read or parsed, or if the data
/// within is unsuitable for fitting.
pub fn fit_char_file<P: AsRef<Path>>(
    infile: P,
    increment: f64,
) -> Result<Vec<CurveSegment>, PacurveError> {
    let data = chardata::read_char_data(infile)?;
    let mut segments = power_curves(&data.power_levels, &data.output_powers, increment)?;
    adjust_max_values(&mut segments);
    Ok(segments)
}
