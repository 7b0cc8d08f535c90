//! Window selection and per-window fitting of the characterization data.
use crate::fitting::fitstruct::{FittedLine, WindowFit};
use crate::fitting::least_squares::two_parameter_line_fit;
use std::iter::zip;

// Trackers for the extreme power levels selected into a window. A window that
// selects nothing keeps both, and the max sentinel survives into the emitted
// segment.
pub(crate) const MIN_LEVEL_SENTINEL: f64 = 10_000.0;
pub(crate) const MAX_LEVEL_SENTINEL: f64 = -1.0;

/// Selects the samples whose measured output falls within `[lo - 1, hi]`.
/// The lower edge is widened by 1 dBm so samples just under the window still
/// anchor its fit.
pub(crate) fn window_samples(
    levels: &[f64],
    outputs: &[f64],
    lo: f64,
    hi: f64,
) -> (Vec<f64>, Vec<f64>) {
    let mut window_levels = vec![];
    let mut window_outputs = vec![];
    for (level, output) in zip(levels, outputs) {
        if (lo - 1.0) <= *output && *output <= hi {
            window_levels.push(*level);
            window_outputs.push(*output);
        }
    }
    (window_levels, window_outputs)
}

/// Fits one window `[lo, hi]` of output power.
///
/// The fit maps output power back to the power-level setting, so the measured
/// outputs are the independent variable. `min_level` only tracks samples at
/// or above `lo`: the widened-fencepost samples anchor the fit but not the
/// window minimum. An empty window degrades to the zero line.
pub fn fit_window(levels: &[f64], outputs: &[f64], lo: f64, hi: f64) -> WindowFit {
    let mut min_level = MIN_LEVEL_SENTINEL;
    let mut max_level = MAX_LEVEL_SENTINEL;
    let (window_levels, window_outputs) = window_samples(levels, outputs, lo, hi);

    for (level, output) in zip(levels, outputs) {
        if (lo - 1.0) <= *output && *output <= hi {
            if *output >= lo && *level < min_level {
                min_level = *level;
            }
            if *output <= hi && *level > max_level {
                max_level = *level;
            }
        }
    }

    let line = if window_outputs.is_empty() {
        FittedLine::default()
    } else {
        let lsq = two_parameter_line_fit(&window_outputs, &window_levels);
        FittedLine {
            slope: lsq.slope,
            intercept: lsq.intercept,
        }
    };
    WindowFit {
        min_level,
        max_level,
        line,
    }
}
