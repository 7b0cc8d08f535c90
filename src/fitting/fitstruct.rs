/// Coefficients of a first-degree polynomial mapping measured output power in
/// dBm back to the power-level setting that produces it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FittedLine {
    pub slope: f64,
    pub intercept: f64,
}

/// Result of fitting one window of the characterization data.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowFit {
    pub min_level: f64, // lowest power-level setting selected into the window
    pub max_level: f64, // highest power-level setting selected into the window
    pub line: FittedLine,
}

/// One linear piece of the firmware lookup table, in the fixed-point encoding
/// the power curve header expects: the slope is scaled x100 and the intercept
/// x1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveSegment {
    pub max_value: i32, // highest power level this segment applies to
    pub slope: i32,
    pub intercept: i32,
}

impl From<&WindowFit> for CurveSegment {
    fn from(window: &WindowFit) -> CurveSegment {
        CurveSegment {
            max_value: window.max_level as i32,
            slope: (window.line.slope * 100.0) as i32,
            intercept: (window.line.intercept * 1000.0) as i32,
        }
    }
}
