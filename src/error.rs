use crate::chardata::CharDataError;
use crate::fitting::error::CurveFitError;
use crate::plot::PlotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacurveError {
    /// Represents a bad characterization data file
    #[error("{0}")]
    CharData(#[from] CharDataError),

    /// Represents a failed curve fit
    #[error("{0}")]
    Fit(#[from] CurveFitError),

    /// Unable to render the fit plot
    #[error("{0}")]
    Plot(#[from] PlotError),
}
