use thiserror::Error;

/// Enum of the possible error variants that may be encountered
#[derive(Error, Debug)]
pub enum CurveFitError {
    /// Represents a bad fit of the characterization data, for any reason
    #[error("{0}")]
    BadFit(String),
}
