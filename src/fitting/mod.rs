pub mod boundaries;
pub mod curve_fit;
pub mod error;
pub mod fitstruct;
pub mod least_squares;
pub mod segmenting;
