//! Errors for the request, export and CLI surfaces
//!
//! Forecast calculations themselves are infallible; invalid numbers produce
//! a degenerate result instead of an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown compounding frequency: {0:?} (expected daily, weekly, monthly or yearly)")]
    InvalidFrequency(String),

    #[error("Invalid start date {0:?}: {1}")]
    InvalidDate(String, chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
