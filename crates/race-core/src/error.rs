// File: crates/race-core/src/error.rs
// Summary: Error taxonomy for standings loading and chart rendering.

use thiserror::Error;

/// Every failure is fatal to the run; there are no recoverable paths.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The input header lacks a required column.
    #[error("input is missing required column '{0}'")]
    MissingColumn(String),

    /// A score cell failed to parse as a number.
    #[error("row {row} ('{team}'): column '{column}' has non-numeric score {value:?}")]
    BadScore {
        row: usize,
        team: String,
        column: String,
        value: String,
    },

    /// The maximum cumulative score is not strictly positive, so the
    /// score-to-pixel division is undefined.
    #[error("cannot scale chart: maximum cumulative score is {0}")]
    DegenerateScale(f64),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
