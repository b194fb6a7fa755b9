//! Errors shared by the hybridization data model and the predictor core.

use std::fmt;

#[derive(Debug)]
pub enum CoreError {
    /// Output constraint combination the predictor cannot enumerate
    /// (multi-report requested without `ReportOverlap::OverlapBoth`).
    UnsupportedConstraint(String),
    /// An `IndexRange` was not ascending.
    BadRange(String),
    /// Debug-only: an index handed to the oracle was out of bounds.
    OracleRange(String),
    /// Debug-only: traceback received a malformed interaction.
    InvalidInteraction(String),
    /// A `SeedConstraint` was constructed with fewer than 2 base pairs.
    InvalidSeedConstraint(usize),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnsupportedConstraint(s) => {
                write!(f, "unsupported output constraint: {}", s)
            }
            CoreError::BadRange(s) => write!(f, "index range is not ascending: {}", s),
            CoreError::OracleRange(s) => write!(f, "oracle index out of range: {}", s),
            CoreError::InvalidInteraction(s) => write!(f, "invalid interaction: {}", s),
            CoreError::InvalidSeedConstraint(bp) => {
                write!(f, "seed constraint base pair number ({}) < 2", bp)
            }
        }
    }
}

impl std::error::Error for CoreError {}
