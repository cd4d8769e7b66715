//! NCA error types

use thiserror::Error;

/// Errors that can occur during NCA computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NcaError {
    /// Not enough observations for the requested computation
    #[error("Insufficient data: {n} observations, at least {required} required")]
    InsufficientData { n: usize, required: usize },

    /// Time values are not strictly ascending (reversed or duplicate timestamps)
    #[error("Invalid time sequence: times must be strictly ascending")]
    InvalidTimeSequence,

    /// Parallel arrays have different lengths
    #[error("Array length mismatch: {times} time points vs {concentrations} concentrations")]
    LengthMismatch { times: usize, concentrations: usize },

    /// No concentration in the series ever compares greater than negative
    /// infinity (e.g. every value is NaN), so no maximum exists
    #[error("No finite concentration values in the series")]
    NoFiniteObservations,
}
