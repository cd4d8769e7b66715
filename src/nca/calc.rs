//! Pure calculation functions for the observed-exposure parameters
//!
//! Stateless functions that compute Cmax/Tmax from raw slices. Like the
//! quadrature in [`auc`](super::auc), these take the session state as explicit
//! parameters and have no side effects.

use super::error::NcaError;

/// Find the maximum observed concentration and the time of its occurrence
///
/// Returns `(cmax, tmax)` where `cmax = max(concentrations)` and `tmax` is the
/// time at the *first* index achieving that maximum (ties resolve to the
/// earliest time). Ordering of `times` is irrelevant to the search; index
/// order is trusted as given.
///
/// NaN concentrations never compare greater than the running maximum, so a
/// NaN can never be Cmax. If no value compares greater than negative infinity
/// (e.g. the series is all NaN), [`NcaError::NoFiniteObservations`] is
/// returned.
///
/// # Errors
///
/// * [`NcaError::InsufficientData`] for an empty series — a maximum over
///   nothing is undefined.
/// * [`NcaError::NoFiniteObservations`] when every value is NaN.
///
/// # Panics
///
/// Panics if `times.len() != concentrations.len()`.
pub fn cmax_tmax(times: &[f64], concentrations: &[f64]) -> Result<(f64, f64), NcaError> {
    assert_eq!(
        times.len(),
        concentrations.len(),
        "times and concentrations must have equal length"
    );

    if concentrations.is_empty() {
        return Err(NcaError::InsufficientData { n: 0, required: 1 });
    }

    let mut max_idx = None;
    let mut max_val = f64::NEG_INFINITY;
    for (i, &c) in concentrations.iter().enumerate() {
        // Strict comparison keeps the first occurrence on ties
        if c > max_val {
            max_idx = Some(i);
            max_val = c;
        }
    }

    match max_idx {
        Some(idx) => Ok((max_val, times[idx])),
        None => Err(NcaError::NoFiniteObservations),
    }
}
