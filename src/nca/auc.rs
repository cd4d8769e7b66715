//! Pure AUC (Area Under the Curve) calculation primitives
//!
//! This module provides the standalone quadrature used to estimate total drug
//! exposure from a concentration-time profile. It operates on raw `&[f64]`
//! slices and is the building block used by [`Profile`](crate::nca::Profile)
//! and [`PkSummary`](crate::nca::PkSummary).
//!
//! # Design
//!
//! The function here is **pure math** — no dependency on data structures and
//! no I/O. It accepts raw slices and returns `f64`.
//!
//! # Quadrature scheme
//!
//! Composite Simpson's rule over irregular abscissas: adjacent intervals are
//! paired from the left, and each pair is integrated with the quadratic
//! through its three points. For pair widths `h0 = t1 - t0` and
//! `h1 = t2 - t1` the contribution is
//!
//! ```text
//! (h0 + h1) / 6 * [ (2 - h1/h0)·c0 + (h0 + h1)²/(h0·h1)·c1 + (2 - h0/h1)·c2 ]
//! ```
//!
//! which reduces to the classic `h/3 · (c0 + 4·c1 + c2)` when `h0 == h1`.
//!
//! When the number of intervals is odd the final interval has no partner and
//! is integrated with the linear trapezoidal rule. This correction is the one
//! place where otherwise-equivalent Simpson implementations diverge, so it is
//! pinned here and asserted by the tests.
//!
//! # Example
//!
//! ```rust
//! use ncaview::nca::auc::auc_simpson;
//!
//! let times = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let concs = [0.0, 2.0, 4.0, 2.0, 0.0];
//!
//! let auc = auc_simpson(&times, &concs).unwrap();
//! assert!((auc - 8.0).abs() < 1e-10);
//! ```

use super::error::NcaError;

// ============================================================================
// Segment-level helpers (private)
// ============================================================================

/// Linear trapezoidal AUC for a single segment
#[inline]
fn trapezoid(c1: f64, c2: f64, dt: f64) -> f64 {
    (c1 + c2) / 2.0 * dt
}

/// Simpson contribution of one interval pair with possibly unequal widths
///
/// Integrates the unique quadratic through `(t0, c0)`, `(t1, c1)`, `(t2, c2)`.
#[inline]
fn simpson_pair(t0: f64, c0: f64, t1: f64, c1: f64, t2: f64, c2: f64) -> f64 {
    let h0 = t1 - t0;
    let h1 = t2 - t1;
    let h = h0 + h1;
    h / 6.0 * ((2.0 - h1 / h0) * c0 + h * h / (h0 * h1) * c1 + (2.0 - h0 / h1) * c2)
}

// ============================================================================
// Public API
// ============================================================================

/// Estimate AUC over a full profile using composite Simpson's rule
///
/// Computes ∫ C(t) dt from the first to the last time point. Time spacing may
/// be irregular; no fixed step size is assumed. Index order is taken as time
/// order — no sorting is performed.
///
/// # Pinned behavior
///
/// * Fewer than two observations (including an empty slice): returns `0.0` —
///   there is no interval to integrate.
/// * Any interval with non-positive width (reversed or duplicate timestamps):
///   returns [`NcaError::InvalidTimeSequence`].
/// * Odd interval count: Simpson pairs are consumed left to right and the
///   final unpaired interval is integrated with the trapezoidal rule.
/// * Non-finite values are not filtered; a NaN time or concentration
///   propagates into the returned sum. (A NaN time also defeats the ordering
///   check, since no comparison against NaN holds.)
///
/// # Panics
///
/// Panics if `times.len() != concentrations.len()`.
///
/// # Example
///
/// ```rust
/// use ncaview::nca::auc::auc_simpson;
///
/// // Odd interval count: Simpson on [0, 1, 3], trapezoid on [3, 4]
/// let times = [0.0, 1.0, 3.0, 4.0];
/// let concs = [0.0, 2.0, 1.0, 0.0];
/// let auc = auc_simpson(&times, &concs).unwrap();
/// assert!((auc - 5.75).abs() < 1e-10);
/// ```
pub fn auc_simpson(times: &[f64], concentrations: &[f64]) -> Result<f64, NcaError> {
    assert_eq!(
        times.len(),
        concentrations.len(),
        "times and concentrations must have equal length"
    );

    if times.len() < 2 {
        return Ok(0.0);
    }

    for i in 1..times.len() {
        if times[i] - times[i - 1] <= 0.0 {
            return Err(NcaError::InvalidTimeSequence);
        }
    }

    let mut total = 0.0;
    let mut i = 0;
    while i + 2 < times.len() {
        total += simpson_pair(
            times[i],
            concentrations[i],
            times[i + 1],
            concentrations[i + 1],
            times[i + 2],
            concentrations[i + 2],
        );
        i += 2;
    }

    // Odd interval count leaves one unpaired interval at the end
    if i + 1 < times.len() {
        total += trapezoid(
            concentrations[i],
            concentrations[i + 1],
            times[i + 1] - times[i],
        );
    }

    Ok(total)
}

// ============================================================================
// Tests
// ============================================================================
