//! Non-Compartmental Analysis (NCA) summary statistics
//!
//! This module computes the observed-exposure parameters of a single
//! concentration-time profile. Both computations are one-shot pure functions
//! over parallel `&[f64]` slices: no shared state, no ordering dependency
//! between them, recomputed fresh per column selection.
//!
//! # Parameters
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | AUC | Area under the curve, composite Simpson's rule (irregular spacing supported) |
//! | Cmax | Maximum observed concentration |
//! | Tmax | Time of the first occurrence of Cmax |
//!
//! # Usage
//!
//! ```rust
//! use ncaview::nca::PkSummary;
//!
//! let times = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let concs = [0.0, 2.0, 4.0, 2.0, 0.0];
//!
//! let summary = PkSummary::from_arrays(&times, &concs).unwrap();
//! assert!((summary.auc - 8.0).abs() < 1e-10);
//! assert_eq!(summary.cmax, 4.0);
//! assert_eq!(summary.tmax, 2.0);
//! ```
//!
//! Boundary behavior (empty series, a single observation, unsorted times,
//! NaN values) is pinned down on [`auc::auc_simpson`] and [`cmax_tmax`]
//! rather than left implementation-defined.

pub mod auc;
mod calc;
mod error;
mod profile;
mod summary;

pub use auc::auc_simpson;
pub use calc::cmax_tmax;
pub use error::NcaError;
pub use profile::Profile;
pub use summary::PkSummary;
