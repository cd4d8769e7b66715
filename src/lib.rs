//! ncaview: single-session non-compartmental analysis of pharmacokinetic data
//!
//! Ingests a time/concentration CSV, computes the two standard NCA summary
//! statistics — AUC (composite Simpson's rule over possibly irregular time
//! points) and Cmax with its time of occurrence — and renders the profile as
//! a line chart and a filled-area chart.
//!
//! # Structure
//!
//! - [`data`]: CSV ingestion into a [`Table`](data::Table), column selection
//!   into a [`Series`](data::Series)
//! - [`nca`]: the pure computational core ([`auc_simpson`](nca::auc_simpson),
//!   [`cmax_tmax`](nca::cmax_tmax), [`PkSummary`](nca::PkSummary))
//! - [`plot`]: PNG chart rendering of the selected series
//! - [`session`]: the interactive prompt loop used by the `ncaview` binary
//!
//! # Example
//!
//! ```rust
//! use ncaview::prelude::*;
//!
//! let times = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let concs = [0.0, 2.0, 4.0, 2.0, 0.0];
//!
//! let summary = PkSummary::from_arrays(&times, &concs).unwrap();
//! assert!((summary.auc - 8.0).abs() < 1e-10);
//! assert_eq!((summary.cmax, summary.tmax), (4.0, 2.0));
//! ```

pub mod data;
pub mod error;
pub mod nca;
pub mod plot;
pub mod session;

pub use error::NcaviewError;

pub mod prelude {
    pub use crate::data::{read_csv, DataError, Series, Table};
    pub use crate::nca::{auc_simpson, cmax_tmax, NcaError, PkSummary, Profile};
    pub use crate::plot::{plot_auc_area, plot_concentration_time, PlotConfig, PlotError};
    pub use crate::NcaviewError;
}
