//! Chart rendering for concentration-time data
//!
//! Renders the two standard views of a selected [`Series`](crate::data::Series)
//! as PNG files via the `plotters` bitmap backend:
//!
//! | Chart | Function |
//! |-------|----------|
//! | Line chart with markers | [`plot_concentration_time`] |
//! | Filled area under the curve | [`plot_auc_area`] |
//!
//! The plot layer consumes the same two numeric sequences the NCA core was
//! given; it performs no resampling or smoothing.
//!
//! ```rust,ignore
//! use ncaview::plot::{plot_auc_area, plot_concentration_time, PlotConfig};
//!
//! plot_concentration_time(&series, "concentration_time.png", None)?;
//!
//! let mut config = PlotConfig::auc_area();
//! config.title = "Drug X exposure".to_string();
//! plot_auc_area(&series, "auc_area.png", Some(&config))?;
//! ```

pub mod charts;
pub mod config;

pub use charts::{plot_auc_area, plot_concentration_time, PlotError};
pub use config::PlotConfig;
