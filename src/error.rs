use std::io;

use thiserror::Error;

use crate::data::DataError;
use crate::nca::NcaError;
use crate::plot::PlotError;

/// Top-level error for a ncaview session
///
/// Nothing is caught or retried internally; any failure in ingestion, the
/// core computations or rendering propagates here and is shown to the user.
#[derive(Error, Debug)]
pub enum NcaviewError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Nca(#[from] NcaError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
