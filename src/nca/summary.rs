//! The NCA summary triple and its report formatting

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::NcaError;
use super::{auc_simpson, cmax_tmax};

/// Summary statistics for one concentration-time profile
///
/// Immutable once computed; a new selection or upload produces a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PkSummary {
    /// Area under the concentration-time curve (composite Simpson's rule)
    pub auc: f64,
    /// Maximum observed concentration
    pub cmax: f64,
    /// Time of the first occurrence of Cmax
    pub tmax: f64,
}

impl PkSummary {
    /// Compute the summary directly from parallel slices
    ///
    /// Invokes the AUC estimator and the peak finder independently on the
    /// same inputs; there is no ordering dependency between the two.
    pub fn from_arrays(times: &[f64], concentrations: &[f64]) -> Result<Self, NcaError> {
        if times.len() != concentrations.len() {
            return Err(NcaError::LengthMismatch {
                times: times.len(),
                concentrations: concentrations.len(),
            });
        }
        let auc = auc_simpson(times, concentrations)?;
        let (cmax, tmax) = cmax_tmax(times, concentrations)?;
        Ok(Self { auc, cmax, tmax })
    }

    /// Serialize the summary to a JSON object
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  AUC (area under the curve):   {:.2}", self.auc)?;
        writeln!(f, "  Cmax (maximum concentration): {:.2}", self.cmax)?;
        write!(f, "  Tmax (time of Cmax):          {:.2}", self.tmax)
    }
}
