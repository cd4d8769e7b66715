//! Validated concentration-time profile
//!
//! A [`Profile`] is the analysis-ready view of one column-pair selection:
//! two parallel arrays whose lengths agree and which contain at least one
//! observation. Index order is taken as time order; no sorting is applied.

use super::auc::auc_simpson;
use super::calc::cmax_tmax;
use super::error::NcaError;
use super::summary::PkSummary;

/// A concentration-time profile ready for NCA computation
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    times: Vec<f64>,
    concentrations: Vec<f64>,
}

impl Profile {
    /// Create a profile from parallel time/concentration arrays
    ///
    /// # Errors
    ///
    /// * [`NcaError::LengthMismatch`] if the arrays differ in length
    /// * [`NcaError::InsufficientData`] if the arrays are empty
    pub fn from_arrays(times: &[f64], concentrations: &[f64]) -> Result<Self, NcaError> {
        if times.len() != concentrations.len() {
            return Err(NcaError::LengthMismatch {
                times: times.len(),
                concentrations: concentrations.len(),
            });
        }
        if times.is_empty() {
            return Err(NcaError::InsufficientData { n: 0, required: 1 });
        }

        Ok(Self {
            times: times.to_vec(),
            concentrations: concentrations.to_vec(),
        })
    }

    /// Time points, in the order they were supplied
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Concentration values, parallel to [`times`](Self::times)
    pub fn concentrations(&self) -> &[f64] {
        &self.concentrations
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false: construction rejects empty profiles
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// AUC over the whole profile, composite Simpson's rule
    pub fn auc(&self) -> Result<f64, NcaError> {
        auc_simpson(&self.times, &self.concentrations)
    }

    /// Maximum concentration and its time of occurrence
    pub fn cmax_tmax(&self) -> Result<(f64, f64), NcaError> {
        cmax_tmax(&self.times, &self.concentrations)
    }

    /// Compute the full summary triple (AUC, Cmax, Tmax)
    ///
    /// The two reductions are independent; neither sees the other's result.
    pub fn summary(&self) -> Result<PkSummary, NcaError> {
        let auc = self.auc()?;
        let (cmax, tmax) = self.cmax_tmax()?;
        Ok(PkSummary { auc, cmax, tmax })
    }
}
