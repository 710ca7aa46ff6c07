//! Constant loss-rate (phi-index) excess rainfall.
//!
//! Every pulse loses the same depth `phi`; the excess of a pulse is
//! `max(pulse - phi, 0)`. A `phi` at or above the peak intensity removes all
//! rainfall, which is reported through [`ExcessWarning::PhiExceedsPeakIntensity`].
use log::warn;

use crate::hydrology::{
    core::{
        graphs::Hyetograph,
        validation::{validate_phi, validate_series},
    },
    errors::RunoffResult,
    excess::{ExcessOutcome, ExcessRainfallMethod, ExcessWarning, build_excess},
};

/// Phi-index loss model.
///
/// Invariant: `phi` is finite and `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhiIndex {
    phi: f64,
}

impl PhiIndex {
    /// # Errors
    /// - [`RunoffError::InvalidPhi`](crate::hydrology::errors::RunoffError::InvalidPhi)
    ///   if `phi` is negative or non-finite.
    pub fn new(phi: f64) -> RunoffResult<Self> {
        validate_phi(phi)?;
        Ok(PhiIndex { phi })
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }
}

impl ExcessRainfallMethod for PhiIndex {
    fn extract(&self, gross: &Hyetograph) -> RunoffResult<ExcessOutcome> {
        let pulses = gross.time_series().as_slice();
        validate_series(pulses)?;

        let peak = gross.peak_intensity();
        let warning = if self.phi >= peak {
            let warning = ExcessWarning::PhiExceedsPeakIntensity { phi: self.phi, peak };
            warn!("{}: {warning}", gross.name());
            Some(warning)
        } else {
            None
        };

        let increments: Vec<f64> = pulses.iter().map(|&p| (p - self.phi).max(0.0)).collect();
        let name = format!("{} (excess, phi = {})", gross.name(), self.phi);
        let excess = build_excess(gross, &increments, name)?;

        Ok(ExcessOutcome::new(excess, warning))
    }

    fn describe(&self) -> String {
        format!("constant loss rate (phi = {})", self.phi)
    }
}
