//! hydrology::excess: excess-rainfall extraction strategies.
//!
//! Purpose
//! -------
//! Separate the runoff-producing part of a gross rainfall hyetograph from
//! the part lost to interception, depression storage, and infiltration.
//! Two interchangeable strategies are provided behind the
//! [`ExcessRainfallMethod`] trait:
//!
//! - [`CurveNumber`]: SCS curve-number method (initial abstraction up to a
//!   cap, then continuous abstraction proportional to remaining storage).
//! - [`PhiIndex`]: constant loss rate subtracted from every pulse.
//!
//! Key behaviors
//! -------------
//! - Both strategies are pure `Hyetograph → ExcessOutcome` transforms that
//!   keep the input's time step and label and name the result after the
//!   source and the parameter.
//! - Leading and trailing zero pulses are trimmed from the excess series;
//!   interior zeros are kept so the time alignment of later pulses is
//!   preserved.
//! - When nothing is left after trimming, the outcome holds no hyetograph.
//!   That is a valid result, not an error.
//! - A phi index at or above the peak intensity is reported as an
//!   [`ExcessWarning`] (also logged at `warn`), never as an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - Method parameters are validated when the strategy is built (or when a
//!   free function such as [`excess_rainfall_cn`] is called), before any
//!   computation.
//! - Gross hyetographs are validated again at `extract` time: at least one
//!   finite sample.
//!
//! Downstream usage
//! ----------------
//! - Pick a strategy, call `extract(&gross)?`, and feed
//!   `outcome.excess()` into `hydrology::convolution::convolve` together
//!   with a unit hydrograph, or use `hydrology::pipeline::simulate_runoff`.
//!
//! Testing notes
//! -------------
//! - Each strategy module tests its formula on hand-computed series, the
//!   parameter bounds, and the trimming rule; this module tests trimming and
//!   the outcome accessors directly.

pub mod curve_number;
pub mod phi_index;

use std::fmt;

use ndarray::Array1;

use crate::hydrology::{core::graphs::Hyetograph, errors::RunoffResult};

pub use self::curve_number::CurveNumber;
pub use self::phi_index::PhiIndex;

/// A loss model turning gross rainfall into excess rainfall.
pub trait ExcessRainfallMethod {
    /// Extract the excess hyetograph from `gross`.
    ///
    /// Errors
    /// ------
    /// - `RunoffError::EmptySeries` / `NonFiniteData` when `gross` violates
    ///   the series invariants.
    fn extract(&self, gross: &Hyetograph) -> RunoffResult<ExcessOutcome>;

    /// Short human-readable description including the parameter value.
    fn describe(&self) -> String;
}

/// Non-fatal conditions raised during extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExcessWarning {
    /// The constant loss rate removes every pulse.
    PhiExceedsPeakIntensity { phi: f64, peak: f64 },
}

impl fmt::Display for ExcessWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcessWarning::PhiExceedsPeakIntensity { phi, peak } => {
                write!(
                    f,
                    "Hyetograph has no excess rainfall: phi ({phi}) is not below the peak intensity ({peak})."
                )
            }
        }
    }
}

/// `ExcessOutcome`: result of an extraction.
///
/// Fields
/// ------
/// - `excess`: `Option<Hyetograph>`
///   Trimmed excess rainfall; `None` when no pulse produces runoff.
/// - `warning`: `Option<ExcessWarning>`
///   Non-fatal condition the caller may inspect or ignore.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcessOutcome {
    excess: Option<Hyetograph>,
    warning: Option<ExcessWarning>,
}

impl ExcessOutcome {
    pub fn new(excess: Option<Hyetograph>, warning: Option<ExcessWarning>) -> ExcessOutcome {
        ExcessOutcome { excess, warning }
    }

    pub fn excess(&self) -> Option<&Hyetograph> {
        self.excess.as_ref()
    }

    pub fn into_excess(self) -> Option<Hyetograph> {
        self.excess
    }

    /// Excess pulses; empty when there is no excess.
    pub fn pulses(&self) -> &[f64] {
        match &self.excess {
            Some(hyetograph) => hyetograph.time_series().as_slice(),
            None => &[],
        }
    }

    pub fn total_excess(&self) -> f64 {
        self.excess.as_ref().map_or(0.0, Hyetograph::total_rainfall)
    }

    pub fn is_empty(&self) -> bool {
        self.excess.is_none()
    }

    pub fn warning(&self) -> Option<&ExcessWarning> {
        self.warning.as_ref()
    }
}

/// Extract excess rainfall with the SCS curve-number method and default constants.
///
/// Errors
/// ------
/// - `RunoffError::InvalidCurveNumber` unless `0 < curve_number <= 100`.
pub fn excess_rainfall_cn(gross: &Hyetograph, curve_number: f64) -> RunoffResult<ExcessOutcome> {
    CurveNumber::new(curve_number)?.extract(gross)
}

/// Extract excess rainfall with a constant loss rate.
///
/// Errors
/// ------
/// - `RunoffError::InvalidPhi` when `phi` is negative or non-finite.
pub fn excess_rainfall_phi(gross: &Hyetograph, phi: f64) -> RunoffResult<ExcessOutcome> {
    PhiIndex::new(phi)?.extract(gross)
}

/// Drop leading and trailing exact zeros.
pub(crate) fn trim_zeros(pulses: &[f64]) -> &[f64] {
    let Some(first) = pulses.iter().position(|&p| p != 0.0) else {
        return &[];
    };
    let last = pulses.iter().rposition(|&p| p != 0.0).unwrap_or(first);
    &pulses[first..=last]
}

/// Trim `pulses` and wrap them in a hyetograph on the time base of `source`.
pub(crate) fn build_excess(
    source: &Hyetograph, pulses: &[f64], name: String,
) -> RunoffResult<Option<Hyetograph>> {
    let trimmed = trim_zeros(pulses);
    if trimmed.is_empty() {
        return Ok(None);
    }
    let series = source.time_series().with_data(Array1::from(trimmed.to_vec()))?;
    Ok(Some(Hyetograph::new(name, series)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrology::core::series::TimeSeries;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Two-sided zero trimming.
    // - `build_excess` keeping the source time base.
    // - `ExcessOutcome` accessors for empty and non-empty outcomes.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that only leading and trailing zeros are removed.
    //
    // Given
    // -----
    // - `[0, 0, 3, 0, 2, 0]`, `[0, 0]`, `[1]`.
    //
    // Expect
    // ------
    // - `[3, 0, 2]`, `[]`, `[1]`.
    fn trim_zeros_keeps_interior_zeros() {
        assert_eq!(trim_zeros(&[0.0, 0.0, 3.0, 0.0, 2.0, 0.0]), &[3.0, 0.0, 2.0]);
        assert!(trim_zeros(&[0.0, 0.0]).is_empty());
        assert!(trim_zeros(&[]).is_empty());
        assert_eq!(trim_zeros(&[1.0]), &[1.0]);
    }

    #[test]
    // Purpose
    // -------
    // Check that `build_excess` keeps step and label, or yields `None`.
    //
    // Given
    // -----
    // - A source at step 4.0 labelled "mm".
    //
    // Expect
    // ------
    // - `[0, 5, 0]` becomes `[5]` at step 4.0 with label "mm".
    // - `[0, 0]` becomes `None`.
    fn build_excess_keeps_time_base_or_returns_none() {
        let source = Hyetograph::new(
            "storm",
            TimeSeries::from_vec(4.0, vec![1.0, 6.0, 1.0], Some("mm".into())).unwrap(),
        );

        let excess = build_excess(&source, &[0.0, 5.0, 0.0], "excess".into()).unwrap().unwrap();
        assert_eq!(excess.time_series().as_slice(), &[5.0]);
        assert_eq!(excess.delta_time(), 4.0);
        assert_eq!(excess.time_series().label(), Some("mm"));

        assert!(build_excess(&source, &[0.0, 0.0], "none".into()).unwrap().is_none());
    }

    #[test]
    // Purpose
    // -------
    // Verify the accessors of an empty outcome.
    //
    // Given
    // -----
    // - `ExcessOutcome::new(None, Some(warning))`.
    //
    // Expect
    // ------
    // - No pulses, zero total, warning available and formatted with phi.
    fn excess_outcome_empty_accessors() {
        let warning = ExcessWarning::PhiExceedsPeakIntensity { phi: 30.0, peak: 20.0 };
        let outcome = ExcessOutcome::new(None, Some(warning));

        assert!(outcome.is_empty());
        assert!(outcome.pulses().is_empty());
        assert_eq!(outcome.total_excess(), 0.0);
        assert_eq!(outcome.warning(), Some(&warning));
        assert!(warning.to_string().contains("30"));
        assert!(outcome.into_excess().is_none());
    }
}
