//! Errors for the runoff stack (series validation, extraction parameters,
//! and convolution preconditions).
//!
//! This module defines [`RunoffError`], the single error type used by the
//! data model, both excess-rainfall strategies, and the convolution engine.
//! It implements `Display`/`Error` and, with the `python-bindings` feature,
//! converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Time steps must be **strictly positive and finite**.
//! - Every variant is a fail-fast precondition violation; nothing in the
//!   runoff stack retries or recovers. The only non-fatal condition (phi
//!   above the peak intensity) is reported as an
//!   [`ExcessWarning`](crate::hydrology::excess::ExcessWarning), not here.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for runoff operations that may produce [`RunoffError`].
pub type RunoffResult<T> = Result<T, RunoffError>;

/// Unified error type for runoff modeling.
///
/// Covers time-series construction, extraction-method parameters, and the
/// preconditions of unit-hydrograph convolution.
#[derive(Debug, Clone, PartialEq)]
pub enum RunoffError {
    // ---- Series construction ----
    /// Series is empty.
    EmptySeries,

    /// Series data is not one-dimensional.
    DimensionMismatch { ndim: usize },

    /// A data point is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    /// Time step must be finite and > 0.
    InvalidDeltaTime { value: f64 },

    // ---- Extraction parameters ----
    /// Curve number must lie in (0, 100].
    InvalidCurveNumber { value: f64 },

    /// Phi index must be finite and >= 0.
    InvalidPhi { value: f64 },

    /// SCS constants must be physically meaningful.
    InvalidCurveNumberOptions { param: f64, reason: &'static str },

    // ---- Graph / convolution invariants ----
    /// Two series that must share a time step do not.
    TimeStepMismatch { expected: f64, actual: f64 },

    /// The hydrograph passed as a unit hydrograph is not the response to `[1]`.
    NotUnitHydrograph { name: String, impulse_len: usize },
}

impl std::error::Error for RunoffError {}

impl std::fmt::Display for RunoffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Series construction ----
            RunoffError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            RunoffError::DimensionMismatch { ndim } => {
                write!(f, "Series data must be one-dimensional; got an array of rank {ndim}.")
            }
            RunoffError::NonFiniteData { index, value } => {
                write!(f, "Data point at index {index} is non-finite: {value}")
            }
            RunoffError::InvalidDeltaTime { value } => {
                write!(f, "delta_time must be finite and > 0; got: {value}")
            }
            // ---- Extraction parameters ----
            RunoffError::InvalidCurveNumber { value } => {
                write!(f, "Curve number must satisfy 0 < CN <= 100; got: {value}")
            }
            RunoffError::InvalidPhi { value } => {
                write!(f, "Phi index must be finite and >= 0; got: {value}")
            }
            RunoffError::InvalidCurveNumberOptions { param, reason } => {
                write!(f, "Invalid curve-number option {param}: {reason}")
            }
            // ---- Graph / convolution invariants ----
            RunoffError::TimeStepMismatch { expected, actual } => {
                write!(
                    f,
                    "Pulses must have the same duration: expected delta_time {expected}, got {actual}"
                )
            }
            RunoffError::NotUnitHydrograph { name, impulse_len } => {
                write!(
                    f,
                    "Hydrograph '{name}' is not a unit hydrograph: its hyetograph has {impulse_len} \
                     pulse(s) instead of the single unit pulse [1]."
                )
            }
        }
    }
}

/// Convert a [`RunoffError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<RunoffError> for PyErr {
    fn from(err: RunoffError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` messages for the RunoffError variants that carry payloads.
    //
    // They intentionally DO NOT cover:
    // - The `From<RunoffError> for PyErr` conversion, which needs the Python
    //   C API at link time.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `RunoffError::EmptySeries` formats to a non-empty message.
    //
    // Given
    // -----
    // - A `RunoffError::EmptySeries` value.
    //
    // Expect
    // ------
    // - `err.to_string()` is non-empty.
    fn runoff_error_empty_series_has_nonempty_display_message() {
        let err = RunoffError::EmptySeries;

        let msg = err.to_string();

        assert!(!msg.trim().is_empty(), "Display message for EmptySeries should not be empty.");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RunoffError::InvalidCurveNumber` embeds the offending value.
    //
    // Given
    // -----
    // - `RunoffError::InvalidCurveNumber { value: 101.0 }`.
    //
    // Expect
    // ------
    // - The message contains "101".
    fn runoff_error_invalid_curve_number_includes_payload_in_display() {
        let err = RunoffError::InvalidCurveNumber { value: 101.0 };

        let msg = err.to_string();

        assert!(msg.contains("101"), "Display message should include the curve number.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RunoffError::TimeStepMismatch` reports both time steps.
    //
    // Given
    // -----
    // - `expected = 4.0`, `actual = 2.0`.
    //
    // Expect
    // ------
    // - The message contains both "4" and "2".
    fn runoff_error_time_step_mismatch_includes_both_steps() {
        let err = RunoffError::TimeStepMismatch { expected: 4.0, actual: 2.0 };

        let msg = err.to_string();

        assert!(msg.contains('4') && msg.contains('2'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RunoffError::NotUnitHydrograph` names the offending hydrograph.
    //
    // Given
    // -----
    // - A hydrograph named "storm response" whose hyetograph has 3 pulses.
    //
    // Expect
    // ------
    // - The message contains the name and the pulse count.
    fn runoff_error_not_unit_hydrograph_names_the_hydrograph() {
        let err = RunoffError::NotUnitHydrograph { name: "storm response".into(), impulse_len: 3 };

        let msg = err.to_string();

        assert!(msg.contains("storm response"), "Got: {msg}");
        assert!(msg.contains('3'), "Got: {msg}");
    }
}
