//! Fixed-step time series shared by hyetographs and hydrographs.
//!
//! Purpose
//! -------
//! Provide the immutable value object at the bottom of the runoff stack: a
//! constant time step, a one-dimensional sequence of observations, and an
//! optional unit label. Every other entity (rainfall, discharge, excess)
//! wraps a [`TimeSeries`] rather than carrying its own step and samples.
//!
//! Key behaviors
//! -------------
//! - [`TimeSeries::new`] validates the step and the samples once; after that
//!   the value is never mutated, so derived quantities such as
//!   [`TimeSeries::total_duration`] are computed at construction and cached.
//! - [`TimeSeries::from_dyn`] accepts arrays of any rank and rejects
//!   everything that is not rank-1 with `RunoffError::DimensionMismatch`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `delta_time` is finite and strictly positive.
//! - `data` is rank-1, non-empty, and finite.
//! - `total_duration == data.len() as f64 * delta_time`.
//!
//! Conventions
//! -----------
//! - Sample `k` covers the interval `[k·Δt, (k+1)·Δt)`; [`TimeSeries::time_axis`]
//!   returns the interval starts.
//! - `label` is a unit annotation ("mm", "m³/s") and never enters a
//!   computation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, each construction error, the rank
//!   check in `from_dyn`, and the cached duration.
use std::fmt;

use ndarray::{Array1, ArrayD, Ix1};

use crate::hydrology::{
    core::validation::{validate_delta_time, validate_series},
    errors::{RunoffError, RunoffResult},
};

/// `TimeSeries`: validated fixed-step series of real observations.
///
/// Fields
/// ------
/// - `delta_time`: `f64`
///   Duration between consecutive samples; finite and > 0.
/// - `data`: `Array1<f64>`
///   Observations, oldest first; non-empty and finite.
/// - `label`: `Option<String>`
///   Optional unit annotation.
/// - `total_duration`: `f64`
///   Cached `data.len() * delta_time`.
///
/// Performance
/// -----------
/// - Construction is O(n) (one validation scan); all accessors are O(1)
///   except [`TimeSeries::time_axis`], which allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    delta_time: f64,
    data: Array1<f64>,
    label: Option<String>,
    total_duration: f64,
}

impl TimeSeries {
    /// Construct a validated [`TimeSeries`].
    ///
    /// Parameters
    /// ----------
    /// - `delta_time`: `f64`
    ///   Duration of each pulse; must be finite and strictly positive.
    /// - `data`: `Array1<f64>`
    ///   Samples; must be non-empty and finite.
    /// - `label`: `Option<String>`
    ///   Optional unit annotation, carried through transformations.
    ///
    /// Errors
    /// ------
    /// - `RunoffError::InvalidDeltaTime` for a non-positive or non-finite step.
    /// - `RunoffError::EmptySeries` when `data` has no samples.
    /// - `RunoffError::NonFiniteData { index, value }` for the first NaN/±∞.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_hydrograph::hydrology::core::series::TimeSeries;
    /// let ts = TimeSeries::new(4.0, array![0.5, 2.0, 1.0], Some("mm".into())).unwrap();
    /// assert_eq!(ts.total_duration(), 12.0);
    /// assert_eq!(ts.label(), Some("mm"));
    /// ```
    pub fn new(delta_time: f64, data: Array1<f64>, label: Option<String>) -> RunoffResult<Self> {
        validate_delta_time(delta_time)?;
        let data =
            if data.is_standard_layout() { data } else { data.as_standard_layout().into_owned() };
        validate_series(data.as_slice().unwrap_or(&[]))?;

        let total_duration = data.len() as f64 * delta_time;
        Ok(TimeSeries { delta_time, data, label, total_duration })
    }

    /// Construct from an array of arbitrary rank, rejecting anything not rank-1.
    ///
    /// Errors
    /// ------
    /// - `RunoffError::DimensionMismatch { ndim }` when `data.ndim() != 1`.
    /// - Any error of [`TimeSeries::new`].
    pub fn from_dyn(delta_time: f64, data: ArrayD<f64>, label: Option<String>) -> RunoffResult<Self> {
        let ndim = data.ndim();
        if ndim != 1 {
            return Err(RunoffError::DimensionMismatch { ndim });
        }
        let data = data.into_dimensionality::<Ix1>().map_err(|_| RunoffError::DimensionMismatch { ndim })?;
        Self::new(delta_time, data, label)
    }

    /// Convenience constructor from a plain vector.
    pub fn from_vec(delta_time: f64, data: Vec<f64>, label: Option<String>) -> RunoffResult<Self> {
        Self::new(delta_time, Array1::from(data), label)
    }

    /// Same step and label as `self`, new samples.
    ///
    /// Used by transformations (extraction, convolution) that keep the time
    /// base and unit of their input.
    pub fn with_data(&self, data: Array1<f64>) -> RunoffResult<Self> {
        Self::new(self.delta_time, data, self.label.clone())
    }

    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    /// Samples as a contiguous slice.
    pub fn as_slice(&self) -> &[f64] {
        // Always contiguous: `new` normalizes the layout.
        self.data.as_slice().unwrap_or(&[])
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// `len(data) * delta_time`, cached at construction.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a constructed series; kept for slice-like APIs.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all samples.
    pub fn sum(&self) -> f64 {
        self.data.sum()
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Start time of every sample: `0, Δt, 2Δt, …, (n-1)Δt`.
    pub fn time_axis(&self) -> Array1<f64> {
        Array1::from_iter((0..self.len()).map(|k| k as f64 * self.delta_time))
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delta_time: {}, data: {}", self.delta_time, self.data)?;
        if let Some(label) = &self.label {
            write!(f, " [{label}]")?;
        }
        Ok(())
    }
}
