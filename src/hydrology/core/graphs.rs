//! Named rainfall and discharge graphs built on [`TimeSeries`].
//!
//! Purpose
//! -------
//! Give the runoff stack its two domain entities: a [`Hyetograph`] (rainfall
//! per pulse) and a [`Hydrograph`] (discharge per pulse). A hydrograph
//! always knows the hyetograph that produced it; when none is given it is
//! the system's impulse response and carries a synthesized unit pulse.
//!
//! Key behaviors
//! -------------
//! - [`Hyetograph::unit_impulse`] is the single factory for the `[1]`
//!   rainfall pulse; [`Hydrograph::new`] calls it only when no hyetograph is
//!   supplied, so no default value is ever shared between instances.
//! - [`AssociatedHyetograph`] records ownership: `Impulse` is owned by the
//!   hydrograph, `Shared` is an `Arc` the caller may keep using elsewhere.
//! - Derived totals (`total_rainfall`, `total_volume`) are computed once at
//!   construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - A hydrograph and its associated hyetograph share the same time step;
//!   construction fails with `RunoffError::TimeStepMismatch` otherwise.
//! - Neither entity exposes a mutation API; transformations build new values.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the default unit impulse, explicit shared
//!   hyetographs, the time-step check, and the derived totals.
use std::{fmt, ops::Deref, sync::Arc};

use ndarray::array;

use crate::hydrology::{
    core::{
        constants::{DEFAULT_HYDROGRAPH_NAME, DEFAULT_HYETOGRAPH_NAME},
        series::TimeSeries,
        validation::validate_time_step_match,
    },
    errors::RunoffResult,
};

/// `Hyetograph`: named rainfall series.
///
/// Fields
/// ------
/// - `name`: `String`
///   Display name, used in legends and derived names.
/// - `time_series`: [`TimeSeries`]
///   Rainfall depth per pulse.
/// - `total_rainfall`: `f64`
///   Cached sum of all pulses.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyetograph {
    name: String,
    time_series: TimeSeries,
    total_rainfall: f64,
}

impl Hyetograph {
    pub fn new(name: impl Into<String>, time_series: TimeSeries) -> Hyetograph {
        let total_rainfall = time_series.sum();
        Hyetograph { name: name.into(), time_series, total_rainfall }
    }

    /// Hyetograph with the default name.
    pub fn unnamed(time_series: TimeSeries) -> Hyetograph {
        Self::new(DEFAULT_HYETOGRAPH_NAME, time_series)
    }

    /// One unit pulse `[1]` lasting `delta_time`.
    ///
    /// Errors
    /// ------
    /// - `RunoffError::InvalidDeltaTime` for a non-positive or non-finite step.
    pub fn unit_impulse(delta_time: f64) -> RunoffResult<Hyetograph> {
        let series = TimeSeries::new(delta_time, array![1.0], None)?;
        Ok(Self::new("Unit pulse", series))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_series(&self) -> &TimeSeries {
        &self.time_series
    }

    pub fn delta_time(&self) -> f64 {
        self.time_series.delta_time()
    }

    pub fn total_rainfall(&self) -> f64 {
        self.total_rainfall
    }

    /// Largest single-pulse depth.
    pub fn peak_intensity(&self) -> f64 {
        self.time_series.max()
    }

    /// `true` iff the data is exactly the single unit pulse `[1]`.
    pub fn is_unit_impulse(&self) -> bool {
        self.time_series.as_slice() == [1.0]
    }

    pub fn len(&self) -> usize {
        self.time_series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_series.is_empty()
    }
}

impl fmt::Display for Hyetograph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hyetograph '{}' ({})", self.name, self.time_series)
    }
}

/// The hyetograph a hydrograph responds to, with its ownership.
#[derive(Debug, Clone, PartialEq)]
pub enum AssociatedHyetograph {
    /// Synthesized unit pulse, owned by the hydrograph.
    Impulse(Hyetograph),
    /// Caller-supplied hyetograph, shared with the caller.
    Shared(Arc<Hyetograph>),
}

impl AssociatedHyetograph {
    pub fn is_shared(&self) -> bool {
        matches!(self, AssociatedHyetograph::Shared(_))
    }
}

impl Deref for AssociatedHyetograph {
    type Target = Hyetograph;

    fn deref(&self) -> &Hyetograph {
        match self {
            AssociatedHyetograph::Impulse(hyetograph) => hyetograph,
            AssociatedHyetograph::Shared(hyetograph) => hyetograph.as_ref(),
        }
    }
}

/// `Hydrograph`: named discharge series and the rainfall that produced it.
///
/// Fields
/// ------
/// - `name`: `String`
///   Display name.
/// - `time_series`: [`TimeSeries`]
///   Discharge per pulse.
/// - `associated`: [`AssociatedHyetograph`]
///   The input rainfall; a unit pulse for unit hydrographs.
/// - `total_volume`: `f64`
///   Cached `sum(data) * delta_time`.
///
/// Invariants
/// ----------
/// - `associated.delta_time() == time_series.delta_time()`.
///
/// Notes
/// -----
/// - A unit hydrograph is simply a hydrograph whose associated hyetograph is
///   `[1]`; see [`Hydrograph::is_unit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Hydrograph {
    name: String,
    time_series: TimeSeries,
    associated: AssociatedHyetograph,
    total_volume: f64,
}

impl Hydrograph {
    /// Construct a hydrograph, synthesizing a unit pulse when `hyetograph` is `None`.
    ///
    /// Parameters
    /// ----------
    /// - `name`: display name.
    /// - `time_series`: discharge ordinates.
    /// - `hyetograph`: `Option<Arc<Hyetograph>>`
    ///   Rainfall that produced the discharge. `None` makes this a unit
    ///   hydrograph.
    ///
    /// Errors
    /// ------
    /// - `RunoffError::TimeStepMismatch` when the supplied hyetograph has a
    ///   different time step.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_hydrograph::hydrology::core::{graphs::Hydrograph, series::TimeSeries};
    /// let uh = Hydrograph::new("UH", TimeSeries::new(4.0, array![0.2, 0.5, 0.3], None).unwrap(), None)
    ///     .unwrap();
    /// assert!(uh.is_unit());
    /// assert_eq!(uh.associated_hyetograph().delta_time(), 4.0);
    /// ```
    pub fn new(
        name: impl Into<String>, time_series: TimeSeries, hyetograph: Option<Arc<Hyetograph>>,
    ) -> RunoffResult<Hydrograph> {
        let associated = match hyetograph {
            Some(hyetograph) => {
                validate_time_step_match(time_series.delta_time(), hyetograph.delta_time())?;
                AssociatedHyetograph::Shared(hyetograph)
            }
            None => AssociatedHyetograph::Impulse(Hyetograph::unit_impulse(time_series.delta_time())?),
        };
        let total_volume = time_series.sum() * time_series.delta_time();

        Ok(Hydrograph { name: name.into(), time_series, associated, total_volume })
    }

    /// Unit hydrograph (response to a single unit pulse).
    pub fn unit(name: impl Into<String>, time_series: TimeSeries) -> RunoffResult<Hydrograph> {
        Self::new(name, time_series, None)
    }

    /// Unit hydrograph with the default name.
    pub fn unnamed(time_series: TimeSeries) -> RunoffResult<Hydrograph> {
        Self::unit(DEFAULT_HYDROGRAPH_NAME, time_series)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_series(&self) -> &TimeSeries {
        &self.time_series
    }

    pub fn delta_time(&self) -> f64 {
        self.time_series.delta_time()
    }

    pub fn associated(&self) -> &AssociatedHyetograph {
        &self.associated
    }

    pub fn associated_hyetograph(&self) -> &Hyetograph {
        &self.associated
    }

    /// `true` iff the associated hyetograph is exactly `[1]`.
    pub fn is_unit(&self) -> bool {
        self.associated.is_unit_impulse()
    }

    /// `sum(data) * delta_time`.
    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    pub fn peak_discharge(&self) -> f64 {
        self.time_series.max()
    }

    /// Start time of the first pulse reaching the peak discharge.
    pub fn time_to_peak(&self) -> f64 {
        let peak = self.peak_discharge();
        let index = self.time_series.as_slice().iter().position(|&q| q == peak).unwrap_or(0);
        index as f64 * self.delta_time()
    }

    pub fn len(&self) -> usize {
        self.time_series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_series.is_empty()
    }
}

impl fmt::Display for Hydrograph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hydrograph '{}' ({})", self.name, self.time_series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrology::errors::RunoffError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The synthesized unit pulse and its ownership.
    // - Explicitly shared hyetographs and the time-step invariant.
    // - Derived totals (rainfall, volume, peak, time to peak).
    // -------------------------------------------------------------------------

    fn series(delta_time: f64, data: &[f64]) -> TimeSeries {
        TimeSeries::from_vec(delta_time, data.to_vec(), None).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify that a hydrograph built without a hyetograph owns a unit pulse
    // with its own time step.
    //
    // Given
    // -----
    // - `delta_time = 4.0`, discharge `[1, 2, 1]`, no hyetograph.
    //
    // Expect
    // ------
    // - The associated hyetograph is `[1]` at step 4.0, owned (not shared).
    fn hydrograph_without_hyetograph_synthesizes_owned_unit_pulse() {
        let uh = Hydrograph::unit("UH", series(4.0, &[1.0, 2.0, 1.0])).unwrap();

        assert!(uh.is_unit());
        assert!(!uh.associated().is_shared());
        assert_eq!(uh.associated_hyetograph().time_series().as_slice(), &[1.0]);
        assert_eq!(uh.associated_hyetograph().delta_time(), 4.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a supplied hyetograph is shared, not copied.
    //
    // Given
    // -----
    // - An `Arc<Hyetograph>` kept by the caller.
    //
    // Expect
    // ------
    // - The hydrograph holds the same allocation; the caller's handle stays
    //   usable and the strong count is 2.
    fn hydrograph_with_hyetograph_shares_callers_value() {
        let rain = Arc::new(Hyetograph::new("storm", series(1.0, &[3.0, 0.0, 2.0])));

        let hydro = Hydrograph::new("response", series(1.0, &[3.0, 6.0]), Some(rain.clone())).unwrap();

        match hydro.associated() {
            AssociatedHyetograph::Shared(inner) => assert!(Arc::ptr_eq(inner, &rain)),
            other => panic!("expected a shared hyetograph, got {other:?}"),
        }
        assert_eq!(Arc::strong_count(&rain), 2);
        assert!(!hydro.is_unit());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a hyetograph with a different time step is rejected.
    //
    // Given
    // -----
    // - Hyetograph at step 2.0, discharge at step 4.0.
    //
    // Expect
    // ------
    // - `TimeStepMismatch { expected: 4.0, actual: 2.0 }`.
    fn hydrograph_rejects_time_step_mismatch() {
        let rain = Arc::new(Hyetograph::unnamed(series(2.0, &[1.0])));

        let err = Hydrograph::new("bad", series(4.0, &[1.0]), Some(rain)).unwrap_err();

        assert_eq!(err, RunoffError::TimeStepMismatch { expected: 4.0, actual: 2.0 });
    }

    #[test]
    // Purpose
    // -------
    // Check derived quantities of both graph types.
    //
    // Given
    // -----
    // - Hyetograph `[10, 20, 5]`; hydrograph `[1, 3, 2]` at step 2.0.
    //
    // Expect
    // ------
    // - Total rainfall 35, peak intensity 20.
    // - Total volume 12, peak discharge 3 at time 2.
    fn graphs_report_derived_totals() {
        let rain = Hyetograph::unnamed(series(1.0, &[10.0, 20.0, 5.0]));
        assert_eq!(rain.total_rainfall(), 35.0);
        assert_eq!(rain.peak_intensity(), 20.0);
        assert_eq!(rain.name(), "Hyetograph");

        let hydro = Hydrograph::unnamed(series(2.0, &[1.0, 3.0, 2.0])).unwrap();
        assert_eq!(hydro.total_volume(), 12.0);
        assert_eq!(hydro.peak_discharge(), 3.0);
        assert_eq!(hydro.time_to_peak(), 2.0);
        assert_eq!(hydro.name(), "Hydrograph");
    }

    #[test]
    // Purpose
    // -------
    // Verify the unit-impulse predicate only accepts exactly `[1]`.
    //
    // Given
    // -----
    // - `[1]`, `[1, 0]`, `[2]`.
    //
    // Expect
    // ------
    // - Only the first is a unit impulse.
    fn hyetograph_is_unit_impulse_requires_exact_single_pulse() {
        assert!(Hyetograph::unit_impulse(3.0).unwrap().is_unit_impulse());
        assert!(!Hyetograph::unnamed(series(1.0, &[1.0, 0.0])).is_unit_impulse());
        assert!(!Hyetograph::unnamed(series(1.0, &[2.0])).is_unit_impulse());
    }
}
