//! End-to-end runoff: gross rainfall → excess rainfall → discharge.
//!
//! [`simulate_runoff`] chains one [`ExcessRainfallMethod`] with the
//! convolution engine. The unit hydrograph is validated up front, so an
//! invalid one is reported even when the storm produces no excess.
use log::{debug, info};

use crate::hydrology::{
    convolution::{convolve_with, validate_unit_hydrograph},
    core::{
        graphs::{Hydrograph, Hyetograph},
        options::ConvolutionOptions,
        validation::validate_time_step_match,
    },
    errors::RunoffResult,
    excess::{ExcessOutcome, ExcessRainfallMethod},
};

/// Result of [`simulate_runoff`].
///
/// - `excess`: extraction outcome, including any non-fatal warning.
/// - `discharge`: direct-runoff hydrograph; `None` when there is no excess.
#[derive(Debug, Clone, PartialEq)]
pub struct RunoffOutcome {
    pub excess: ExcessOutcome,
    pub discharge: Option<Hydrograph>,
}

impl RunoffOutcome {
    /// Peak of the discharge hydrograph, zero without runoff.
    pub fn peak_discharge(&self) -> f64 {
        self.discharge.as_ref().map_or(0.0, Hydrograph::peak_discharge)
    }
}

/// Run extraction and convolution for one storm.
///
/// Parameters
/// ----------
/// - `gross`: gross rainfall hyetograph.
/// - `method`: loss model (e.g. `CurveNumber`, `PhiIndex`).
/// - `unit_hydrograph`: basin response to one unit pulse, at the same time
///   step as `gross`.
///
/// Errors
/// ------
/// - `RunoffError::NotUnitHydrograph`, `RunoffError::TimeStepMismatch`
///   (checked before extraction).
/// - Any error returned by `method.extract`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_hydrograph::hydrology::{core::{Hydrograph, Hyetograph, TimeSeries}, excess::PhiIndex, pipeline::simulate_runoff};
/// let uh = Hydrograph::unit("UH", TimeSeries::new(1.0, array![1.0, 2.0, 1.0], None).unwrap()).unwrap();
/// let storm = Hyetograph::new("storm", TimeSeries::new(1.0, array![10.0, 20.0, 5.0], None).unwrap());
///
/// let outcome = simulate_runoff(&storm, &PhiIndex::new(5.0).unwrap(), &uh).unwrap();
/// assert_eq!(outcome.excess.pulses(), &[5.0, 15.0]);
/// assert_eq!(outcome.discharge.unwrap().time_series().as_slice(), &[5.0, 25.0, 35.0, 15.0]);
/// ```
pub fn simulate_runoff(
    gross: &Hyetograph, method: &dyn ExcessRainfallMethod, unit_hydrograph: &Hydrograph,
) -> RunoffResult<RunoffOutcome> {
    simulate_runoff_with(gross, method, unit_hydrograph, &ConvolutionOptions::default())
}

/// [`simulate_runoff`] with an explicit convolution configuration.
pub fn simulate_runoff_with(
    gross: &Hyetograph, method: &dyn ExcessRainfallMethod, unit_hydrograph: &Hydrograph,
    options: &ConvolutionOptions,
) -> RunoffResult<RunoffOutcome> {
    validate_unit_hydrograph(unit_hydrograph)?;
    validate_time_step_match(unit_hydrograph.delta_time(), gross.delta_time())?;

    debug!("extracting excess rainfall from '{}' with {}", gross.name(), method.describe());
    let excess = method.extract(gross)?;

    let discharge = match excess.excess() {
        Some(hyetograph) => Some(convolve_with(hyetograph, unit_hydrograph, options)?),
        None => {
            info!("'{}' produces no excess rainfall; no direct runoff", gross.name());
            None
        }
    };

    Ok(RunoffOutcome { excess, discharge })
}
