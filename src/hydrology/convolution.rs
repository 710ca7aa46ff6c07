//! hydrology::convolution: discharge from excess rainfall and a unit hydrograph.
//!
//! Purpose
//! -------
//! Produce a basin's direct-runoff hydrograph by superposition: every
//! excess-rainfall pulse contributes a copy of the unit hydrograph, shifted
//! to the pulse's start and scaled by its depth, and the copies are summed.
//!
//! Key behaviors
//! -------------
//! - [`convolve`] / [`convolve_with`] check both preconditions before any
//!   arithmetic: the second argument must be a unit hydrograph (associated
//!   hyetograph exactly `[1]`), and both inputs must share a time step.
//! - Output sample `k` is `Σᵢ h[i]·u[k−i]`, summed over ascending `i` where
//!   both indices are in range; the output has `n + m − 1` samples.
//! - The result carries the excess hyetograph as its associated hyetograph
//!   and the unit hydrograph's time step and label.
//!
//! Invariants & assumptions
//! ------------------------
//! - Direct summation, no dense shift matrix and no FFT: at tens to hundreds
//!   of samples exact reproducibility matters more than asymptotic cost.
//! - With the `parallel` feature, long outputs are split across rayon tasks
//!   by output index. Each index is still summed sequentially in ascending
//!   `i`, so both kernels return bit-identical values.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference scenario, output length, the identity
//!   case, linearity, both precondition errors, and kernel agreement.
use std::sync::Arc;

use log::debug;
use ndarray::Array1;

use crate::hydrology::{
    core::{
        graphs::{Hydrograph, Hyetograph},
        options::ConvolutionOptions,
        validation::validate_time_step_match,
    },
    errors::{RunoffError, RunoffResult},
};

/// Convolve an excess hyetograph with a unit hydrograph using default options.
///
/// Errors
/// ------
/// - `RunoffError::NotUnitHydrograph` when `unit_hydrograph` does not respond
///   to the single pulse `[1]`.
/// - `RunoffError::TimeStepMismatch` when the two time steps differ.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_hydrograph::hydrology::{convolution::convolve, core::{Hydrograph, Hyetograph, TimeSeries}};
/// let uh = Hydrograph::unit("UH", TimeSeries::new(1.0, array![1.0, 2.0, 1.0], None).unwrap()).unwrap();
/// let excess = Hyetograph::new("excess", TimeSeries::new(1.0, array![3.0, 0.0, 2.0], None).unwrap());
///
/// let discharge = convolve(&excess, &uh).unwrap();
/// assert_eq!(discharge.time_series().as_slice(), &[3.0, 6.0, 5.0, 4.0, 2.0]);
/// ```
pub fn convolve(excess: &Hyetograph, unit_hydrograph: &Hydrograph) -> RunoffResult<Hydrograph> {
    convolve_with(excess, unit_hydrograph, &ConvolutionOptions::default())
}

/// [`convolve`] with an explicit kernel configuration.
pub fn convolve_with(
    excess: &Hyetograph, unit_hydrograph: &Hydrograph, options: &ConvolutionOptions,
) -> RunoffResult<Hydrograph> {
    validate_unit_hydrograph(unit_hydrograph)?;
    validate_time_step_match(unit_hydrograph.delta_time(), excess.delta_time())?;

    let pulses = excess.time_series().as_slice();
    let ordinates = unit_hydrograph.time_series().as_slice();
    debug!(
        "convolving '{}' ({} pulses) with '{}' ({} ordinates)",
        excess.name(),
        pulses.len(),
        unit_hydrograph.name(),
        ordinates.len()
    );

    let discharge = run_kernel(pulses, ordinates, options);
    let series = unit_hydrograph.time_series().with_data(Array1::from(discharge))?;
    let name = format!("{} convolved with {}", excess.name(), unit_hydrograph.name());

    Hydrograph::new(name, series, Some(Arc::new(excess.clone())))
}

/// Fail unless `hydrograph` is the response to exactly one unit pulse.
///
/// Errors
/// ------
/// - `RunoffError::NotUnitHydrograph { name, impulse_len }`.
pub fn validate_unit_hydrograph(hydrograph: &Hydrograph) -> RunoffResult<()> {
    if !hydrograph.is_unit() {
        return Err(RunoffError::NotUnitHydrograph {
            name: hydrograph.name().to_string(),
            impulse_len: hydrograph.associated_hyetograph().len(),
        });
    }
    Ok(())
}

/// Raw discrete convolution of `pulses` (length `n`) and `ordinates` (length `m`).
///
/// Returns `n + m − 1` samples, or an empty vector when either input is empty.
pub fn convolve_pulses(pulses: &[f64], ordinates: &[f64]) -> Vec<f64> {
    if pulses.is_empty() || ordinates.is_empty() {
        return Vec::new();
    }
    let len = pulses.len() + ordinates.len() - 1;
    (0..len).map(|k| output_sample(pulses, ordinates, k)).collect()
}

fn run_kernel(pulses: &[f64], ordinates: &[f64], options: &ConvolutionOptions) -> Vec<f64> {
    let len = pulses.len() + ordinates.len() - 1;
    if cfg!(feature = "parallel") && len >= options.parallel_threshold {
        debug!("parallel convolution kernel for {len} output samples");
        convolve_pulses_parallel(pulses, ordinates)
    } else {
        convolve_pulses(pulses, ordinates)
    }
}

#[cfg(feature = "parallel")]
fn convolve_pulses_parallel(pulses: &[f64], ordinates: &[f64]) -> Vec<f64> {
    use rayon::prelude::*;

    if pulses.is_empty() || ordinates.is_empty() {
        return Vec::new();
    }
    let len = pulses.len() + ordinates.len() - 1;
    (0..len).into_par_iter().map(|k| output_sample(pulses, ordinates, k)).collect()
}

#[cfg(not(feature = "parallel"))]
fn convolve_pulses_parallel(pulses: &[f64], ordinates: &[f64]) -> Vec<f64> {
    convolve_pulses(pulses, ordinates)
}

/// `Σᵢ h[i]·u[k−i]` over ascending `i` with both indices in range.
#[inline]
fn output_sample(pulses: &[f64], ordinates: &[f64], k: usize) -> f64 {
    let first = k.saturating_sub(ordinates.len() - 1);
    let last = k.min(pulses.len() - 1);
    let mut acc = 0.0;
    for i in first..=last {
        acc += pulses[i] * ordinates[k - i];
    }
    acc
}
