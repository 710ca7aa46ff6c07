//! hydrology: unit-hydrograph runoff stack (data model, losses, convolution).
//!
//! Purpose
//! -------
//! Turn a gross rainfall record into a basin's direct-runoff hydrograph with
//! the classical unit-hydrograph method. This is the main entry point of the
//! crate and the surface the Python bindings and the demo binary build on.
//!
//! Key behaviors
//! -------------
//! - Carry validated fixed-step series and the two domain entities in
//!   [`core`]: [`TimeSeries`], [`Hyetograph`], [`Hydrograph`], plus the SCS
//!   constants and option structs.
//! - Separate excess rainfall from gross rainfall in [`excess`] with either
//!   the SCS curve-number method ([`CurveNumber`]) or a constant loss rate
//!   ([`PhiIndex`]), both behind [`ExcessRainfallMethod`].
//! - Convolve excess rainfall with a unit hydrograph in [`convolution`].
//! - Chain both steps in [`pipeline::simulate_runoff`].
//! - Centralize failures in [`errors`] (`RunoffError`, `RunoffResult`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every series is non-empty, finite, and sampled at a finite positive
//!   step. Empty excess rainfall is modeled as `ExcessOutcome` holding no
//!   hyetograph.
//! - Series combined in one operation share an exactly equal time step.
//! - A unit hydrograph is any hydrograph whose associated hyetograph is the
//!   single pulse `[1]`.
//!
//! Conventions
//! -----------
//! - Index `k` of a series covers the interval `[k·Δt, (k+1)·Δt)`.
//! - Rainfall and discharge are depths per pulse; no unit conversion is
//!   performed anywhere in the stack.
//! - The stack logs through the `log` facade only (`debug` for steps,
//!   `warn` for the phi-above-peak condition) and never installs a logger.
//!
//! Downstream usage
//! ----------------
//! 1. Build a unit hydrograph with `Hydrograph::unit(name, series)?`.
//! 2. Build the storm with `Hyetograph::new(name, series)`.
//! 3. Call `simulate_runoff(&storm, &PhiIndex::new(phi)?, &uh)?`, or call
//!    `extract` and `convolve` separately.
//! 4. Hand the resulting graphs to `crate::rendering` for display.

pub mod convolution;
pub mod core;
pub mod errors;
pub mod excess;
pub mod pipeline;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::convolution::{convolve, convolve_pulses, convolve_with};
pub use self::core::{
    ConvolutionOptions, CurveNumberOptions, Hydrograph, Hyetograph, TimeSeries,
};
pub use self::errors::{RunoffError, RunoffResult};
pub use self::excess::{
    CurveNumber, ExcessOutcome, ExcessRainfallMethod, ExcessWarning, PhiIndex, excess_rainfall_cn,
    excess_rainfall_phi,
};
pub use self::pipeline::{RunoffOutcome, simulate_runoff, simulate_runoff_with};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::convolution::convolve;
    pub use super::core::prelude::*;
    pub use super::errors::{RunoffError, RunoffResult};
    pub use super::excess::{
        CurveNumber, ExcessOutcome, ExcessRainfallMethod, ExcessWarning, PhiIndex,
    };
    pub use super::pipeline::{RunoffOutcome, simulate_runoff};
}
