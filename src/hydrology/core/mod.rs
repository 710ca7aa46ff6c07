//! hydrology::core: data model, validation, and configuration for runoff modeling.
//!
//! Purpose
//! -------
//! Hold the building blocks every other part of the runoff stack relies on:
//! the fixed-step [`TimeSeries`] value object, the [`Hyetograph`] and
//! [`Hydrograph`] entities wrapping it, the shared validation guards, the
//! SCS constants, and the option structs for extraction and convolution.
//!
//! Key behaviors
//! -------------
//! - Validate once at construction: step positivity, non-empty finite
//!   rank-1 data, and time-step agreement between a hydrograph and its
//!   hyetograph.
//! - Expose read-only accessors only; transformations elsewhere produce new
//!   values through [`TimeSeries::with_data`] and the entity constructors.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every constructed [`TimeSeries`] is non-empty; an empty excess series is
//!   represented one level up, by `ExcessOutcome` holding no hyetograph.
//! - Unit hydrographs are identified structurally: associated hyetograph
//!   data equal to `[1]`.
//!
//! Downstream usage
//! ----------------
//! - Build gross rainfall as `Hyetograph::new(name, TimeSeries::new(..)?)`.
//! - Build a unit hydrograph as `Hydrograph::unit(name, TimeSeries::new(..)?)?`.
//! - Pass both to `hydrology::excess` and `hydrology::convolution`.

pub mod constants;
pub mod graphs;
pub mod options;
pub mod series;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::constants::{INITIAL_ABSTRACTION_RATIO, SCS_CN_METHOD_NUMBER};
pub use self::graphs::{AssociatedHyetograph, Hydrograph, Hyetograph};
pub use self::options::{ConvolutionOptions, CurveNumberOptions};
pub use self::series::TimeSeries;
pub use self::validation::{
    validate_curve_number, validate_delta_time, validate_phi, validate_series,
    validate_time_step_match,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::graphs::{AssociatedHyetograph, Hydrograph, Hyetograph};
    pub use super::options::{ConvolutionOptions, CurveNumberOptions};
    pub use super::series::TimeSeries;
}
