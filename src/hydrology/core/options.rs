//! Runoff options: configuration for extraction and convolution.
//!
//! Purpose
//! -------
//! Collect the tunable constants of the runoff stack in explicit, validated
//! structs so call sites pass configuration instead of ad-hoc numbers:
//! the SCS constants used by the curve-number method and the kernel switch
//! of the convolution engine.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`CurveNumberOptions`] holds a finite, strictly positive SCS method
//!   number and an initial-abstraction ratio in `[0, 1]`.
//! - [`ConvolutionOptions::parallel_threshold`] only matters when the crate
//!   is built with the `parallel` feature; both kernels sum in the same
//!   order, so the choice never changes results.
//!
//! Testing notes
//! -------------
//! - Unit tests verify defaults and each validation branch of
//!   `CurveNumberOptions::new`.
use crate::hydrology::{
    core::constants::{INITIAL_ABSTRACTION_RATIO, SCS_CN_METHOD_NUMBER},
    errors::{RunoffError, RunoffResult},
};

/// Constants of the SCS curve-number method.
///
/// Fields
/// ------
/// - `scs_method_number`: `f64`
///   Scale `K` in `S = (100 / CN - 1) * K`; fixes the depth unit of `S`.
/// - `initial_abstraction_ratio`: `f64`
///   `Ia_max = ratio * S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveNumberOptions {
    scs_method_number: f64,
    initial_abstraction_ratio: f64,
}

impl CurveNumberOptions {
    /// Construct validated SCS constants.
    ///
    /// Errors
    /// ------
    /// - `RunoffError::InvalidCurveNumberOptions` when `scs_method_number` is
    ///   not finite and > 0, or `initial_abstraction_ratio` is outside `[0, 1]`.
    pub fn new(scs_method_number: f64, initial_abstraction_ratio: f64) -> RunoffResult<Self> {
        if !scs_method_number.is_finite() || scs_method_number <= 0.0 {
            return Err(RunoffError::InvalidCurveNumberOptions {
                param: scs_method_number,
                reason: "SCS method number must be finite and > 0.",
            });
        }
        if !(0.0..=1.0).contains(&initial_abstraction_ratio) {
            return Err(RunoffError::InvalidCurveNumberOptions {
                param: initial_abstraction_ratio,
                reason: "Initial abstraction ratio must lie in [0, 1].",
            });
        }
        Ok(CurveNumberOptions { scs_method_number, initial_abstraction_ratio })
    }

    pub fn scs_method_number(&self) -> f64 {
        self.scs_method_number
    }

    pub fn initial_abstraction_ratio(&self) -> f64 {
        self.initial_abstraction_ratio
    }
}

impl Default for CurveNumberOptions {
    fn default() -> Self {
        CurveNumberOptions {
            scs_method_number: SCS_CN_METHOD_NUMBER,
            initial_abstraction_ratio: INITIAL_ABSTRACTION_RATIO,
        }
    }
}

/// Kernel selection for the convolution engine.
///
/// - `parallel_threshold`: output length at or above which the rayon kernel
///   is used (only with the `parallel` feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvolutionOptions {
    pub parallel_threshold: usize,
}

impl ConvolutionOptions {
    pub fn new(parallel_threshold: usize) -> ConvolutionOptions {
        ConvolutionOptions { parallel_threshold }
    }
}

impl Default for ConvolutionOptions {
    fn default() -> Self {
        ConvolutionOptions { parallel_threshold: 4096 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Default values of both option structs.
    // - Validation branches of `CurveNumberOptions::new`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the defaults match the SCS constants.
    //
    // Given
    // -----
    // - `CurveNumberOptions::default()` and `ConvolutionOptions::default()`.
    //
    // Expect
    // ------
    // - K = 25.4, ratio = 0.2, threshold = 4096.
    fn options_defaults_match_documented_constants() {
        let cn = CurveNumberOptions::default();
        assert_eq!(cn.scs_method_number(), 25.4);
        assert_eq!(cn.initial_abstraction_ratio(), 0.2);
        assert_eq!(ConvolutionOptions::default().parallel_threshold, 4096);
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid SCS constants are rejected.
    //
    // Given
    // -----
    // - Method number 0 and NaN; ratio -0.1 and 1.5.
    //
    // Expect
    // ------
    // - Each fails with `InvalidCurveNumberOptions`; (254, 0.05) passes.
    fn curve_number_options_reject_invalid_constants() {
        for (k, ratio) in [(0.0, 0.2), (f64::NAN, 0.2), (25.4, -0.1), (25.4, 1.5)] {
            assert!(matches!(
                CurveNumberOptions::new(k, ratio),
                Err(RunoffError::InvalidCurveNumberOptions { .. })
            ));
        }
        let opts = CurveNumberOptions::new(254.0, 0.05).unwrap();
        assert_eq!(opts.scs_method_number(), 254.0);
        assert_eq!(opts.initial_abstraction_ratio(), 0.05);
    }
}
