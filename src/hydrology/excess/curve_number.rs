//! SCS curve-number excess rainfall.
//!
//! Given the cumulative gross rainfall `P[t]` and a curve number `CN`:
//!
//! - maximum storage `S = (100 / CN - 1) * K`,
//! - maximum initial abstraction `Ia_max = ratio * S`,
//! - initial abstraction `Ia[t] = min(P[t], Ia_max)`,
//! - continuous abstraction `F[t] = S (P[t] - Ia[t]) / (P_total - Ia[t] + S)`,
//! - cumulative excess `E[t] = P[t] - F[t] - Ia[t]`,
//!
//! and the excess pulses are the first difference of `E` (with `E[-1] = 0`),
//! trimmed of leading and trailing zeros. `K` and `ratio` come from
//! [`CurveNumberOptions`].
use log::debug;

use crate::hydrology::{
    core::{
        graphs::Hyetograph,
        options::CurveNumberOptions,
        validation::{validate_curve_number, validate_series},
    },
    errors::RunoffResult,
    excess::{ExcessOutcome, ExcessRainfallMethod, build_excess},
};

/// Curve-number loss model.
///
/// Invariant: `0 < curve_number <= 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveNumber {
    curve_number: f64,
    options: CurveNumberOptions,
}

impl CurveNumber {
    /// Curve-number method with the default SCS constants.
    ///
    /// # Errors
    /// - [`RunoffError::InvalidCurveNumber`](crate::hydrology::errors::RunoffError::InvalidCurveNumber)
    ///   if `curve_number` is outside `(0, 100]`.
    pub fn new(curve_number: f64) -> RunoffResult<Self> {
        Self::with_options(curve_number, CurveNumberOptions::default())
    }

    pub fn with_options(curve_number: f64, options: CurveNumberOptions) -> RunoffResult<Self> {
        validate_curve_number(curve_number)?;
        Ok(CurveNumber { curve_number, options })
    }

    pub fn curve_number(&self) -> f64 {
        self.curve_number
    }

    pub fn options(&self) -> &CurveNumberOptions {
        &self.options
    }

    /// `S = (100 / CN - 1) * K`; zero for an impervious basin (CN = 100).
    pub fn maximum_storage(&self) -> f64 {
        (100.0 / self.curve_number - 1.0) * self.options.scs_method_number()
    }

    /// `Ia_max = ratio * S`.
    pub fn max_initial_abstraction(&self) -> f64 {
        self.options.initial_abstraction_ratio() * self.maximum_storage()
    }

    /// Cumulative excess `E[t]` for every pulse of `gross`.
    fn cumulative_excess(&self, gross: &[f64]) -> Vec<f64> {
        let storage = self.maximum_storage();
        let ia_max = self.max_initial_abstraction();

        let cumulative: Vec<f64> = gross
            .iter()
            .scan(0.0, |acc, &pulse| {
                *acc += pulse;
                Some(*acc)
            })
            .collect();
        let total_rainfall = cumulative.last().copied().unwrap_or(0.0);

        cumulative
            .iter()
            .map(|&p| {
                let initial = if p > ia_max { ia_max } else { p };
                let denominator = total_rainfall - initial + storage;
                // S = 0 and P_total = Ia: nothing left to infiltrate.
                let continuous =
                    if denominator == 0.0 { 0.0 } else { storage * (p - initial) / denominator };
                p - continuous - initial
            })
            .collect()
    }
}

impl ExcessRainfallMethod for CurveNumber {
    fn extract(&self, gross: &Hyetograph) -> RunoffResult<ExcessOutcome> {
        let pulses = gross.time_series().as_slice();
        validate_series(pulses)?;

        debug!(
            "curve number {}: S = {}, Ia_max = {}, gross rainfall = {}",
            self.curve_number,
            self.maximum_storage(),
            self.max_initial_abstraction(),
            gross.total_rainfall()
        );

        let cumulative = self.cumulative_excess(pulses);
        let mut previous = 0.0;
        let increments: Vec<f64> = cumulative
            .iter()
            .map(|&e| {
                let pulse = e - previous;
                previous = e;
                pulse
            })
            .collect();

        let name = format!("{} (excess, CN = {})", gross.name(), self.curve_number);
        let excess = build_excess(gross, &increments, name)?;
        if excess.is_none() {
            debug!("curve number {}: rainfall never exceeds the initial abstraction", self.curve_number);
        }
        Ok(ExcessOutcome::new(excess, None))
    }

    fn describe(&self) -> String {
        format!("SCS curve number (CN = {})", self.curve_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrology::{core::series::TimeSeries, errors::RunoffError};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Parameter bounds of `CurveNumber::new`.
    // - Storage and abstraction constants.
    // - `extract` on hand-computed series, including trimming and the
    //   no-excess case.
    // -------------------------------------------------------------------------

    fn gross(delta_time: f64, data: &[f64]) -> Hyetograph {
        Hyetograph::new("storm", TimeSeries::from_vec(delta_time, data.to_vec(), Some("mm".into())).unwrap())
    }

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len(), "length mismatch: {actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(*a, *e, epsilon = tol);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure curve numbers outside (0, 100] are rejected.
    //
    // Given
    // -----
    // - CN = 0 and CN = 101.
    //
    // Expect
    // ------
    // - `InvalidCurveNumber` carrying the value.
    fn curve_number_new_rejects_out_of_range() {
        assert_eq!(CurveNumber::new(0.0).unwrap_err(), RunoffError::InvalidCurveNumber { value: 0.0 });
        assert_eq!(
            CurveNumber::new(101.0).unwrap_err(),
            RunoffError::InvalidCurveNumber { value: 101.0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify storage constants, including the impervious case.
    //
    // Given
    // -----
    // - CN = 100 and CN = 50 with default constants.
    //
    // Expect
    // ------
    // - CN = 100: S = 0 and Ia_max = 0.
    // - CN = 50: S = 25.4 and Ia_max = 5.08.
    fn curve_number_storage_constants() {
        let impervious = CurveNumber::new(100.0).unwrap();
        assert_eq!(impervious.maximum_storage(), 0.0);
        assert_eq!(impervious.max_initial_abstraction(), 0.0);

        let cn50 = CurveNumber::new(50.0).unwrap();
        assert!((cn50.maximum_storage() - 25.4).abs() < 1e-12);
        assert!((cn50.max_initial_abstraction() - 5.08).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // With CN = 100 there are no losses: excess equals gross rainfall.
    //
    // Given
    // -----
    // - Gross `[1, 2, 3]` at step 2.0.
    //
    // Expect
    // ------
    // - Excess `[1, 2, 3]` at step 2.0, no warning.
    fn curve_number_100_returns_gross_rainfall() {
        let outcome = CurveNumber::new(100.0).unwrap().extract(&gross(2.0, &[1.0, 2.0, 3.0])).unwrap();

        assert_eq!(outcome.pulses(), &[1.0, 2.0, 3.0]);
        assert_eq!(outcome.excess().unwrap().delta_time(), 2.0);
        assert!(outcome.warning().is_none());
    }

    #[test]
    // Purpose
    // -------
    // Check the formula on a hand-computed series.
    //
    // Given
    // -----
    // - Gross `[2, 4, 6]`, CN = 50 (S = 25.4, Ia_max = 5.08).
    //
    // Expect
    // ------
    // - The first pulse is fully abstracted and trimmed.
    // - Remaining excess ≈ `[0.196980198, 1.284653465]`.
    fn curve_number_matches_hand_computed_excess() {
        let outcome = CurveNumber::new(50.0).unwrap().extract(&gross(1.0, &[2.0, 4.0, 6.0])).unwrap();

        assert_close(outcome.pulses(), &[0.19698019801980227, 1.2846534653465342], 1e-9);
        assert_eq!(outcome.excess().unwrap().name(), "storm (excess, CN = 50)");
        assert_eq!(outcome.excess().unwrap().time_series().label(), Some("mm"));
    }

    #[test]
    // Purpose
    // -------
    // Verify trimming on both ends.
    //
    // Given
    // -----
    // - Gross `[0, 5, 20, 10, 0]`, CN = 80.
    //
    // Expect
    // ------
    // - Three pulses ≈ `[3.139044411, 16.831337325, 8.415668663]`.
    fn curve_number_trims_leading_and_trailing_zero_pulses() {
        let outcome =
            CurveNumber::new(80.0).unwrap().extract(&gross(1.0, &[0.0, 5.0, 20.0, 10.0, 0.0])).unwrap();

        assert_close(
            outcome.pulses(),
            &[3.1390444111776445, 16.831337325349303, 8.415668662674651],
            1e-9,
        );
    }

    #[test]
    // Purpose
    // -------
    // Rainfall below the initial abstraction yields an empty, valid outcome.
    //
    // Given
    // -----
    // - Gross `[1, 1]` and CN = 40 (Ia_max = 7.62).
    //
    // Expect
    // ------
    // - `Ok` with no excess and no warning.
    fn curve_number_without_excess_returns_empty_outcome() {
        let outcome = CurveNumber::new(40.0).unwrap().extract(&gross(1.0, &[1.0, 1.0])).unwrap();

        assert!(outcome.is_empty());
        assert!(outcome.warning().is_none());
    }

    #[test]
    // Purpose
    // -------
    // Total excess equals the final cumulative excess `E[last]`.
    //
    // Given
    // -----
    // - Gross `[3, 8, 12, 4, 1]`, CN = 70.
    //
    // Expect
    // ------
    // - `sum(excess) == P - F - Ia` at the last pulse, within 1e-9.
    fn curve_number_total_excess_matches_closed_form() {
        let method = CurveNumber::new(70.0).unwrap();
        let data = [3.0, 8.0, 12.0, 4.0, 1.0];

        let outcome = method.extract(&gross(1.0, &data)).unwrap();

        let total: f64 = data.iter().sum();
        let s = method.maximum_storage();
        let ia = method.max_initial_abstraction();
        let expected = total - s * (total - ia) / (total - ia + s) - ia;
        assert_relative_eq!(outcome.total_excess(), expected, epsilon = 1e-9, max_relative = 1e-9);
    }
}
