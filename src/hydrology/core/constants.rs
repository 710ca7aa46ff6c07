//! SCS curve-number constants.
//!
//! Notes
//! -----
//! - Both values are defaults for [`CurveNumberOptions`](super::options::CurveNumberOptions);
//!   regional calibrations may override them.

/// Scale factor `K` in `S = (100 / CN - 1) * K` (millimeter units).
pub const SCS_CN_METHOD_NUMBER: f64 = 25.4;

/// Ratio between the maximum initial abstraction and the maximum storage.
pub const INITIAL_ABSTRACTION_RATIO: f64 = 0.2;

/// Upper bound of the curve-number scale (impervious surface).
pub const MAX_CURVE_NUMBER: f64 = 100.0;

/// Name given to hyetographs built without an explicit name.
pub const DEFAULT_HYETOGRAPH_NAME: &str = "Hyetograph";

/// Name given to hydrographs built without an explicit name.
pub const DEFAULT_HYDROGRAPH_NAME: &str = "Hydrograph";
