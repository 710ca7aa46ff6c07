//! rust_hydrograph: unit-hydrograph runoff modeling with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the runoff pipeline to Python via the `_rust_hydrograph` extension module.
//! The numerical work (excess-rainfall extraction and discharge convolution)
//! lives in [`hydrology`]; [`rendering`] describes the resulting graphs for a
//! plotting backend.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`hydrology`, `rendering`) as the public
//!   crate surface.
//! - With `python-bindings`, define `#[pyclass]` wrappers for extraction and
//!   runoff results, the `runoff` functions, and the `#[pymodule]` initializer.
//!
//! Invariants & assumptions
//! ------------------------
//! - This file performs only FFI glue and error mapping; all validation is
//!   done by the constructors in `hydrology::core` and reported as
//!   `RunoffError`, converted to `ValueError` at the boundary.
//! - Python callers pass plain float arrays plus a time step; graph entities
//!   are rebuilt on the Rust side for every call.
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_rust_hydrograph.runoff` and are
//!   registered in `sys.modules` as `rust_hydrograph.runoff`.
//! - Series are returned to Python as lists of floats; an empty list means
//!   "no excess rainfall" / "no direct runoff".
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`hydrology`] (or its `prelude`) and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_runoff_pipeline.rs`.

pub mod hydrology;
pub mod rendering;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    hydrology::{
        convolution::convolve as convolve_graphs,
        excess::{ExcessOutcome, ExcessRainfallMethod},
        pipeline::{RunoffOutcome, simulate_runoff as run_pipeline},
    },
    utils::{
        extract_curve_number_options, extract_excess_method, extract_hyetograph,
        extract_unit_hydrograph,
    },
};

/// ExcessRainfall: Python-facing result of an excess-rainfall extraction.
///
/// Fields
/// ------
/// - `inner`: [`ExcessOutcome`]
///   Trimmed excess hyetograph (possibly absent) and any non-fatal warning.
///
/// Notes
/// -----
/// - Built by `excess_rainfall_cn` / `excess_rainfall_phi`; not constructible
///   from Python.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_hydrograph.runoff")]
pub struct ExcessRainfall {
    inner: ExcessOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ExcessRainfall {
    /// Excess pulses; empty when no pulse produces runoff.
    #[getter]
    pub fn pulses(&self) -> Vec<f64> {
        self.inner.pulses().to_vec()
    }

    #[getter]
    pub fn name(&self) -> Option<String> {
        self.inner.excess().map(|h| h.name().to_string())
    }

    #[getter]
    pub fn total(&self) -> f64 {
        self.inner.total_excess()
    }

    /// Warning message, if the extraction raised one.
    #[getter]
    pub fn warning(&self) -> Option<String> {
        self.inner.warning().map(ToString::to_string)
    }
}

/// DirectRunoff: Python-facing result of the full runoff pipeline.
///
/// Fields
/// ------
/// - `inner`: [`RunoffOutcome`]
///   Excess outcome plus the discharge hydrograph, if any.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_hydrograph.runoff")]
pub struct DirectRunoff {
    inner: RunoffOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl DirectRunoff {
    #[getter]
    pub fn excess(&self) -> Vec<f64> {
        self.inner.excess.pulses().to_vec()
    }

    /// Discharge series; empty when there is no excess rainfall.
    #[getter]
    pub fn discharge(&self) -> Vec<f64> {
        self.inner
            .discharge
            .as_ref()
            .map_or_else(Vec::new, |h| h.time_series().as_slice().to_vec())
    }

    #[getter]
    pub fn peak_discharge(&self) -> f64 {
        self.inner.peak_discharge()
    }

    #[getter]
    pub fn time_to_peak(&self) -> Option<f64> {
        self.inner.discharge.as_ref().map(|h| h.time_to_peak())
    }

    #[getter]
    pub fn warning(&self) -> Option<String> {
        self.inner.excess.warning().map(ToString::to_string)
    }
}

/// Excess rainfall of `gross` with the SCS curve-number method.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (gross, delta_time, curve_number, scs_method_number = None, initial_abstraction_ratio = None),
    text_signature = "(gross, delta_time, curve_number, /, scs_method_number=None, initial_abstraction_ratio=None)"
)]
pub fn excess_rainfall_cn<'py>(
    py: Python<'py>, gross: &Bound<'py, PyAny>, delta_time: f64, curve_number: f64,
    scs_method_number: Option<f64>, initial_abstraction_ratio: Option<f64>,
) -> PyResult<ExcessRainfall> {
    let options = extract_curve_number_options(scs_method_number, initial_abstraction_ratio)?;
    let method = extract_excess_method("cn", curve_number, options)?;
    let gross = extract_hyetograph(py, gross, delta_time, None)?;
    Ok(ExcessRainfall { inner: method.extract(&gross)? })
}

/// Excess rainfall of `gross` with a constant loss rate `phi`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (gross, delta_time, phi), text_signature = "(gross, delta_time, phi, /)")]
pub fn excess_rainfall_phi<'py>(
    py: Python<'py>, gross: &Bound<'py, PyAny>, delta_time: f64, phi: f64,
) -> PyResult<ExcessRainfall> {
    let method = extract_excess_method("phi", phi, Default::default())?;
    let gross = extract_hyetograph(py, gross, delta_time, None)?;
    Ok(ExcessRainfall { inner: method.extract(&gross)? })
}

/// Discharge of `excess` routed through `unit_hydrograph`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (excess, unit_hydrograph, delta_time),
    text_signature = "(excess, unit_hydrograph, delta_time, /)"
)]
pub fn convolve<'py>(
    py: Python<'py>, excess: &Bound<'py, PyAny>, unit_hydrograph: &Bound<'py, PyAny>,
    delta_time: f64,
) -> PyResult<Vec<f64>> {
    let excess = extract_hyetograph(py, excess, delta_time, Some("Excess rainfall"))?;
    let unit_hydrograph = extract_unit_hydrograph(py, unit_hydrograph, delta_time)?;
    let discharge = convolve_graphs(&excess, &unit_hydrograph)?;
    Ok(discharge.time_series().as_slice().to_vec())
}

/// Gross rainfall to direct runoff in one call.
///
/// `method` is "cn" or "phi"; `parameter` is the curve number or phi index.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (gross, unit_hydrograph, delta_time, method, parameter, scs_method_number = None, initial_abstraction_ratio = None),
    text_signature = "(gross, unit_hydrograph, delta_time, method, parameter, /, scs_method_number=None, initial_abstraction_ratio=None)"
)]
#[allow(clippy::too_many_arguments)]
pub fn simulate_runoff<'py>(
    py: Python<'py>, gross: &Bound<'py, PyAny>, unit_hydrograph: &Bound<'py, PyAny>,
    delta_time: f64, method: &str, parameter: f64, scs_method_number: Option<f64>,
    initial_abstraction_ratio: Option<f64>,
) -> PyResult<DirectRunoff> {
    let options = extract_curve_number_options(scs_method_number, initial_abstraction_ratio)?;
    let method = extract_excess_method(method, parameter, options)?;
    let gross = extract_hyetograph(py, gross, delta_time, Some("Gross rainfall"))?;
    let unit_hydrograph = extract_unit_hydrograph(py, unit_hydrograph, delta_time)?;
    let inner = run_pipeline(&gross, method.as_ref(), &unit_hydrograph)?;
    Ok(DirectRunoff { inner })
}

/// _rust_hydrograph: PyO3 module initializer for the Python extension.
///
/// Creates the `runoff` submodule, attaches it to `_rust_hydrograph`, and
/// registers it in `sys.modules` as `rust_hydrograph.runoff` so dotted
/// imports work.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_hydrograph<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let runoff_mod = PyModule::new(py, "runoff")?;
    runoff(py, m, &runoff_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    py.import("sys")?.getattr("modules")?.set_item("rust_hydrograph.runoff", runoff_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn runoff<'py>(
    _py: Python<'py>, rust_hydrograph: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<ExcessRainfall>()?;
    m.add_class::<DirectRunoff>()?;
    m.add_function(wrap_pyfunction!(excess_rainfall_cn, m)?)?;
    m.add_function(wrap_pyfunction!(excess_rainfall_phi, m)?)?;
    m.add_function(wrap_pyfunction!(convolve, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_runoff, m)?)?;
    rust_hydrograph.add_submodule(m)?;
    Ok(())
}
