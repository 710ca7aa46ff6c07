//! Python-side argument conversion for the runoff bindings.
//!
//! Every helper turns loosely typed Python input (NumPy arrays, pandas
//! Series, plain sequences, strategy names) into validated runoff types and
//! maps failures to `PyErr`. Compiled only with `python-bindings`.
#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use crate::hydrology::{
    core::{
        graphs::{Hydrograph, Hyetograph},
        options::CurveNumberOptions,
        series::TimeSeries,
    },
    excess::{CurveNumber, ExcessRainfallMethod, PhiIndex},
};

/// Borrow a 1-D float64 view of `raw`, copying only when it is not already
/// a contiguous NumPy array (or a pandas Series backed by one).
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    let contiguous = |candidate: &Bound<'py, PyAny>| {
        candidate.extract::<PyReadonlyArray1<f64>>().ok().filter(|arr| arr.as_slice().is_ok())
    };

    if let Some(arr) = contiguous(raw) {
        return Ok(arr);
    }
    if let Ok(converted) = raw.call_method1("to_numpy", (false,)) {
        if let Some(arr) = contiguous(&converted) {
            return Ok(arr);
        }
    }

    let samples: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(samples.into_pyarray(py).readonly())
}

/// Validated [`TimeSeries`] from a Python array-like.
#[cfg(feature = "python-bindings")]
pub fn extract_time_series<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, delta_time: f64, label: Option<String>,
) -> PyResult<TimeSeries> {
    let arr = extract_f64_array(py, raw)?;
    let samples = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("series must be a 1-D contiguous float64 array"))?;
    Ok(TimeSeries::from_vec(delta_time, samples.to_vec(), label)?)
}

#[cfg(feature = "python-bindings")]
pub fn extract_hyetograph<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, delta_time: f64, name: Option<&str>,
) -> PyResult<Hyetograph> {
    let series = extract_time_series(py, raw, delta_time, None)?;
    Ok(match name {
        Some(name) => Hyetograph::new(name, series),
        None => Hyetograph::unnamed(series),
    })
}

/// Unit hydrograph (response to `[1]`) from a Python array-like.
#[cfg(feature = "python-bindings")]
pub fn extract_unit_hydrograph<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, delta_time: f64,
) -> PyResult<Hydrograph> {
    let series = extract_time_series(py, raw, delta_time, None)?;
    Ok(Hydrograph::unit("Unit hydrograph", series)?)
}

/// Curve-number constants, falling back to the SCS defaults.
#[cfg(feature = "python-bindings")]
pub fn extract_curve_number_options(
    scs_method_number: Option<f64>, initial_abstraction_ratio: Option<f64>,
) -> PyResult<CurveNumberOptions> {
    let defaults = CurveNumberOptions::default();
    Ok(CurveNumberOptions::new(
        scs_method_number.unwrap_or(defaults.scs_method_number()),
        initial_abstraction_ratio.unwrap_or(defaults.initial_abstraction_ratio()),
    )?)
}

/// Loss model selected by name: "cn" / "curve_number" or "phi" / "phi_index".
#[cfg(feature = "python-bindings")]
pub fn extract_excess_method(
    method: &str, parameter: f64, options: CurveNumberOptions,
) -> PyResult<Box<dyn ExcessRainfallMethod>> {
    match method.to_lowercase().as_str() {
        "cn" | "curve_number" | "scs" => {
            Ok(Box::new(CurveNumber::with_options(parameter, options)?))
        }
        "phi" | "phi_index" => Ok(Box::new(PhiIndex::new(parameter)?)),
        other => Err(PyValueError::new_err(format!(
            "invalid excess-rainfall method {other:?} (expected 'cn' or 'phi')"
        ))),
    }
}
