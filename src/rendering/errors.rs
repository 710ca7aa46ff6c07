//! Errors for the rendering boundary.
//!
//! Rendering never touches the numerical core; these variants only describe
//! bad style tokens and incompatible graph mixes. With the `python-bindings`
//! feature they convert to a Python `ValueError`.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::rendering::style::GraphKind;

/// Result alias for rendering operations that may produce [`RenderError`].
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Style token is neither "bar" nor "line".
    UnsupportedStyle { style: String },

    /// A comparison mixes hyetographs and hydrographs.
    GraphTypeMismatch { expected: GraphKind, found: GraphKind },

    /// A comparison was requested without any graph.
    NoGraphs,
}

impl std::error::Error for RenderError {}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::UnsupportedStyle { style } => {
                write!(f, "Unsupported render style '{style}'; expected 'bar' or 'line'.")
            }
            RenderError::GraphTypeMismatch { expected, found } => {
                write!(f, "Graphs of different types cannot be compared: expected {expected}, found {found}.")
            }
            RenderError::NoGraphs => write!(f, "No graphs to compare."),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RenderError> for PyErr {
    fn from(err: RenderError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
