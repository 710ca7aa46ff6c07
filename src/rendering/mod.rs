//! rendering: plot descriptions for hyetographs and hydrographs.
//!
//! Purpose
//! -------
//! Consume the runoff entities read-only and describe how to draw them,
//! either one at a time ([`render`], [`render_str`]) or several of the same
//! kind on shared axes ([`render_comparison`]). Drawing itself is left to a
//! backend; [`SeriesPlot`] and [`ComparisonPlot`] also implement `Display`
//! as a plain-text fallback used by the demo binary.
//!
//! Key behaviors
//! -------------
//! - Styles form the closed set [`RenderStyle::Bar`] / [`RenderStyle::Line`];
//!   other tokens fail with [`RenderError::UnsupportedStyle`].
//! - Comparisons reject mixed graph kinds with
//!   [`RenderError::GraphTypeMismatch`].
//!
//! Downstream usage
//! ----------------
//! - `render(&hyetograph, RenderStyle::Bar)` for rainfall pulses,
//!   `render(&hydrograph, RenderStyle::Line)` for discharge, and
//!   `render_comparison(&[&a, &b])` to overlay graphs of one kind.

pub mod errors;
pub mod plot;
pub mod style;

pub use self::errors::{RenderError, RenderResult};
pub use self::plot::{ComparisonPlot, Renderable, SeriesPlot, render, render_comparison, render_str};
pub use self::style::{GraphKind, RenderStyle};
