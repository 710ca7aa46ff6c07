//! Closed sets of render styles and graph kinds.
use std::{fmt, str::FromStr};

use crate::rendering::errors::RenderError;

/// How a single series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// One bar per pulse, `Δt` wide.
    #[default]
    Bar,
    /// Polyline through the pulse start times.
    Line,
}

impl FromStr for RenderStyle {
    type Err = RenderError;

    /// Parse "bar" or "line", ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("bar") {
            Ok(RenderStyle::Bar)
        } else if token.eq_ignore_ascii_case("line") {
            Ok(RenderStyle::Line)
        } else {
            Err(RenderError::UnsupportedStyle { style: s.to_string() })
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Bar => write!(f, "bar"),
            RenderStyle::Line => write!(f, "line"),
        }
    }
}

/// Logical type of a renderable graph; decides the y-axis quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Hyetograph,
    Hydrograph,
}

impl GraphKind {
    /// Quantity symbol on the y axis: `P` for rainfall, `Q` for discharge.
    pub fn quantity(&self) -> &'static str {
        match self {
            GraphKind::Hyetograph => "P",
            GraphKind::Hydrograph => "Q",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Hyetograph => write!(f, "hyetograph"),
            GraphKind::Hydrograph => write!(f, "hydrograph"),
        }
    }
}
