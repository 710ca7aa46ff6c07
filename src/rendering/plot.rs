//! Backend-agnostic plot descriptions for hyetographs and hydrographs.
//!
//! Purpose
//! -------
//! Translate a graph into everything a plotting backend needs (sample
//! positions, bar widths, ticks, axis labels, axis ranges) without depending
//! on any backend. A matplotlib, plotters, or terminal front end only has to
//! draw what [`SeriesPlot`] / [`ComparisonPlot`] describe.
//!
//! Key behaviors
//! -------------
//! - Sample `k` is placed at `k·Δt`; bars are `Δt` wide.
//! - X ticks run `Δt, 2Δt, …, total_duration`; both axes start at zero.
//! - Axis labels are "T [s]" and "P [mm]" (rainfall) or "Q [mm]"
//!   (discharge). A series label replaces the unit in brackets.
//! - Comparisons draw every series as a line and require one graph kind.
//!
//! Invariants & assumptions
//! ------------------------
//! - Graphs are read only; nothing here can fail on numerical grounds since
//!   every [`TimeSeries`] is already non-empty and finite.
use std::fmt;

use crate::{
    hydrology::core::{
        graphs::{Hydrograph, Hyetograph},
        series::TimeSeries,
    },
    rendering::{
        errors::{RenderError, RenderResult},
        style::{GraphKind, RenderStyle},
    },
};

const TIME_AXIS_LABEL: &str = "T [s]";
const DEFAULT_DEPTH_UNIT: &str = "mm";
const TEXT_BAR_WIDTH: usize = 40;

/// Anything with a name and a time series that can be drawn.
pub trait Renderable {
    fn name(&self) -> &str;
    fn time_series(&self) -> &TimeSeries;
    fn graph_kind(&self) -> GraphKind;
}

impl Renderable for Hyetograph {
    fn name(&self) -> &str {
        Hyetograph::name(self)
    }

    fn time_series(&self) -> &TimeSeries {
        Hyetograph::time_series(self)
    }

    fn graph_kind(&self) -> GraphKind {
        GraphKind::Hyetograph
    }
}

impl Renderable for Hydrograph {
    fn name(&self) -> &str {
        Hydrograph::name(self)
    }

    fn time_series(&self) -> &TimeSeries {
        Hydrograph::time_series(self)
    }

    fn graph_kind(&self) -> GraphKind {
        GraphKind::Hydrograph
    }
}

/// `SeriesPlot`: drawing instructions for one graph.
///
/// Fields
/// ------
/// - `name`: legend entry (the graph name).
/// - `kind` / `style`: graph type and drawing style.
/// - `x`, `y`: sample start times `k·Δt` and sample values.
/// - `bar_width`: `Some(Δt)` for bar plots, `None` for lines.
/// - `x_ticks`: `Δt, 2Δt, …, total_duration`.
/// - `x_label`, `y_label`: axis titles.
/// - `x_range`, `y_range`: `(0, total_duration)` and `(0, peak)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPlot {
    pub name: String,
    pub kind: GraphKind,
    pub style: RenderStyle,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub bar_width: Option<f64>,
    pub x_ticks: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// `ComparisonPlot`: several graphs of one kind on shared axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPlot {
    pub kind: GraphKind,
    pub series: Vec<SeriesPlot>,
    pub x_ticks: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// Describe `graph` drawn in `style`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_hydrograph::hydrology::core::{Hyetograph, TimeSeries};
/// # use rust_hydrograph::rendering::{render, RenderStyle};
/// let storm = Hyetograph::new("storm", TimeSeries::from_vec(4.0, vec![1.0, 3.0], None).unwrap());
///
/// let plot = render(&storm, RenderStyle::Bar);
/// assert_eq!(plot.x, vec![0.0, 4.0]);
/// assert_eq!(plot.x_ticks, vec![4.0, 8.0]);
/// assert_eq!(plot.y_label, "P [mm]");
/// ```
pub fn render(graph: &dyn Renderable, style: RenderStyle) -> SeriesPlot {
    let series = graph.time_series();
    let kind = graph.graph_kind();
    let delta_time = series.delta_time();

    SeriesPlot {
        name: graph.name().to_string(),
        kind,
        style,
        x: series.time_axis().to_vec(),
        y: series.as_slice().to_vec(),
        bar_width: match style {
            RenderStyle::Bar => Some(delta_time),
            RenderStyle::Line => None,
        },
        x_ticks: time_ticks(series),
        x_label: TIME_AXIS_LABEL.to_string(),
        y_label: value_axis_label(kind, series.label()),
        x_range: (0.0, series.total_duration()),
        y_range: (0.0, series.max().max(0.0)),
    }
}

/// [`render`] with a textual style token ("bar" or "line").
///
/// Errors
/// ------
/// - `RenderError::UnsupportedStyle` for any other token.
pub fn render_str(graph: &dyn Renderable, style: &str) -> RenderResult<SeriesPlot> {
    Ok(render(graph, style.parse()?))
}

/// Describe several graphs of the same kind as lines on shared axes.
///
/// Errors
/// ------
/// - `RenderError::NoGraphs` for an empty slice.
/// - `RenderError::GraphTypeMismatch` when hyetographs and hydrographs are mixed.
pub fn render_comparison(graphs: &[&dyn Renderable]) -> RenderResult<ComparisonPlot> {
    let Some(first) = graphs.first() else {
        return Err(RenderError::NoGraphs);
    };
    let kind = first.graph_kind();
    if let Some(other) = graphs.iter().find(|g| g.graph_kind() != kind) {
        return Err(RenderError::GraphTypeMismatch { expected: kind, found: other.graph_kind() });
    }

    let series: Vec<SeriesPlot> = graphs.iter().map(|g| render(*g, RenderStyle::Line)).collect();

    let mut longest = first.time_series();
    for graph in &graphs[1..] {
        if graph.time_series().total_duration() > longest.total_duration() {
            longest = graph.time_series();
        }
    }
    let y_max = series.iter().map(|s| s.y_range.1).fold(0.0, f64::max);

    Ok(ComparisonPlot {
        kind,
        x_ticks: time_ticks(longest),
        x_label: TIME_AXIS_LABEL.to_string(),
        y_label: value_axis_label(kind, first.time_series().label()),
        x_range: (0.0, longest.total_duration()),
        y_range: (0.0, y_max),
        series,
    })
}

fn time_ticks(series: &TimeSeries) -> Vec<f64> {
    (1..=series.len()).map(|k| k as f64 * series.delta_time()).collect()
}

fn value_axis_label(kind: GraphKind, label: Option<&str>) -> String {
    format!("{} [{}]", kind.quantity(), label.unwrap_or(DEFAULT_DEPTH_UNIT))
}

/// Scaled marker column for the text rendering.
fn text_column(value: f64, peak: f64) -> usize {
    if peak <= 0.0 {
        return 0;
    }
    ((value / peak) * TEXT_BAR_WIDTH as f64).round() as usize
}

impl fmt::Display for SeriesPlot {
    /// Plain-text rendering, one row per sample.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}, {})", self.name, self.kind, self.style)?;
        writeln!(f, "{:>10} | {}", self.x_label, self.y_label)?;
        let peak = self.y_range.1;
        for (t, v) in self.x.iter().zip(&self.y) {
            let column = text_column(*v, peak);
            let marker = match self.style {
                RenderStyle::Bar => "#".repeat(column),
                RenderStyle::Line => format!("{}*", " ".repeat(column)),
            };
            writeln!(f, "{t:>10.2} | {v:>10.4} {marker}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} comparison, x in [0, {}], {}", self.kind, self.x_range.1, self.y_label)?;
        for series in &self.series {
            write!(f, "{series}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Axis layout of single-series plots for both styles.
    // - Label substitution from the series label.
    // - Comparison rules (kind check, empty input, longest x range).
    // -------------------------------------------------------------------------

    fn hyetograph(delta_time: f64, data: &[f64], label: Option<&str>) -> Hyetograph {
        Hyetograph::new(
            "storm",
            TimeSeries::from_vec(delta_time, data.to_vec(), label.map(str::to_string)).unwrap(),
        )
    }

    fn hydrograph(delta_time: f64, data: &[f64]) -> Hydrograph {
        Hydrograph::unit("UH", TimeSeries::from_vec(delta_time, data.to_vec(), None).unwrap()).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify the bar layout of a hyetograph.
    //
    // Given
    // -----
    // - `[2, 5, 1]` at Δt = 4, no label.
    //
    // Expect
    // ------
    // - x `[0, 4, 8]`, bar width 4, ticks `[4, 8, 12]`.
    // - Labels "T [s]" / "P [mm]", ranges `(0, 12)` and `(0, 5)`.
    fn render_bar_hyetograph_layout() {
        let plot = render(&hyetograph(4.0, &[2.0, 5.0, 1.0], None), RenderStyle::Bar);

        assert_eq!(plot.x, vec![0.0, 4.0, 8.0]);
        assert_eq!(plot.y, vec![2.0, 5.0, 1.0]);
        assert_eq!(plot.bar_width, Some(4.0));
        assert_eq!(plot.x_ticks, vec![4.0, 8.0, 12.0]);
        assert_eq!(plot.x_label, "T [s]");
        assert_eq!(plot.y_label, "P [mm]");
        assert_eq!(plot.x_range, (0.0, 12.0));
        assert_eq!(plot.y_range, (0.0, 5.0));
        assert_eq!(plot.kind, GraphKind::Hyetograph);
    }

    #[test]
    // Purpose
    // -------
    // Lines carry no bar width; hydrographs use Q; labels replace the unit.
    //
    // Given
    // -----
    // - A hydrograph `[1, 3]` at Δt = 2 rendered from the token "LINE".
    // - A hyetograph labelled "in".
    //
    // Expect
    // ------
    // - `bar_width == None`, y label "Q [mm]".
    // - Hyetograph y label "P [in]".
    fn render_str_line_hydrograph_and_label_substitution() {
        let plot = render_str(&hydrograph(2.0, &[1.0, 3.0]), "LINE").unwrap();
        assert_eq!(plot.style, RenderStyle::Line);
        assert_eq!(plot.bar_width, None);
        assert_eq!(plot.y_label, "Q [mm]");

        let labelled = render(&hyetograph(1.0, &[1.0], Some("in")), RenderStyle::Bar);
        assert_eq!(labelled.y_label, "P [in]");
    }

    #[test]
    fn render_str_rejects_unknown_style() {
        let err = render_str(&hyetograph(1.0, &[1.0], None), "pie").unwrap_err();

        assert_eq!(err, RenderError::UnsupportedStyle { style: "pie".into() });
    }

    #[test]
    // Purpose
    // -------
    // Comparisons need a single graph kind and at least one graph.
    //
    // Given
    // -----
    // - A hyetograph followed by a hydrograph; an empty slice.
    //
    // Expect
    // ------
    // - `GraphTypeMismatch { Hyetograph, Hydrograph }` and `NoGraphs`.
    fn render_comparison_rejects_mixed_kinds_and_empty_input() {
        let rain = hyetograph(1.0, &[1.0], None);
        let flow = hydrograph(1.0, &[1.0]);

        let mixed: [&dyn Renderable; 2] = [&rain, &flow];

        let err = render_comparison(&mixed).unwrap_err();
        assert_eq!(
            err,
            RenderError::GraphTypeMismatch {
                expected: GraphKind::Hyetograph,
                found: GraphKind::Hydrograph
            }
        );
        assert_eq!(render_comparison(&[]).unwrap_err(), RenderError::NoGraphs);
    }

    #[test]
    // Purpose
    // -------
    // The shared axes cover the longest and tallest series.
    //
    // Given
    // -----
    // - Hydrographs `[1, 2]` and `[4, 1, 1, 1]` at Δt = 1.
    //
    // Expect
    // ------
    // - Two line series, x range `(0, 4)`, ticks `[1, 2, 3, 4]`, y range `(0, 4)`.
    fn render_comparison_spans_longest_series() {
        let short = hydrograph(1.0, &[1.0, 2.0]);
        let long = hydrograph(1.0, &[4.0, 1.0, 1.0, 1.0]);

        let graphs: [&dyn Renderable; 2] = [&short, &long];

        let plot = render_comparison(&graphs).unwrap();

        assert_eq!(plot.series.len(), 2);
        assert!(plot.series.iter().all(|s| s.style == RenderStyle::Line));
        assert_eq!(plot.x_range, (0.0, 4.0));
        assert_eq!(plot.x_ticks, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(plot.y_range, (0.0, 4.0));
    }

    #[test]
    fn series_plot_text_rendering_has_one_row_per_sample() {
        let plot = render(&hyetograph(1.0, &[1.0, 2.0], None), RenderStyle::Bar);

        let text = plot.to_string();

        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().last().unwrap().ends_with(&"#".repeat(TEXT_BAR_WIDTH)));
    }
}
