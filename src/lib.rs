//! Skyron projection charts.
//!
//! Builds a fixed 12-quarter financial projection (revenue, investment, manufacturing spend,
//! gross margin, CAC, LTV), derives running totals, and renders seven chart artifacts.
//!
//! # Pipeline overview
//!
//! 1. **Project**: literal inputs -> [`ProjectionTable`] with cumulative revenue and cash
//! 2. **Analyse**: [`sensitivity_sweep`] over alternative gross margins, [`PaybackSummary`]
//! 3. **Describe**: table columns -> [`Figure`] (one pure function per chart, see [`charts`])
//! 4. **Render**: `Figure -> SVG -> FrameRGBA` via `usvg`/`resvg`
//! 5. **Encode**: PNG files, or an animated GIF through a [`FrameSink`]
//!
//! [`render_report`] runs all of it with [`ReportOpts`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod encode;
mod foundation;
mod projection;
mod report;

pub use chart::figure::{
    Annotation, AxisSide, BarLayer, Dash, Figure, HLine, Layer, LineLayer, Marker, ValueAxis,
};
pub use chart::raster::SvgRasterizer;
pub use chart::style;
pub use chart::svg::figure_to_svg;
pub use encode::gif::{GifSink, GifSinkOpts};
pub use encode::png::{ensure_parent_dir, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, FrameIndex, FrameRGBA, Point, Rect, Rgba8};
pub use foundation::error::{ChartError, ChartResult};
pub use foundation::math::{linspace, prefix_sum};
pub use projection::constants;
pub use projection::payback::{Payback, PaybackSummary, payback_quarter, roi_percent};
pub use projection::sensitivity::{ScenarioResult, sensitivity_sweep};
pub use projection::table::{ProjectionInputs, ProjectionRow, ProjectionTable, quarter_label};
pub use report::artifact::Artifact;
pub use report::charts;
pub use report::metrics::{MetricsReport, ScenarioPoint};
pub use report::pipeline::{
    ArtifactOutcome, ReportOpts, ReportSummary, render_artifact, render_frames, render_report,
    render_report_for,
};
