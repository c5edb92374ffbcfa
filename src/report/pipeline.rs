use std::path::{Path, PathBuf};

use crate::chart::figure::Figure;
use crate::chart::raster::SvgRasterizer;
use crate::chart::svg::figure_to_svg;
use crate::encode::gif::{GifSink, GifSinkOpts};
use crate::encode::png::write_png;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ChartError, ChartResult};
use crate::projection::constants::MARGIN_SWEEP;
use crate::projection::payback::PaybackSummary;
use crate::projection::sensitivity::sensitivity_sweep;
use crate::projection::table::ProjectionTable;
use crate::report::artifact::Artifact;
use crate::report::charts;

/// Report output settings.
#[derive(Clone, Debug)]
pub struct ReportOpts {
    /// Directory the artifacts are written into.
    pub out_dir: PathBuf,
    /// Artifacts to produce, rendered in [`Artifact::ALL`] order.
    pub artifacts: Vec<Artifact>,
    /// Stop at the first failed artifact instead of attempting the rest.
    pub fail_fast: bool,
    /// Display time of each animation frame.
    pub gif_frame_delay_ms: u32,
}

impl Default for ReportOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            artifacts: Artifact::ALL.to_vec(),
            fail_fast: false,
            gif_frame_delay_ms: 200,
        }
    }
}

/// Result of rendering one artifact.
#[derive(Debug)]
pub struct ArtifactOutcome {
    /// Which artifact.
    pub artifact: Artifact,
    /// Where it was (or would have been) written.
    pub path: PathBuf,
    /// Failure, if any.
    pub error: Option<ChartError>,
}

impl ArtifactOutcome {
    /// Whether the artifact was written.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes of a report run in render order.
#[derive(Debug, Default)]
pub struct ReportSummary {
    /// One entry per attempted artifact.
    pub outcomes: Vec<ArtifactOutcome>,
}

impl ReportSummary {
    /// Artifacts that were written.
    pub fn written(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.outcomes.iter().filter(|o| o.is_ok())
    }

    /// Artifacts that failed.
    pub fn failed(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// `true` when every attempted artifact was written.
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(ArtifactOutcome::is_ok)
    }
}

/// Build the projection once and render each selected artifact into `opts.out_dir`.
///
/// Configuration errors abort before any file is written. Rendering errors are recorded per
/// artifact; with `fail_fast` the run stops after the first one.
pub fn render_report(opts: &ReportOpts) -> ChartResult<ReportSummary> {
    let table = ProjectionTable::skyron()?;
    render_report_for(&table, opts, &SvgRasterizer::new())
}

/// [`render_report`] over an explicit table and rasterizer.
pub fn render_report_for(
    table: &ProjectionTable,
    opts: &ReportOpts,
    rasterizer: &SvgRasterizer,
) -> ChartResult<ReportSummary> {
    let mut selected = opts.artifacts.clone();
    selected.sort();
    selected.dedup();

    let mut summary = ReportSummary::default();
    for artifact in selected {
        let path = opts.out_dir.join(artifact.file_name());
        let result = render_artifact(table, artifact, &path, opts, rasterizer);
        let failed = result.is_err();
        match &result {
            Ok(()) => tracing::info!(%artifact, path = %path.display(), "wrote artifact"),
            Err(e) => tracing::warn!(%artifact, path = %path.display(), error = %e, "artifact failed"),
        }
        summary.outcomes.push(ArtifactOutcome {
            artifact,
            path,
            error: result.err(),
        });
        if failed && opts.fail_fast {
            break;
        }
    }
    Ok(summary)
}

/// Render a single artifact to `path`.
#[tracing::instrument(skip(table, artifact, opts, rasterizer), fields(%artifact))]
pub fn render_artifact(
    table: &ProjectionTable,
    artifact: Artifact,
    path: &Path,
    opts: &ReportOpts,
    rasterizer: &SvgRasterizer,
) -> ChartResult<()> {
    match artifact {
        Artifact::Revenue => write_figure(&charts::revenue_chart(table), path, rasterizer),
        Artifact::Investment => write_figure(&charts::investment_chart(table), path, rasterizer),
        Artifact::MarginCash => write_figure(&charts::margin_cash_chart(table), path, rasterizer),
        Artifact::CacLtv => write_figure(&charts::cac_ltv_chart(table), path, rasterizer),
        Artifact::Payback => {
            let summary = PaybackSummary::compute(table);
            write_figure(&charts::payback_chart(table, &summary), path, rasterizer)
        }
        Artifact::AnimatedRevenue => {
            let frames = charts::animated_revenue_frames(table);
            let mut sink = GifSink::new(GifSinkOpts::new(path));
            render_frames(&frames, opts.gif_frame_delay_ms, rasterizer, &mut sink)
        }
        Artifact::MarginSensitivity => {
            let scenarios = sensitivity_sweep(table, &MARGIN_SWEEP)?;
            write_figure(
                &charts::margin_sensitivity_chart(&scenarios),
                path,
                rasterizer,
            )
        }
    }
}

fn write_figure(fig: &Figure, path: &Path, rasterizer: &SvgRasterizer) -> ChartResult<()> {
    let svg = figure_to_svg(fig)?;
    let frame = rasterizer.rasterize(&svg, fig.canvas)?;
    write_png(path, frame)
}

/// Rasterize `figures` in order and stream them through `sink`.
pub fn render_frames<S: FrameSink + ?Sized>(
    figures: &[Figure],
    frame_delay_ms: u32,
    rasterizer: &SvgRasterizer,
    sink: &mut S,
) -> ChartResult<()> {
    let first = figures
        .first()
        .ok_or_else(|| ChartError::render("animation has no frames"))?;
    sink.begin(SinkConfig {
        width: first.canvas.width,
        height: first.canvas.height,
        frame_delay_ms,
    })?;
    for (i, fig) in figures.iter().enumerate() {
        let idx = FrameIndex(
            i.try_into()
                .map_err(|_| ChartError::render("frame index overflow"))?,
        );
        let svg = figure_to_svg(fig)?;
        let frame = rasterizer.rasterize(&svg, fig.canvas)?;
        sink.push_frame(idx, &frame)?;
    }
    sink.end()
}

#[cfg(test)]
#[path = "../../tests/unit/report/pipeline.rs"]
mod tests;
