use super::*;
use crate::encode::sink::InMemorySink;

fn opts(out_dir: &Path, artifacts: Vec<Artifact>) -> ReportOpts {
    ReportOpts {
        out_dir: out_dir.to_path_buf(),
        artifacts,
        ..ReportOpts::default()
    }
}

#[test]
fn default_opts_render_everything_into_cwd() {
    let o = ReportOpts::default();
    assert_eq!(o.out_dir, PathBuf::from("."));
    assert_eq!(o.artifacts, Artifact::ALL);
    assert!(!o.fail_fast);
    assert_eq!(o.gif_frame_delay_ms, 200);
}

#[test]
fn static_artifact_is_written_at_canvas_size() {
    let dir = tempfile::tempdir().unwrap();
    let table = ProjectionTable::skyron().unwrap();
    let summary = render_report_for(
        &table,
        &opts(dir.path(), vec![Artifact::Payback]),
        &SvgRasterizer::without_fonts(),
    )
    .unwrap();

    assert!(summary.all_ok());
    assert_eq!(summary.written().count(), 1);
    let path = dir.path().join("skyron_payback.png");
    assert_eq!(summary.outcomes[0].path, path);
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (800, 500));
}

#[test]
fn selection_is_deduplicated_and_rendered_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let table = ProjectionTable::skyron().unwrap();
    let summary = render_report_for(
        &table,
        &opts(
            dir.path(),
            vec![
                Artifact::MarginSensitivity,
                Artifact::Revenue,
                Artifact::MarginSensitivity,
            ],
        ),
        &SvgRasterizer::without_fonts(),
    )
    .unwrap();
    let order: Vec<Artifact> = summary.outcomes.iter().map(|o| o.artifact).collect();
    assert_eq!(order, [Artifact::Revenue, Artifact::MarginSensitivity]);
}

#[test]
fn animation_frames_stream_through_sink_in_order() {
    let table = ProjectionTable::skyron().unwrap();
    let frames = charts::animated_revenue_frames(&table);
    let mut sink = InMemorySink::new();
    render_frames(&frames[..3], 150, &SvgRasterizer::without_fonts(), &mut sink).unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.frame_delay_ms), (1000, 600, 150));
    let idx: Vec<u32> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, [0, 1, 2]);
    assert!(sink.ended());
}

#[test]
fn empty_animation_is_an_error() {
    let mut sink = InMemorySink::new();
    assert!(render_frames(&[], 200, &SvgRasterizer::without_fonts(), &mut sink).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn failures_are_collected_unless_fail_fast() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let out_dir = blocker.join("charts");
    let table = ProjectionTable::skyron().unwrap();
    let selection = vec![Artifact::Revenue, Artifact::CacLtv];
    let raster = SvgRasterizer::without_fonts();

    let summary = render_report_for(&table, &opts(&out_dir, selection.clone()), &raster).unwrap();
    assert_eq!(summary.outcomes.len(), 2);
    assert_eq!(summary.failed().count(), 2);
    assert!(!summary.all_ok());

    let mut fast = opts(&out_dir, selection);
    fast.fail_fast = true;
    let summary = render_report_for(&table, &fast, &raster).unwrap();
    assert_eq!(summary.outcomes.len(), 1);
    assert!(summary.outcomes[0].error.is_some());
}
