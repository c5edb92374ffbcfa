use super::*;
use crate::chart::figure::Layer;
use crate::projection::constants::MARGIN_SWEEP;
use crate::projection::payback::Payback;
use crate::projection::sensitivity::sensitivity_sweep;
use crate::projection::table::ProjectionInputs;

fn table() -> ProjectionTable {
    ProjectionTable::skyron().unwrap()
}

fn layer_values(layer: &Layer) -> &[f64] {
    match layer {
        Layer::Bars(b) => &b.values,
        Layer::Line(l) => &l.values,
    }
}

#[test]
fn every_static_chart_is_valid() {
    let t = table();
    let summary = PaybackSummary::compute(&t);
    let scenarios = sensitivity_sweep(&t, &MARGIN_SWEEP).unwrap();
    for fig in [
        revenue_chart(&t),
        investment_chart(&t),
        margin_cash_chart(&t),
        cac_ltv_chart(&t),
        payback_chart(&t, &summary),
        margin_sensitivity_chart(&scenarios),
    ] {
        fig.validate().unwrap();
        assert!(!fig.title.is_empty());
    }
}

#[test]
fn revenue_chart_pairs_bars_with_cumulative_line() {
    let t = table();
    let fig = revenue_chart(&t);
    assert_eq!(fig.canvas, WIDE_CANVAS);
    assert_eq!(fig.categories, t.quarters());
    assert!(matches!(fig.layers[0], Layer::Bars(_)));
    match &fig.layers[1] {
        Layer::Line(l) => {
            assert_eq!(l.values, t.cumulative_revenue());
            assert_eq!(l.dash, Dash::Dashed);
            assert_eq!(l.marker, Marker::Circle);
        }
        other => panic!("expected line, got {other:?}"),
    }
    assert!(fig.legend);
}

#[test]
fn investment_chart_overlays_translucent_manufacturing() {
    let fig = investment_chart(&table());
    match &fig.layers[1] {
        Layer::Bars(b) => {
            assert_eq!(b.values[0], 7.4);
            assert!(b.color.a < 255);
        }
        other => panic!("expected bars, got {other:?}"),
    }
}

#[test]
fn margin_cash_chart_uses_twin_axes() {
    let t = table();
    let fig = margin_cash_chart(&t);
    assert!(fig.right.is_some());
    let margin = layer_values(&fig.layers[0]);
    assert!((margin[0] - 65.0).abs() < 1e-9);
    assert!((margin[11] - 85.0).abs() < 1e-9);
    match &fig.layers[1] {
        Layer::Line(l) => {
            assert_eq!(l.axis, AxisSide::Right);
            assert_eq!(l.values, t.cash_position());
        }
        other => panic!("expected line, got {other:?}"),
    }
}

#[test]
fn payback_chart_titles_and_annotates_payback_quarter() {
    let t = table();
    let summary = PaybackSummary::compute(&t);
    let fig = payback_chart(&t, &summary);
    assert_eq!(
        fig.title,
        "Cumulative Cash Position | ROI: 9641.7% | Payback: Q4"
    );
    assert_eq!(fig.annotations.len(), 1);
    assert_eq!(fig.annotations[0].category, 3);
    assert_eq!(fig.annotations[0].y, t.cash_position()[3]);
    assert_eq!(fig.hlines[0].y, 0.0);
}

#[test]
fn payback_chart_without_payback_has_no_annotation() {
    let mut inputs = ProjectionInputs::skyron();
    inputs.revenue_cr = vec![0.0; 12];
    let t = ProjectionTable::build(&inputs).unwrap();
    let summary = PaybackSummary::compute(&t);
    assert_eq!(summary.payback, Payback::Never);
    let fig = payback_chart(&t, &summary);
    assert!(fig.annotations.is_empty());
    assert!(fig.title.ends_with("Payback: never"));
}

#[test]
fn animation_reveals_one_more_quarter_per_frame() {
    let t = table();
    let frames = animated_revenue_frames(&t);
    assert_eq!(frames.len(), 12);
    let revenue = t.revenue_cr();
    for (i, fig) in frames.iter().enumerate() {
        assert_eq!(
            fig.title,
            format!("Quarterly Revenue Progression (Q{} Highlighted)", i + 1)
        );
        assert_eq!(fig.canvas, ANIMATION_CANVAS);
        let values = layer_values(&fig.layers[0]);
        for (q, &v) in values.iter().enumerate() {
            let expected = if q <= i { revenue[q] } else { 0.0 };
            assert_eq!(v, expected);
        }
        assert_eq!(fig.left.range, Some((0.0, 22.0)));
    }
}

#[test]
fn sensitivity_chart_follows_sweep_order() {
    let t = table();
    let scenarios = sensitivity_sweep(&t, &MARGIN_SWEEP).unwrap();
    let fig = margin_sensitivity_chart(&scenarios);
    assert_eq!(fig.categories, ["65%", "70%", "75%", "80%", "85%"]);
    let values = layer_values(&fig.layers[0]);
    for (v, s) in values.iter().zip(&scenarios) {
        assert_eq!(*v, s.final_cash);
    }
}
