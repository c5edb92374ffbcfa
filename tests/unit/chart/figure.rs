use super::*;
use crate::chart::style::{NAVY, SKY_BLUE};

fn cats(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

fn bars(values: Vec<f64>) -> BarLayer {
    BarLayer {
        label: Some("bars".to_string()),
        values,
        color: SKY_BLUE,
        axis: AxisSide::Left,
    }
}

#[test]
fn validate_rejects_misaligned_layer() {
    let fig = Figure::new(Canvas::from_inches(8, 5, 100), cats(3)).bars(bars(vec![1.0, 2.0]));
    let err = fig.validate().unwrap_err();
    assert!(err.to_string().contains("2 values for 3 categories"));
}

#[test]
fn validate_rejects_right_layer_without_right_axis() {
    let fig = Figure::new(Canvas::from_inches(8, 5, 100), cats(2)).line(LineLayer {
        label: None,
        values: vec![1.0, 2.0],
        color: NAVY,
        dash: Dash::Solid,
        marker: Marker::None,
        axis: AxisSide::Right,
    });
    assert!(fig.validate().is_err());
    assert!(fig.right_axis(ValueAxis::default()).validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_annotation() {
    let fig = Figure::new(Canvas::from_inches(8, 5, 100), cats(2)).annotate(Annotation {
        category: 2,
        y: 0.0,
        text: "here".to_string(),
        color: NAVY,
        offset_px: 10.0,
        axis: AxisSide::Left,
    });
    assert!(fig.validate().is_err());
}

#[test]
fn empty_categories_are_rejected() {
    assert!(
        Figure::new(Canvas::from_inches(8, 5, 100), vec![])
            .validate()
            .is_err()
    );
}

#[test]
fn bar_extent_includes_zero_baseline() {
    let fig = Figure::new(Canvas::from_inches(8, 5, 100), cats(3)).bars(bars(vec![2.0, 3.0, 5.0]));
    assert_eq!(fig.data_extent(AxisSide::Left), Some((0.0, 5.0)));
    assert_eq!(fig.data_extent(AxisSide::Right), None);
}

#[test]
fn line_extent_follows_data_and_hlines() {
    let fig = Figure::new(Canvas::from_inches(8, 5, 100), cats(3))
        .line(LineLayer {
            label: None,
            values: vec![-25.0, 10.0, 40.0],
            color: NAVY,
            dash: Dash::Solid,
            marker: Marker::Circle,
            axis: AxisSide::Left,
        })
        .hline(HLine {
            y: 50.0,
            color: NAVY,
            dash: Dash::Dotted,
            axis: AxisSide::Left,
        });
    assert_eq!(fig.data_extent(AxisSide::Left), Some((-25.0, 50.0)));
}
