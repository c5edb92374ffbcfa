use super::*;

#[test]
fn linspace_hits_both_endpoints() {
    let xs = linspace(0.65, 0.85, 12);
    assert_eq!(xs.len(), 12);
    assert_eq!(xs[0], 0.65);
    assert_eq!(xs[11], 0.85);
    for w in xs.windows(2) {
        assert!(w[1] > w[0]);
    }
}

#[test]
fn linspace_degenerate_counts() {
    assert!(linspace(1.0, 2.0, 0).is_empty());
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
}

#[test]
fn prefix_sum_keeps_order_and_sign() {
    assert_eq!(
        prefix_sum([-20.0, -5.0, 13.0, 37.0]),
        vec![-20.0, -25.0, -12.0, 25.0]
    );
    assert!(prefix_sum(std::iter::empty::<f64>()).is_empty());
}

#[test]
fn nice_step_rounds_up_to_decade_multiples() {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(close(nice_step(0.7), 1.0));
    assert!(close(nice_step(1.3), 2.0));
    assert!(close(nice_step(23.0), 25.0));
    assert!(close(nice_step(4100.0), 5000.0));
    assert_eq!(nice_step(0.0), 1.0);
}

#[test]
fn nice_range_covers_data() {
    let (lo, hi, step) = nice_range(-25.0, 5725.0, 6);
    assert!(lo <= -25.0);
    assert!(hi >= 5725.0);
    assert!(step > 0.0);

    let (lo, hi, _) = nice_range(0.0, 0.0, 5);
    assert!(lo < 0.0 && hi > 0.0);
}

#[test]
fn demultiply_leaves_opaque_and_transparent_pixels() {
    let mut px = vec![10, 20, 30, 255, 0, 0, 0, 0];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}
