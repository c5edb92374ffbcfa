use super::*;

const EPS: f64 = 1e-9;

#[test]
fn quarter_labels_roll_over_years() {
    assert_eq!(quarter_label(0), "Q1-2026");
    assert_eq!(quarter_label(3), "Q4-2026");
    assert_eq!(quarter_label(4), "Q1-2027");
    assert_eq!(quarter_label(11), "Q4-2028");
}

#[test]
fn skyron_table_has_twelve_ordered_quarters() {
    let t = ProjectionTable::skyron().unwrap();
    assert_eq!(t.len(), 12);
    assert!(!t.is_empty());
    let q = t.quarters();
    assert_eq!(q.first().map(String::as_str), Some("Q1-2026"));
    assert_eq!(q.last().map(String::as_str), Some("Q4-2028"));
}

#[test]
fn cumulative_revenue_is_running_sum() {
    let t = ProjectionTable::skyron().unwrap();
    let mut prev = 0.0;
    for row in t.rows() {
        assert!((row.cumulative_revenue - (prev + row.revenue_cr)).abs() < EPS);
        prev = row.cumulative_revenue;
    }
    assert!((t.last().cumulative_revenue - 57.85).abs() < EPS);
}

#[test]
fn cash_position_is_running_net_cash() {
    let t = ProjectionTable::skyron().unwrap();
    let mut prev = 0.0;
    for row in t.rows() {
        let expected = prev + (row.revenue_cr * 100.0 - row.investment_lakhs);
        assert!((row.cash_position - expected).abs() < EPS);
        prev = row.cash_position;
    }
    let cash = t.cash_position();
    assert!((cash[0] + 20.0).abs() < EPS);
    assert!((cash[1] + 25.0).abs() < EPS);
    assert!((cash[2] + 12.0).abs() < EPS);
    assert!((cash[3] - 25.0).abs() < EPS);
}

#[test]
fn interpolated_columns_span_their_ramps() {
    let t = ProjectionTable::skyron().unwrap();

    let gm = t.gross_margin();
    assert_eq!(gm[0], 0.65);
    assert_eq!(gm[11], 0.85);
    let step = (0.85 - 0.65) / 11.0;
    for w in gm.windows(2) {
        assert!(w[1] > w[0]);
        assert!((w[1] - w[0] - step).abs() < EPS);
    }

    let cac = t.cac();
    assert_eq!((cac[0], cac[11]), (2000.0, 550.0));
    assert!(cac.windows(2).all(|w| w[1] < w[0]));

    let ltv = t.ltv();
    assert_eq!((ltv[0], ltv[11]), (8000.0, 40000.0));
    assert!(ltv.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn mismatched_column_is_a_config_error() {
    let mut inputs = ProjectionInputs::skyron();
    inputs.investment_lakhs.pop();
    let err = ProjectionTable::build(&inputs).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
    assert!(err.to_string().contains("investment_lakhs"));
}

#[test]
fn empty_projection_is_rejected() {
    let inputs = ProjectionInputs {
        quarters: vec![],
        revenue_cr: vec![],
        investment_lakhs: vec![],
        manufacturing_lakhs: vec![],
        gross_margin: vec![],
        cac: vec![],
        ltv: vec![],
    };
    assert!(ProjectionTable::build(&inputs).is_err());
}

#[test]
fn rebuild_is_bit_identical() {
    let a = ProjectionTable::skyron().unwrap();
    let b = ProjectionTable::skyron().unwrap();
    let bits = |v: Vec<f64>| v.into_iter().map(f64::to_bits).collect::<Vec<_>>();
    assert_eq!(bits(a.cumulative_revenue()), bits(b.cumulative_revenue()));
    assert_eq!(bits(a.cash_position()), bits(b.cash_position()));
}
