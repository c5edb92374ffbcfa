//! The seven report charts as pure functions from projection data to [`Figure`]s.

use crate::chart::figure::{
    Annotation, AxisSide, BarLayer, Dash, Figure, HLine, LineLayer, Marker, ValueAxis,
};
use crate::chart::style::{
    BLUE, CORAL, DARK_RED, GOLD, GRAY, GREEN, NAVY, PURPLE, RED, ROYAL_BLUE, SKY_BLUE, TEAL,
};
use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::projection::payback::PaybackSummary;
use crate::projection::sensitivity::ScenarioResult;
use crate::projection::table::ProjectionTable;

const DPI: u32 = 100;

/// 10x7 in. figure used by the four overview charts.
pub const WIDE_CANVAS: Canvas = Canvas::from_inches(10, 7, DPI);
/// 8x5 in. figure used by the payback and sensitivity charts.
pub const COMPACT_CANVAS: Canvas = Canvas::from_inches(8, 5, DPI);
/// 10x6 in. figure used by the animation.
pub const ANIMATION_CANVAS: Canvas = Canvas::from_inches(10, 6, DPI);

fn line(label: Option<&str>, values: Vec<f64>, color: Rgba8) -> LineLayer {
    LineLayer {
        label: label.map(str::to_string),
        values,
        color,
        dash: Dash::Solid,
        marker: Marker::None,
        axis: AxisSide::Left,
    }
}

/// Quarterly revenue bars with a dashed cumulative revenue line.
pub fn revenue_chart(table: &ProjectionTable) -> Figure {
    Figure::new(WIDE_CANVAS, table.quarters())
        .title("Projected Quarterly & Cumulative Revenue")
        .x_label("Quarter")
        .y_label("Revenue (Cr)")
        .bars(BarLayer {
            label: Some("Quarterly Revenue".to_string()),
            values: table.revenue_cr(),
            color: SKY_BLUE,
            axis: AxisSide::Left,
        })
        .line(LineLayer {
            dash: Dash::Dashed,
            marker: Marker::Circle,
            ..line(
                Some("Cumulative Revenue"),
                table.cumulative_revenue(),
                NAVY,
            )
        })
        .with_legend()
}

/// Investment bars overlaid by translucent manufacturing spend bars.
pub fn investment_chart(table: &ProjectionTable) -> Figure {
    Figure::new(WIDE_CANVAS, table.quarters())
        .title("Quarterly Investment & Manufacturing Spend")
        .x_label("Quarter")
        .y_label("Investment (Lakh ₹)")
        .bars(BarLayer {
            label: Some("Total Investment".to_string()),
            values: table.investment_lakhs(),
            color: CORAL,
            axis: AxisSide::Left,
        })
        .bars(BarLayer {
            label: Some("Manufacturing".to_string()),
            values: table.manufacturing_lakhs(),
            color: GOLD.with_alpha(0.7),
            axis: AxisSide::Left,
        })
        .with_legend()
}

/// Gross margin (%) on the left axis, cumulative cash on the right.
pub fn margin_cash_chart(table: &ProjectionTable) -> Figure {
    let margin_pct = table.gross_margin().iter().map(|m| m * 100.0).collect();
    Figure::new(WIDE_CANVAS, table.quarters())
        .title("Margin Improvement & Cash Flow Evolution")
        .left_axis(ValueAxis {
            label: Some("Gross Margin (%)".to_string()),
            color: Some(GREEN),
            range: None,
        })
        .right_axis(ValueAxis {
            label: Some("Cumulative Cash (₹ Lakh)".to_string()),
            color: Some(DARK_RED),
            range: None,
        })
        .line(LineLayer {
            marker: Marker::Triangle,
            ..line(Some("Gross Margin (%)"), margin_pct, GREEN)
        })
        .line(LineLayer {
            marker: Marker::Star,
            axis: AxisSide::Right,
            ..line(Some("Cash Position"), table.cash_position(), DARK_RED)
        })
        .with_legend()
}

/// Falling CAC against rising LTV.
pub fn cac_ltv_chart(table: &ProjectionTable) -> Figure {
    Figure::new(WIDE_CANVAS, table.quarters())
        .title("CAC Reduction & LTV Growth")
        .x_label("Quarter")
        .y_label("₹")
        .line(line(Some("Customer Acquisition Cost"), table.cac(), RED))
        .line(line(Some("Lifetime Value"), table.ltv(), BLUE))
        .with_legend()
}

/// Title line of the payback chart.
pub fn payback_title(summary: &PaybackSummary) -> String {
    format!(
        "Cumulative Cash Position | ROI: {:.1}% | Payback: {}",
        summary.roi_percent,
        summary.payback.label()
    )
}

/// Cash position with a zero reference line and a payback marker.
///
/// The "Payback Occurs" note is only drawn when cash actually turns positive.
pub fn payback_chart(table: &ProjectionTable, summary: &PaybackSummary) -> Figure {
    let cash = table.cash_position();
    let annotation = summary.payback.index().map(|i| Annotation {
        category: i,
        y: cash[i],
        text: "Payback Occurs".to_string(),
        color: RED,
        offset_px: 10.0,
        axis: AxisSide::Left,
    });

    let fig = Figure::new(COMPACT_CANVAS, table.quarters())
        .title(payback_title(summary))
        .y_label("Cumulative Cash (₹ Lakh)")
        .hline(HLine {
            y: 0.0,
            color: GRAY,
            dash: Dash::Dotted,
            axis: AxisSide::Left,
        })
        .line(line(None, cash, ROYAL_BLUE));
    match annotation {
        Some(a) => fig.annotate(a),
        None => fig,
    }
}

/// Frame `idx` of the revenue animation: bars up to and including quarter `idx`.
///
/// The y range is fixed from the full revenue series so every frame shares one scale.
pub fn animated_revenue_frame(table: &ProjectionTable, idx: FrameIndex) -> Figure {
    let revenue = table.revenue_cr();
    let peak = revenue.iter().copied().fold(0.0, f64::max);
    let shown = idx.0 as usize;
    let values = revenue
        .iter()
        .enumerate()
        .map(|(i, &v)| if i <= shown { v } else { 0.0 })
        .collect();

    Figure::new(ANIMATION_CANVAS, table.quarters())
        .title(format!(
            "Quarterly Revenue Progression (Q{} Highlighted)",
            shown + 1
        ))
        .left_axis(ValueAxis {
            label: None,
            color: None,
            range: Some((0.0, peak)),
        })
        .bars(BarLayer {
            label: None,
            values,
            color: TEAL,
            axis: AxisSide::Left,
        })
}

/// Every frame of the revenue animation, one per quarter.
pub fn animated_revenue_frames(table: &ProjectionTable) -> Vec<Figure> {
    (0..table.len() as u32)
        .map(|i| animated_revenue_frame(table, FrameIndex(i)))
        .collect()
}

/// End cash for each gross-margin scenario, in sweep order.
pub fn margin_sensitivity_chart(scenarios: &[ScenarioResult]) -> Figure {
    let labels = scenarios.iter().map(ScenarioResult::label).collect();
    let end_cash = scenarios.iter().map(|s| s.final_cash).collect();
    Figure::new(COMPACT_CANVAS, labels)
        .title("End Cash Position vs Gross Margin Scenario")
        .x_label("Gross Margin (%)")
        .y_label("End Cash (₹ Lakh)")
        .line(LineLayer {
            marker: Marker::Circle,
            ..line(None, end_cash, PURPLE)
        })
}

#[cfg(test)]
#[path = "../../tests/unit/report/charts.rs"]
mod tests;
