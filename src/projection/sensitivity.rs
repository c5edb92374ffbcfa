use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::math::{linspace, prefix_sum};
use crate::projection::constants::{LAKHS_PER_CRORE, MARGIN_SWEEP_UPLIFT};
use crate::projection::table::ProjectionTable;

/// Outcome of re-running the cash computation under one base gross margin.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScenarioResult {
    /// Candidate margin for the first quarter.
    pub base_margin: f64,
    /// Per-quarter margin ramp from `base_margin` to `base_margin + 0.20`.
    pub margins: Vec<f64>,
    /// Cumulative margin-weighted cash per quarter, in lakh.
    pub cash: Vec<f64>,
    /// Cash after the last quarter, in lakh.
    pub final_cash: f64,
}

impl ScenarioResult {
    /// Axis label such as `70%`.
    pub fn label(&self) -> String {
        format!("{}%", (self.base_margin * 100.0).round() as i64)
    }
}

/// Recompute final cash for every candidate base margin, preserving `candidates` order.
///
/// Each scenario is `prefix_sum(revenue_cr * 100 * margin - investment_lakhs)` over a margin
/// ramp `linspace(m, m + 0.20, quarters)`.
pub fn sensitivity_sweep(
    table: &ProjectionTable,
    candidates: &[f64],
) -> ChartResult<Vec<ScenarioResult>> {
    let revenue = table.revenue_cr();
    let investment = table.investment_lakhs();

    candidates
        .iter()
        .map(|&m| {
            if !m.is_finite() {
                return Err(ChartError::config(format!("sweep margin {m} is not finite")));
            }
            let margins = linspace(m, m + MARGIN_SWEEP_UPLIFT, table.len());
            let cash = prefix_sum(
                revenue
                    .iter()
                    .zip(&investment)
                    .zip(&margins)
                    .map(|((rev, inv), gm)| rev * LAKHS_PER_CRORE * gm - inv),
            );
            let final_cash = cash.last().copied().unwrap_or_default();
            Ok(ScenarioResult {
                base_margin: m,
                margins,
                cash,
                final_cash,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/projection/sensitivity.rs"]
mod tests;
