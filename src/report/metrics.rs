use crate::foundation::error::{ChartError, ChartResult};
use crate::projection::constants::MARGIN_SWEEP;
use crate::projection::payback::PaybackSummary;
use crate::projection::sensitivity::{ScenarioResult, sensitivity_sweep};
use crate::projection::table::{ProjectionRow, ProjectionTable};

/// One sweep point as written to the metrics dump.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScenarioPoint {
    /// Axis label, e.g. `70%`.
    pub label: String,
    /// Candidate margin for the first quarter.
    pub base_margin: f64,
    /// Cash after the last quarter, in lakh.
    pub final_cash: f64,
}

impl From<&ScenarioResult> for ScenarioPoint {
    fn from(s: &ScenarioResult) -> Self {
        Self {
            label: s.label(),
            base_margin: s.base_margin,
            final_cash: s.final_cash,
        }
    }
}

/// Everything the charts are drawn from, for inspection without rendering.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MetricsReport {
    /// Projection rows with derived running sums.
    pub rows: Vec<ProjectionRow>,
    /// Gross-margin sweep in sweep order.
    pub sensitivity: Vec<ScenarioPoint>,
    /// ROI and payback scalars.
    pub summary: PaybackSummary,
}

impl MetricsReport {
    /// Compute the report from `table`.
    pub fn compute(table: &ProjectionTable) -> ChartResult<Self> {
        let sensitivity = sensitivity_sweep(table, &MARGIN_SWEEP)?
            .iter()
            .map(ScenarioPoint::from)
            .collect();
        Ok(Self {
            rows: table.rows().to_vec(),
            sensitivity,
            summary: PaybackSummary::compute(table),
        })
    }

    /// The fixed Skyron projection's metrics.
    pub fn skyron() -> ChartResult<Self> {
        Self::compute(&ProjectionTable::skyron()?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::encode(format!("serialize metrics: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/metrics.rs"]
mod tests;
