use crate::projection::constants::SEED_CAPITAL_CR;
use crate::projection::table::ProjectionTable;

/// First quarter at which cumulative cash turns positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    /// 0-based quarter index.
    Quarter(usize),
    /// Cash never turns positive within the horizon.
    Never,
}

impl Payback {
    /// The 0-based quarter index, if payback happens.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Quarter(i) => Some(i),
            Self::Never => None,
        }
    }

    /// Title fragment: `Q4` (1-based) or `never`.
    pub fn label(self) -> String {
        match self {
            Self::Quarter(i) => format!("Q{}", i + 1),
            Self::Never => "never".to_string(),
        }
    }
}

/// Final cumulative revenue as a percentage of seed capital.
pub fn roi_percent(table: &ProjectionTable) -> f64 {
    table.last().cumulative_revenue / SEED_CAPITAL_CR * 100.0
}

/// Smallest quarter index with `cash_position > 0`.
pub fn payback_quarter(table: &ProjectionTable) -> Payback {
    table
        .rows()
        .iter()
        .position(|r| r.cash_position > 0.0)
        .map_or(Payback::Never, Payback::Quarter)
}

/// ROI and payback scalars used for chart titling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PaybackSummary {
    /// ROI percentage.
    pub roi_percent: f64,
    /// Payback quarter.
    pub payback: Payback,
}

impl PaybackSummary {
    /// Compute both scalars from the table.
    pub fn compute(table: &ProjectionTable) -> Self {
        Self {
            roi_percent: roi_percent(table),
            payback: payback_quarter(table),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/payback.rs"]
mod tests;
