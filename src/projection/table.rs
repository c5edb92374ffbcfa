use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::math::{linspace, prefix_sum};
use crate::projection::constants::{
    CAC_RAMP, FIRST_YEAR, GROSS_MARGIN_RAMP, INVESTMENT_LAKHS, LAKHS_PER_CRORE, LTV_RAMP,
    MANUFACTURING_LAKHS, QUARTER_COUNT, QUARTERS_PER_YEAR, REVENUE_CR,
};

/// Label for the 0-based quarter `idx`, e.g. `Q1-2026` for 0 and `Q4-2028` for 11.
pub fn quarter_label(idx: usize) -> String {
    let q = idx % QUARTERS_PER_YEAR + 1;
    let year = FIRST_YEAR as usize + idx / QUARTERS_PER_YEAR;
    format!("Q{q}-{year}")
}

/// Raw per-quarter input columns, aligned by quarter index.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProjectionInputs {
    /// Quarter labels in chronological order.
    pub quarters: Vec<String>,
    /// Revenue in crore.
    pub revenue_cr: Vec<f64>,
    /// Capital injected in lakh.
    pub investment_lakhs: Vec<f64>,
    /// Manufacturing spend in lakh.
    pub manufacturing_lakhs: Vec<f64>,
    /// Gross margin in `[0, 1]`.
    pub gross_margin: Vec<f64>,
    /// Customer acquisition cost in ₹.
    pub cac: Vec<f64>,
    /// Customer lifetime value in ₹.
    pub ltv: Vec<f64>,
}

impl ProjectionInputs {
    /// The fixed Skyron projection literals.
    pub fn skyron() -> Self {
        Self {
            quarters: (0..QUARTER_COUNT).map(quarter_label).collect(),
            revenue_cr: REVENUE_CR.to_vec(),
            investment_lakhs: INVESTMENT_LAKHS.to_vec(),
            manufacturing_lakhs: MANUFACTURING_LAKHS.to_vec(),
            gross_margin: linspace(GROSS_MARGIN_RAMP.0, GROSS_MARGIN_RAMP.1, QUARTER_COUNT),
            cac: linspace(CAC_RAMP.0, CAC_RAMP.1, QUARTER_COUNT),
            ltv: linspace(LTV_RAMP.0, LTV_RAMP.1, QUARTER_COUNT),
        }
    }

    fn validate(&self) -> ChartResult<()> {
        let n = self.quarters.len();
        let columns = [
            ("revenue_cr", self.revenue_cr.len()),
            ("investment_lakhs", self.investment_lakhs.len()),
            ("manufacturing_lakhs", self.manufacturing_lakhs.len()),
            ("gross_margin", self.gross_margin.len()),
            ("cac", self.cac.len()),
            ("ltv", self.ltv.len()),
        ];
        for (name, len) in columns {
            if len != n {
                return Err(ChartError::config(format!(
                    "column '{name}' has {len} values, expected {n} (one per quarter)"
                )));
            }
        }
        if n == 0 {
            return Err(ChartError::config("projection has no quarters"));
        }
        Ok(())
    }
}

/// One quarter of the projection, including derived running sums.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProjectionRow {
    /// Quarter label.
    pub quarter: String,
    /// Revenue in crore.
    pub revenue_cr: f64,
    /// Capital injected in lakh.
    pub investment_lakhs: f64,
    /// Manufacturing spend in lakh.
    pub manufacturing_lakhs: f64,
    /// Gross margin in `[0, 1]`.
    pub gross_margin: f64,
    /// Customer acquisition cost in ₹.
    pub cac: f64,
    /// Customer lifetime value in ₹.
    pub ltv: f64,
    /// Revenue summed over this and all earlier quarters, in crore.
    pub cumulative_revenue: f64,
    /// Net cash (revenue in lakh minus investment) summed to this quarter, in lakh.
    pub cash_position: f64,
}

/// Chronologically ordered projection. Immutable once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ProjectionTable {
    rows: Vec<ProjectionRow>,
}

impl ProjectionTable {
    /// Build the table from aligned input columns and compute the running sums.
    ///
    /// Fails with [`ChartError::Config`] when any column length differs from the number of
    /// quarter labels.
    #[tracing::instrument(skip(inputs), fields(quarters = inputs.quarters.len()))]
    pub fn build(inputs: &ProjectionInputs) -> ChartResult<Self> {
        inputs.validate()?;

        let cumulative_revenue = prefix_sum(inputs.revenue_cr.iter().copied());
        let cash_position = prefix_sum(
            inputs
                .revenue_cr
                .iter()
                .zip(&inputs.investment_lakhs)
                .map(|(rev, inv)| rev * LAKHS_PER_CRORE - inv),
        );

        let rows = (0..inputs.quarters.len())
            .map(|i| ProjectionRow {
                quarter: inputs.quarters[i].clone(),
                revenue_cr: inputs.revenue_cr[i],
                investment_lakhs: inputs.investment_lakhs[i],
                manufacturing_lakhs: inputs.manufacturing_lakhs[i],
                gross_margin: inputs.gross_margin[i],
                cac: inputs.cac[i],
                ltv: inputs.ltv[i],
                cumulative_revenue: cumulative_revenue[i],
                cash_position: cash_position[i],
            })
            .collect();

        tracing::debug!(
            final_cash = cash_position.last().copied().unwrap_or_default(),
            "projection table built"
        );
        Ok(Self { rows })
    }

    /// The fixed Skyron projection.
    pub fn skyron() -> ChartResult<Self> {
        Self::build(&ProjectionInputs::skyron())
    }

    /// Rows in chronological order.
    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    /// Number of quarters.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Last quarter's row.
    pub fn last(&self) -> &ProjectionRow {
        // `build` rejects empty inputs.
        &self.rows[self.rows.len() - 1]
    }

    /// Quarter labels.
    pub fn quarters(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.quarter.clone()).collect()
    }

    /// Revenue column in crore.
    pub fn revenue_cr(&self) -> Vec<f64> {
        self.column(|r| r.revenue_cr)
    }

    /// Investment column in lakh.
    pub fn investment_lakhs(&self) -> Vec<f64> {
        self.column(|r| r.investment_lakhs)
    }

    /// Manufacturing spend column in lakh.
    pub fn manufacturing_lakhs(&self) -> Vec<f64> {
        self.column(|r| r.manufacturing_lakhs)
    }

    /// Gross margin column in `[0, 1]`.
    pub fn gross_margin(&self) -> Vec<f64> {
        self.column(|r| r.gross_margin)
    }

    /// CAC column in ₹.
    pub fn cac(&self) -> Vec<f64> {
        self.column(|r| r.cac)
    }

    /// LTV column in ₹.
    pub fn ltv(&self) -> Vec<f64> {
        self.column(|r| r.ltv)
    }

    /// Cumulative revenue column in crore.
    pub fn cumulative_revenue(&self) -> Vec<f64> {
        self.column(|r| r.cumulative_revenue)
    }

    /// Cash position column in lakh.
    pub fn cash_position(&self) -> Vec<f64> {
        self.column(|r| r.cash_position)
    }

    fn column(&self, f: impl Fn(&ProjectionRow) -> f64) -> Vec<f64> {
        self.rows.iter().map(f).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/table.rs"]
mod tests;
