//! Fixed projection inputs and named parameters.

/// Number of quarters in the projection horizon.
pub const QUARTER_COUNT: usize = 12;

/// Calendar year of the first projected quarter.
pub const FIRST_YEAR: u32 = 2026;

/// Quarters per fiscal year, used for labelling.
pub const QUARTERS_PER_YEAR: usize = 4;

/// Lakh per crore; converts `revenue_cr` into the lakh unit used for cash.
pub const LAKHS_PER_CRORE: f64 = 100.0;

/// Seed capital in crore (₹60 lakh), the ROI denominator.
pub const SEED_CAPITAL_CR: f64 = 0.6;

/// Quarterly revenue in crore.
pub const REVENUE_CR: [f64; QUARTER_COUNT] =
    [0.0, 0.10, 0.25, 0.5, 1.0, 1.5, 2.5, 3.0, 5.0, 7.0, 15.0, 22.0];

/// Capital injected per quarter in lakh.
pub const INVESTMENT_LAKHS: [f64; QUARTER_COUNT] =
    [20.0, 15.0, 12.0, 13.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

/// Manufacturing spend per quarter in lakh.
pub const MANUFACTURING_LAKHS: [f64; QUARTER_COUNT] =
    [7.4, 5.6, 4.4, 4.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

/// Gross margin ramp endpoints (first, last quarter).
pub const GROSS_MARGIN_RAMP: (f64, f64) = (0.65, 0.85);

/// Customer acquisition cost ramp endpoints in ₹ (decreasing).
pub const CAC_RAMP: (f64, f64) = (2000.0, 550.0);

/// Customer lifetime value ramp endpoints in ₹ (increasing).
pub const LTV_RAMP: (f64, f64) = (8000.0, 40000.0);

/// Base gross margins evaluated by the sensitivity sweep, in x-axis order.
pub const MARGIN_SWEEP: [f64; 5] = [0.65, 0.70, 0.75, 0.80, 0.85];

/// Margin gained from first to last quarter in every sweep scenario.
pub const MARGIN_SWEEP_UPLIFT: f64 = 0.20;
