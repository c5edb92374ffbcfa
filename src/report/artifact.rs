use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ChartError;

/// One of the seven output files, in render order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Artifact {
    /// Quarterly bars with cumulative revenue line.
    Revenue,
    /// Investment and manufacturing spend bars.
    Investment,
    /// Gross margin and cash position on twin axes.
    MarginCash,
    /// CAC and LTV lines.
    CacLtv,
    /// Cash position with ROI/payback title and annotation.
    Payback,
    /// Revenue bars revealed quarter by quarter.
    AnimatedRevenue,
    /// End cash per gross-margin scenario.
    MarginSensitivity,
}

impl Artifact {
    /// All artifacts in render order.
    pub const ALL: [Artifact; 7] = [
        Artifact::Revenue,
        Artifact::Investment,
        Artifact::MarginCash,
        Artifact::CacLtv,
        Artifact::Payback,
        Artifact::AnimatedRevenue,
        Artifact::MarginSensitivity,
    ];

    /// Fixed output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Revenue => "skyron_revenue.png",
            Self::Investment => "skyron_investment.png",
            Self::MarginCash => "skyron_margin_cash.png",
            Self::CacLtv => "skyron_cac_ltv.png",
            Self::Payback => "skyron_payback.png",
            Self::AnimatedRevenue => "skyron_animated_revenue.gif",
            Self::MarginSensitivity => "skyron_margin_sensitivity.png",
        }
    }

    /// Short name accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Investment => "investment",
            Self::MarginCash => "margin-cash",
            Self::CacLtv => "cac-ltv",
            Self::Payback => "payback",
            Self::AnimatedRevenue => "animated-revenue",
            Self::MarginSensitivity => "margin-sensitivity",
        }
    }

    /// Whether the artifact is a multi-frame animation.
    pub fn is_animated(self) -> bool {
        matches!(self, Self::AnimatedRevenue)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Artifact {
    type Err = ChartError;

    /// Accepts either the slug (`margin-cash`) or the file name (`skyron_margin_cash.png`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.slug().eq_ignore_ascii_case(s) || a.file_name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|a| a.slug()).collect();
                ChartError::config(format!(
                    "unknown artifact '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/artifact.rs"]
mod tests;
