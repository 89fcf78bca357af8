//! Qualitative interpretation bands for R² and Pearson's r.
//!
//! Thresholds are inclusive lower bounds checked from the top down.

use serde::Serialize;

/// How much of the variance a model explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RSquaredBand {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl RSquaredBand {
    pub fn from_r_squared(r2: f64) -> Self {
        if r2 >= 0.9 {
            RSquaredBand::Strong
        } else if r2 >= 0.7 {
            RSquaredBand::Moderate
        } else if r2 >= 0.5 {
            RSquaredBand::Weak
        } else {
            RSquaredBand::Negligible
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RSquaredBand::Strong => "strong",
            RSquaredBand::Moderate => "moderate",
            RSquaredBand::Weak => "weak",
            RSquaredBand::Negligible => "negligible",
        }
    }
}

/// Strength of linear association, judged on `|r|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PearsonBand {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl PearsonBand {
    pub fn from_pearson(r: f64) -> Self {
        let r = r.abs();
        if r >= 0.9 {
            PearsonBand::VeryStrong
        } else if r >= 0.7 {
            PearsonBand::Strong
        } else if r >= 0.5 {
            PearsonBand::Moderate
        } else if r >= 0.3 {
            PearsonBand::Weak
        } else {
            PearsonBand::Negligible
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PearsonBand::VeryStrong => "very strong",
            PearsonBand::Strong => "strong",
            PearsonBand::Moderate => "moderate",
            PearsonBand::Weak => "weak",
            PearsonBand::Negligible => "negligible",
        }
    }
}
