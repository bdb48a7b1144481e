use core_types::{BonusPolicyId, RevenuePolicyId, RoundingMode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing section falls back to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub policies: Policies,
    pub logging: Logging,
}

/// Shapes the report produced by one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// How many best-selling products to keep per seller.
    pub top_products_limit: usize,
    /// How revenue, profit and bonus are rounded to two decimals.
    pub rounding: RoundingMode,
}

/// Selects the calculation policies and their parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policies {
    pub revenue: RevenuePolicyId,
    pub bonus: BonusPolicyId,
    pub bonus_by_profit: BonusByProfitParams,
}

/// Percent-of-profit tiers for the rank-based bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusByProfitParams {
    /// Rank 0.
    pub top_pct: Decimal,
    /// Ranks 1 and 2.
    pub runner_up_pct: Decimal,
    /// Everyone between the podium and the last place.
    pub default_pct: Decimal,
    /// The last rank, when there is more than one seller.
    pub last_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// An `EnvFilter` directive, e.g. "info" or "analytics=debug".
    pub level: String,
}

// --- Default Implementations ---

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl Default for BonusByProfitParams {
    fn default() -> Self {
        Self {
            top_pct: dec!(15),
            runner_up_pct: dec!(10),
            default_pct: dec!(5),
            last_pct: dec!(0),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
