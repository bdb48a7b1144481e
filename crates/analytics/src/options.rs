use core_types::RoundingMode;
use policies::{BonusByProfit, BonusPolicy, RevenuePolicy, SimpleRevenue};
use std::fmt;

/// Number of best-selling products reported per seller unless configured otherwise.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// The calculation policies and report shape for one analysis run.
///
/// Both policies are required; a run with either one missing fails with
/// `AnalyticsError::InvalidOptions` before any aggregation happens.
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenuePolicy>>,
    pub calculate_bonus: Option<Box<dyn BonusPolicy>>,
    pub top_products_limit: usize,
    pub rounding: RoundingMode,
}

impl AnalysisOptions {
    /// Options with no policies set. Add them with the `with_*` builders.
    pub fn new() -> Self {
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            rounding: RoundingMode::default(),
        }
    }

    /// `SimpleRevenue` and the default `BonusByProfit` tiers.
    pub fn with_default_policies() -> Self {
        Self::new()
            .with_revenue_policy(SimpleRevenue)
            .with_bonus_policy(BonusByProfit::default())
    }

    pub fn with_revenue_policy(mut self, policy: impl RevenuePolicy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(policy));
        self
    }

    pub fn with_bonus_policy(mut self, policy: impl BonusPolicy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(policy));
        self
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("top_products_limit", &self.top_products_limit)
            .field("rounding", &self.rounding)
            .finish()
    }
}
