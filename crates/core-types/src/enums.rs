use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How monetary results are rounded to two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Midpoints round away from zero (123.455 -> 123.46).
    #[default]
    HalfUp,
    /// Banker's rounding: midpoints round to the even neighbour (0.125 -> 0.12).
    HalfEven,
}

impl RoundingMode {
    /// Number of decimal places every reported money amount carries.
    pub const MONEY_DP: u32 = 2;

    /// Rounds `value` to two decimal places and pins the scale, so `100` renders as `100.00`.
    pub fn round_money(&self, value: Decimal) -> Decimal {
        let strategy = match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        };
        let mut rounded = value.round_dp_with_strategy(Self::MONEY_DP, strategy);
        rounded.rescale(Self::MONEY_DP);
        rounded
    }
}

/// Identifies which revenue formula a run should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenuePolicyId {
    /// `sale_price * quantity * (1 - discount / 100)`.
    #[default]
    SimpleRevenue,
}

/// Identifies which bonus formula a run should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusPolicyId {
    /// Rank-tiered percentage of profit.
    #[default]
    ByProfit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn half_up_rounds_midpoints_away_from_zero() {
        let mode = RoundingMode::HalfUp;
        assert_eq!(mode.round_money(dec!(123.455)).to_string(), "123.46");
        assert_eq!(mode.round_money(dec!(99.995)).to_string(), "100.00");
        assert_eq!(mode.round_money(dec!(-0.005)).to_string(), "-0.01");
    }

    #[test]
    fn half_even_prefers_the_even_neighbour() {
        let mode = RoundingMode::HalfEven;
        assert_eq!(mode.round_money(dec!(0.125)).to_string(), "0.12");
        assert_eq!(mode.round_money(dec!(0.135)).to_string(), "0.14");
    }

    #[test]
    fn whole_numbers_gain_two_decimal_places() {
        assert_eq!(RoundingMode::HalfUp.round_money(dec!(180)).to_string(), "180.00");
    }
}
