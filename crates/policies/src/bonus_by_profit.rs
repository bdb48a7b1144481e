use crate::error::PolicyError;
use crate::BonusPolicy;
use configuration::BonusByProfitParams;
use core_types::SellerStat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A rank-tiered percentage of the seller's profit.
///
/// Tiers are checked in this order, first match wins:
///
/// | Rank                    | Default |
/// |-------------------------|---------|
/// | `index == 0`            | 15%     |
/// | `index == 1 \|\| 2`     | 10%     |
/// | `index == total - 1`    | 0%      |
/// | anything else           | 5%      |
///
/// A lone seller is both first and last; the first-place tier wins.
#[derive(Debug, Clone, Default)]
pub struct BonusByProfit {
    params: BonusByProfitParams,
}

impl BonusByProfit {
    pub fn new(params: BonusByProfitParams) -> Result<Self, PolicyError> {
        let tiers = [
            ("top_pct", params.top_pct),
            ("runner_up_pct", params.runner_up_pct),
            ("default_pct", params.default_pct),
            ("last_pct", params.last_pct),
        ];
        for (name, pct) in tiers {
            if pct < Decimal::ZERO {
                return Err(PolicyError::InvalidParameters(format!(
                    "{name} must not be negative, got {pct}"
                )));
            }
        }
        Ok(Self { params })
    }

    /// The percentage applied at `index` out of `total` sellers.
    pub fn percent_for_rank(&self, index: usize, total: usize) -> Decimal {
        if index == 0 {
            self.params.top_pct
        } else if index == 1 || index == 2 {
            self.params.runner_up_pct
        } else if index + 1 == total {
            self.params.last_pct
        } else {
            self.params.default_pct
        }
    }
}

impl BonusPolicy for BonusByProfit {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStat) -> Decimal {
        let percent = self.percent_for_rank(index, total);
        seller.profit * percent / dec!(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Seller;

    fn seller_with_profit(profit: Decimal) -> SellerStat {
        let mut stat = SellerStat::new(&Seller::new("seller_1", "Anna", "Smirnova"));
        stat.profit = profit;
        stat
    }

    #[test]
    fn five_sellers_get_each_tier() {
        let policy = BonusByProfit::default();
        let seller = seller_with_profit(dec!(1000));

        let bonuses: Vec<_> = (0..5).map(|i| policy.calculate(i, 5, &seller)).collect();
        assert_eq!(bonuses, vec![dec!(150), dec!(100), dec!(100), dec!(50), dec!(0)]);
    }

    #[test]
    fn lone_seller_takes_the_first_place_tier() {
        let policy = BonusByProfit::default();
        assert_eq!(policy.calculate(0, 1, &seller_with_profit(dec!(200))), dec!(30));
    }

    #[test]
    fn runner_up_tier_beats_last_place_for_small_teams() {
        let policy = BonusByProfit::default();
        assert_eq!(policy.percent_for_rank(1, 2), dec!(10));
        assert_eq!(policy.percent_for_rank(2, 3), dec!(10));
        assert_eq!(policy.percent_for_rank(3, 4), dec!(0));
    }

    #[test]
    fn custom_tiers_are_honoured() {
        let policy = BonusByProfit::new(BonusByProfitParams {
            top_pct: dec!(20),
            runner_up_pct: dec!(12),
            default_pct: dec!(3),
            last_pct: dec!(1),
        })
        .unwrap();
        assert_eq!(policy.percent_for_rank(4, 6), dec!(3));
        assert_eq!(policy.percent_for_rank(5, 6), dec!(1));
    }

    #[test]
    fn negative_percentages_are_rejected() {
        let params = BonusByProfitParams {
            last_pct: dec!(-1),
            ..BonusByProfitParams::default()
        };
        assert!(matches!(
            BonusByProfit::new(params),
            Err(PolicyError::InvalidParameters(_))
        ));
    }
}
