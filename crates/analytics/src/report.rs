use core_types::{RoundingMode, SellerStat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One `{ sku, quantity }` entry of a seller's best sellers.
pub use core_types::ProductTally as TopProduct;

/// The finished performance record for one seller.
///
/// This struct is the final output of the `SalesAnalyzer`. Money fields are
/// rounded to exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerResult {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    /// Best sellers by quantity, descending.
    pub top_products: Vec<TopProduct>,
    pub bonus: Decimal,
}

impl SellerResult {
    /// Consumes a finalized accumulator.
    pub fn from_stat(
        stat: SellerStat,
        top_products: Vec<TopProduct>,
        bonus: Decimal,
        rounding: RoundingMode,
    ) -> Self {
        Self {
            revenue: rounding.round_money(stat.revenue),
            profit: rounding.round_money(stat.profit),
            bonus: rounding.round_money(bonus),
            sales_count: stat.sales_count,
            top_products,
            seller_id: stat.id,
            name: stat.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Seller;
    use rust_decimal_macros::dec;

    #[test]
    fn money_fields_are_rounded_half_up() {
        let mut stat = SellerStat::new(&Seller::new("seller_1", "Maria", "Orlova"));
        stat.revenue = dec!(123.455);
        stat.profit = dec!(99.995);
        stat.sales_count = 4;

        let result = SellerResult::from_stat(stat, Vec::new(), dec!(14.99925), RoundingMode::HalfUp);

        assert_eq!(result.revenue.to_string(), "123.46");
        assert_eq!(result.profit.to_string(), "100.00");
        assert_eq!(result.bonus.to_string(), "15.00");
        assert_eq!(result.sales_count, 4);
        assert_eq!(result.name, "Maria Orlova");
    }
}
