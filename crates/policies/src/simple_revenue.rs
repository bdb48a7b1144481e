use crate::RevenuePolicy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Revenue of a line after its percentage discount.
///
/// `sale_price * quantity * (1 - discount / 100)`. The discount is not clamped, so a
/// value above 100 produces negative revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenuePolicy for SimpleRevenue {
    fn calculate(&self, item: &LineItem, _product: &Product) -> Decimal {
        let discount_rate = item.discount / dec!(100);
        let full_price = item.sale_price * Decimal::from(item.quantity);
        full_price * (Decimal::ONE - discount_rate)
    }
}
