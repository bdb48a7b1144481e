//! # Sales Calculation Policies
//!
//! The pluggable formulas used by the sales analyzer. Revenue and bonus are
//! computed through the `RevenuePolicy` and `BonusPolicy` traits so that the
//! aggregation code never hardcodes a formula.
//!
//! - `SimpleRevenue`: discounted line revenue.
//! - `BonusByProfit`: rank-tiered percentage of profit.
//! - `factory`: builds a boxed policy from the identifiers in `config.toml`.
//!
//! Any closure with the right signature is also a policy:
//!
//! ```
//! use policies::RevenuePolicy;
//! use core_types::{LineItem, Product};
//! use rust_decimal::Decimal;
//!
//! let list_price = |item: &LineItem, _product: &Product| item.sale_price * Decimal::from(item.quantity);
//! let item = LineItem::new("SKU_001", Decimal::from(5), Decimal::ZERO, 3).unwrap();
//! let product = Product::new("SKU_001", Decimal::ONE).unwrap();
//! assert_eq!(list_price.calculate(&item, &product), Decimal::from(15));
//! ```

pub mod bonus_by_profit;
pub mod error;
pub mod factory;
pub mod simple_revenue;

pub use bonus_by_profit::BonusByProfit;
pub use error::PolicyError;
pub use factory::{create_bonus_policy, create_revenue_policy};
pub use simple_revenue::SimpleRevenue;

use core_types::{LineItem, Product, SellerStat};
use rust_decimal::Decimal;

/// Computes the revenue of one line item.
///
/// The `Send + Sync` bounds let a configured analyzer be shared between threads.
pub trait RevenuePolicy: Send + Sync {
    fn calculate(&self, item: &LineItem, product: &Product) -> Decimal;
}

/// Computes a seller's bonus from their rank.
///
/// `index` is the zero-based rank after sorting by profit descending, `total` the
/// number of ranked sellers, and `seller` the finished accumulator.
pub trait BonusPolicy: Send + Sync {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStat) -> Decimal;
}

impl<F> RevenuePolicy for F
where
    F: Fn(&LineItem, &Product) -> Decimal + Send + Sync,
{
    fn calculate(&self, item: &LineItem, product: &Product) -> Decimal {
        self(item, product)
    }
}

impl<F> BonusPolicy for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal + Send + Sync,
{
    fn calculate(&self, index: usize, total: usize, seller: &SellerStat) -> Decimal {
        self(index, total, seller)
    }
}
