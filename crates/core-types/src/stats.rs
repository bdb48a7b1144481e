use crate::structs::Seller;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cumulative quantity of one SKU sold by a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTally {
    pub sku: String,
    pub quantity: u64,
}

/// The running totals for one seller during an analysis pass.
///
/// An accumulator is created per seller before the pass, mutated exclusively by
/// the aggregation loop, and consumed when the final report is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    // Kept in first-sold order so equal quantities rank deterministically.
    products_sold: Vec<ProductTally>,
    #[serde(skip)]
    sku_slots: HashMap<String, usize>,
}

impl SellerStat {
    /// Creates a zeroed accumulator for `seller`.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_slots: HashMap::new(),
        }
    }

    /// Adds `quantity` units of `sku` to the tally. Zero quantities leave no entry.
    pub fn record_quantity(&mut self, sku: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.sku_slots.get(sku) {
            Some(&slot) => self.products_sold[slot].quantity += u64::from(quantity),
            None => {
                self.sku_slots.insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(ProductTally {
                    sku: sku.to_string(),
                    quantity: u64::from(quantity),
                });
            }
        }
    }

    /// Cumulative quantity sold for `sku`, if any.
    pub fn quantity_sold(&self, sku: &str) -> Option<u64> {
        self.sku_slots.get(sku).map(|&slot| self.products_sold[slot].quantity)
    }

    /// All tallies in the order each SKU was first sold.
    pub fn products_sold(&self) -> &[ProductTally] {
        &self.products_sold
    }

    /// The `limit` best-selling SKUs, by quantity descending. Ties keep first-sold order.
    pub fn top_products(&self, limit: usize) -> Vec<ProductTally> {
        let mut ranked = self.products_sold.clone();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat() -> SellerStat {
        SellerStat::new(&Seller::new("seller_1", "Ivan", "Ivanov"))
    }

    #[test]
    fn repeated_skus_accumulate_in_one_entry() {
        let mut stat = stat();
        stat.record_quantity("SKU_001", 2);
        stat.record_quantity("SKU_002", 1);
        stat.record_quantity("SKU_001", 3);

        assert_eq!(stat.products_sold().len(), 2);
        assert_eq!(stat.quantity_sold("SKU_001"), Some(5));
        assert_eq!(stat.quantity_sold("SKU_003"), None);
    }

    #[test]
    fn zero_quantity_adds_nothing() {
        let mut stat = stat();
        stat.record_quantity("SKU_001", 0);
        assert!(stat.products_sold().is_empty());
    }

    #[test]
    fn top_products_sorts_descending_and_breaks_ties_by_first_sale() {
        let mut stat = stat();
        stat.record_quantity("A", 1);
        stat.record_quantity("B", 4);
        stat.record_quantity("C", 4);
        stat.record_quantity("D", 2);

        let skus: Vec<_> = stat.top_products(3).into_iter().map(|t| t.sku).collect();
        assert_eq!(skus, vec!["B", "C", "D"]);
    }
}
