use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A salesperson from the seller catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    pub fn new(id: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The "First Last" form used in reports.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry. Only the cost side of the product matters for profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// What the store paid per unit.
    pub purchase_price: Decimal,
}

impl Product {
    pub fn new(sku: impl Into<String>, purchase_price: Decimal) -> Result<Self, CoreError> {
        let sku = sku.into();
        if sku.trim().is_empty() {
            return Err(CoreError::InvalidInput("sku".to_string(), "must not be empty".to_string()));
        }
        Ok(Self { sku, purchase_price })
    }
}

/// One line of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub sale_price: Decimal,
    /// Percentage off the sale price. Nominally 0..=100, but not range-checked.
    pub discount: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(
        sku: impl Into<String>,
        sale_price: Decimal,
        discount: Decimal,
        quantity: u32,
    ) -> Result<Self, CoreError> {
        let sku = sku.into();
        if sku.trim().is_empty() {
            return Err(CoreError::InvalidInput("sku".to_string(), "must not be empty".to_string()));
        }
        Ok(Self {
            sku,
            sale_price,
            discount,
            quantity,
        })
    }
}

/// A single receipt attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// The amount actually charged for the whole receipt.
    pub total_amount: Decimal,
    pub items: Vec<LineItem>,
}

/// The full input snapshot for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_name_joins_first_and_last() {
        let seller = Seller::new("seller_1", "Alexey", "Petrov");
        assert_eq!(seller.display_name(), "Alexey Petrov");
    }

    #[test]
    fn blank_sku_is_rejected() {
        assert!(Product::new("  ", dec!(10)).is_err());
        assert!(LineItem::new("", dec!(10), dec!(0), 1).is_err());
    }

    #[test]
    fn records_ignore_unknown_fields_and_accept_numeric_json() {
        let raw = serde_json::json!({
            "seller_id": "seller_1",
            "receipt_id": "receipt_7",
            "total_amount": 180,
            "items": [
                { "sku": "SKU_001", "name": "Milk", "sale_price": 100, "discount": 10, "quantity": 2 }
            ]
        });
        let record: PurchaseRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.total_amount, dec!(180));
        assert_eq!(record.items[0].quantity, 2);
        assert_eq!(record.items[0].discount, dec!(10));
    }
}
