pub mod enums;
pub mod error;
pub mod stats;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusPolicyId, RevenuePolicyId, RoundingMode};
pub use error::CoreError;
pub use stats::{ProductTally, SellerStat};
pub use structs::{Dataset, LineItem, Product, PurchaseRecord, Seller};
