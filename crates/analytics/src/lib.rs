//! # Sales Analytics Engine
//!
//! Computes per-seller performance statistics (revenue, profit, bonus and top
//! products) from a catalog of sellers and products plus a flat list of purchase
//! records.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. It depends only on `core-types` and `policies`.
//! - **Stateless Calculation:** `SalesAnalyzer` takes a `Dataset` and `AnalysisOptions`
//!   and produces a ranked `Vec<SellerResult>`. Per-seller accumulators live for one call.
//! - **Pluggable Formulas:** revenue and bonus come from the `RevenuePolicy` and
//!   `BonusPolicy` objects carried by `AnalysisOptions`.
//!
//! ## Public API
//!
//! - `SalesAnalyzer` / `analyze_sales_data`: the pipeline entry points.
//! - `AnalysisOptions`: the injected policies and report shape.
//! - `SellerResult`: one ranked row of the report.
//! - `parse_dataset`: the JSON boundary that checks record shape.
//! - `AnalyticsError`: the validation failures this crate can return.

pub mod engine;
pub mod error;
pub mod options;
pub mod report;
pub mod validation;

pub use engine::{analyze_sales_data, SalesAnalyzer};
pub use error::AnalyticsError;
pub use options::AnalysisOptions;
pub use report::{SellerResult, TopProduct};
pub use validation::parse_dataset;
