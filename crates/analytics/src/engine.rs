use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use crate::report::SellerResult;
use crate::validation::{validate_dataset, validate_options};
use core_types::{Dataset, Product, PurchaseRecord, Seller, SellerStat};
use policies::{BonusPolicy, RevenuePolicy};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A stateless calculator for deriving seller performance from purchase records.
#[derive(Debug, Default)]
pub struct SalesAnalyzer {}

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for ranking sellers.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The sellers, the product catalog and every purchase record.
    /// * `options` - The revenue and bonus policies plus the report shape.
    ///
    /// # Returns
    ///
    /// One `SellerResult` per input seller, ordered by profit descending, or an
    /// `AnalyticsError` if the input fails validation or a running total
    /// overflows `Decimal`.
    #[tracing::instrument(
        name = "analyze_sales_data",
        skip_all,
        fields(
            sellers = dataset.sellers.len(),
            products = dataset.products.len(),
            records = dataset.purchase_records.len()
        )
    )]
    pub fn analyze(
        &self,
        dataset: &Dataset,
        options: &AnalysisOptions,
    ) -> Result<Vec<SellerResult>, AnalyticsError> {
        validate_dataset(dataset)?;
        let (revenue_policy, bonus_policy) = validate_options(options)?;

        let product_by_sku = index_products(&dataset.products);
        let seller_slots = index_sellers(&dataset.sellers);
        let record_slots = resolve_seller_slots(&dataset.purchase_records, &seller_slots)?;

        let mut stats: Vec<SellerStat> = dataset.sellers.iter().map(SellerStat::new).collect();
        let skipped_items = self.aggregate(
            &dataset.purchase_records,
            &record_slots,
            &product_by_sku,
            revenue_policy,
            &mut stats,
        )?;

        let results = self.rank(stats, bonus_policy, options);

        tracing::info!(
            sellers = results.len(),
            skipped_items,
            "Sales analysis complete."
        );
        Ok(results)
    }

    /// Folds every purchase record into its seller's accumulator.
    ///
    /// `record_slots[i]` is the accumulator slot of `records[i]`. Returns how many
    /// line items were skipped for an unknown SKU, or `Calculation` if a running
    /// total overflows `Decimal`.
    fn aggregate(
        &self,
        records: &[PurchaseRecord],
        record_slots: &[usize],
        product_by_sku: &HashMap<&str, &Product>,
        revenue_policy: &dyn RevenuePolicy,
        stats: &mut [SellerStat],
    ) -> Result<usize, AnalyticsError> {
        let mut skipped_items = 0;

        for (record, &slot) in records.iter().zip(record_slots) {
            let seller = &mut stats[slot];

            seller.sales_count += 1;
            seller.revenue = checked(
                seller.revenue.checked_add(record.total_amount),
                "revenue",
                record,
            )?;

            for item in &record.items {
                let Some(product) = product_by_sku.get(item.sku.as_str()) else {
                    tracing::warn!(
                        sku = %item.sku,
                        seller_id = %record.seller_id,
                        "Product not found in catalog; skipping line item."
                    );
                    skipped_items += 1;
                    continue;
                };

                let cost = checked(
                    product.purchase_price.checked_mul(Decimal::from(item.quantity)),
                    "cost",
                    record,
                )?;
                let revenue = revenue_policy.calculate(item, product);
                let profit = checked(revenue.checked_sub(cost), "profit", record)?;
                seller.profit = checked(seller.profit.checked_add(profit), "profit", record)?;
                seller.record_quantity(&item.sku, item.quantity);
            }

            tracing::debug!(
                seller_id = %record.seller_id,
                items = record.items.len(),
                revenue = %seller.revenue,
                profit = %seller.profit,
                "Purchase record aggregated."
            );
        }

        Ok(skipped_items)
    }

    /// Sorts by profit descending, assigns bonuses and shapes the output rows.
    fn rank(
        &self,
        mut stats: Vec<SellerStat>,
        bonus_policy: &dyn BonusPolicy,
        options: &AnalysisOptions,
    ) -> Vec<SellerResult> {
        // `sort_by` is stable: equal profits keep seller input order.
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = stats.len();
        stats
            .into_iter()
            .enumerate()
            .map(|(index, stat)| {
                let bonus = bonus_policy.calculate(index, total, &stat);
                let top_products = stat.top_products(options.top_products_limit);
                SellerResult::from_stat(stat, top_products, bonus, options.rounding)
            })
            .collect()
    }
}

/// Runs a one-off analysis with a fresh `SalesAnalyzer`.
pub fn analyze_sales_data(
    dataset: &Dataset,
    options: &AnalysisOptions,
) -> Result<Vec<SellerResult>, AnalyticsError> {
    SalesAnalyzer::new().analyze(dataset, options)
}

/// SKU -> product. A later duplicate SKU replaces the earlier one.
fn index_products(products: &[Product]) -> HashMap<&str, &Product> {
    products.iter().map(|p| (p.sku.as_str(), p)).collect()
}

/// Seller id -> accumulator slot. A later duplicate id takes over the lookup.
fn index_sellers(sellers: &[Seller]) -> HashMap<&str, usize> {
    sellers
        .iter()
        .enumerate()
        .map(|(slot, s)| (s.id.as_str(), slot))
        .collect()
}

/// Resolves the accumulator slot of every record, failing on the first unknown seller.
fn resolve_seller_slots(
    records: &[PurchaseRecord],
    seller_slots: &HashMap<&str, usize>,
) -> Result<Vec<usize>, AnalyticsError> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            seller_slots.get(record.seller_id.as_str()).copied().ok_or_else(|| {
                AnalyticsError::InvalidData(format!(
                    "purchase record #{position} references unknown seller `{}`",
                    record.seller_id
                ))
            })
        })
        .collect()
}

fn checked(
    value: Option<Decimal>,
    metric: &str,
    record: &PurchaseRecord,
) -> Result<Decimal, AnalyticsError> {
    value.ok_or_else(|| {
        AnalyticsError::Calculation(format!(
            "{metric} overflowed while aggregating a record for seller `{}`",
            record.seller_id
        ))
    })
}
