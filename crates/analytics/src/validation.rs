use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use core_types::Dataset;
use policies::{BonusPolicy, RevenuePolicy};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Converts a loosely-typed JSON document into a `Dataset`.
///
/// Fails with `InvalidData` when the value is not an object, when a required
/// collection is missing or not an array, or when an element does not have the
/// shape of its record type. Emptiness is checked later by `validate_dataset`.
pub fn parse_dataset(value: &Value) -> Result<Dataset, AnalyticsError> {
    let object = value.as_object().ok_or_else(|| {
        AnalyticsError::InvalidData("dataset must be a JSON object".to_string())
    })?;

    for key in COLLECTIONS {
        match object.get(key) {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(AnalyticsError::InvalidData(format!("`{key}` must be an array")));
            }
            None => return Err(AnalyticsError::InvalidData(format!("`{key}` is missing"))),
        }
    }

    Ok(Dataset {
        sellers: parse_collection(&object["sellers"], "sellers")?,
        products: parse_collection(&object["products"], "products")?,
        purchase_records: parse_collection(&object["purchase_records"], "purchase_records")?,
    })
}

fn parse_collection<T: DeserializeOwned>(value: &Value, key: &str) -> Result<Vec<T>, AnalyticsError> {
    Vec::<T>::deserialize(value)
        .map_err(|e| AnalyticsError::InvalidData(format!("malformed `{key}`: {e}")))
}

/// Rejects a dataset with any empty collection.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), AnalyticsError> {
    let lengths = [
        ("sellers", dataset.sellers.len()),
        ("products", dataset.products.len()),
        ("purchase_records", dataset.purchase_records.len()),
    ];
    for (key, len) in lengths {
        if len == 0 {
            return Err(AnalyticsError::InvalidData(format!("`{key}` must not be empty")));
        }
    }
    Ok(())
}

/// Checks that both policies are present and returns them borrowed.
pub fn validate_options(
    options: &AnalysisOptions,
) -> Result<(&dyn RevenuePolicy, &dyn BonusPolicy), AnalyticsError> {
    let revenue = options.calculate_revenue.as_deref().ok_or_else(|| {
        AnalyticsError::InvalidOptions("`calculate_revenue` policy is required".to_string())
    })?;
    let bonus = options.calculate_bonus.as_deref().ok_or_else(|| {
        AnalyticsError::InvalidOptions("`calculate_bonus` policy is required".to_string())
    })?;
    if options.top_products_limit == 0 {
        return Err(AnalyticsError::InvalidOptions(
            "`top_products_limit` must be greater than 0".to_string(),
        ));
    }
    Ok((revenue, bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "sellers": [{ "id": "seller_1", "first_name": "Ivan", "last_name": "Petrov" }],
            "products": [{ "sku": "SKU_001", "purchase_price": 40 }],
            "purchase_records": [{
                "seller_id": "seller_1",
                "total_amount": 180,
                "items": [{ "sku": "SKU_001", "sale_price": 100, "discount": 10, "quantity": 2 }]
            }]
        })
    }

    #[test]
    fn well_formed_document_parses() {
        let dataset = parse_dataset(&valid()).unwrap();
        assert_eq!(dataset.sellers.len(), 1);
        assert_eq!(dataset.purchase_records[0].items[0].sku, "SKU_001");
    }

    #[test]
    fn null_dataset_is_invalid_data() {
        assert!(matches!(parse_dataset(&Value::Null), Err(AnalyticsError::InvalidData(_))));
    }

    #[test]
    fn non_array_collection_is_invalid_data() {
        let mut doc = valid();
        doc["sellers"] = json!({ "id": "seller_1" });
        let err = parse_dataset(&doc).unwrap_err();
        assert!(err.to_string().contains("`sellers` must be an array"));
    }

    #[test]
    fn missing_collection_is_invalid_data() {
        let mut doc = valid();
        doc.as_object_mut().unwrap().remove("products");
        assert!(matches!(parse_dataset(&doc), Err(AnalyticsError::InvalidData(_))));
    }

    #[test]
    fn malformed_record_is_invalid_data() {
        let mut doc = valid();
        doc["products"] = json!([{ "sku": "SKU_001" }]);
        let err = parse_dataset(&doc).unwrap_err();
        assert!(err.to_string().contains("malformed `products`"));
    }

    #[test]
    fn empty_collections_are_rejected() {
        let mut dataset = parse_dataset(&valid()).unwrap();
        dataset.purchase_records.clear();
        assert!(matches!(validate_dataset(&dataset), Err(AnalyticsError::InvalidData(_))));
    }

    #[test]
    fn missing_policies_are_invalid_options() {
        let options = AnalysisOptions::new().with_revenue_policy(policies::SimpleRevenue);
        let Err(err) = validate_options(&options) else {
            panic!("expected InvalidOptions for a missing bonus policy");
        };
        assert!(matches!(err, AnalyticsError::InvalidOptions(_)));
        assert!(err.to_string().contains("calculate_bonus"));
    }
}
