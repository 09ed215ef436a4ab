use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ItemId;

/// Request/response representation of an inventory item.
///
/// On create and update the `id` is ignored; it defaults to 0 when omitted.
/// `price` is written as an exact JSON number. On input a decimal string such
/// as `"10.99"` is also accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContract {
    #[serde(default)]
    pub id: ItemId,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_serializes_as_exact_number() {
        let contract = ItemContract {
            id: 1,
            title: "Item 1".to_string(),
            description: "Description for Item 1".to_string(),
            price: Decimal::new(1099, 2),
            quantity: 5,
        };

        let json = serde_json::to_string(&contract).unwrap();

        assert_eq!(
            json,
            r#"{"id":1,"title":"Item 1","description":"Description for Item 1","price":10.99,"quantity":5}"#
        );
    }

    #[test]
    fn test_deserialize_without_id_defaults_to_zero() {
        let json = r#"{"title":"New Item","description":"New Description","price":5.99,"quantity":10}"#;

        let contract: ItemContract = serde_json::from_str(json).unwrap();

        assert_eq!(contract.id, 0);
        assert_eq!(contract.price, Decimal::new(599, 2));
        assert_eq!(contract.quantity, 10);
    }

    #[test]
    fn test_deserialize_keeps_decimal_precision() {
        let json = r#"{"title":"t","description":"d","price":0.1000000000000000055,"quantity":1}"#;

        let contract: ItemContract = serde_json::from_str(json).unwrap();

        assert_eq!(contract.price.to_string(), "0.1000000000000000055");
    }

    #[test]
    fn test_deserialize_accepts_price_as_decimal_string() {
        let json = r#"{"title":"t","description":"d","price":"10.99","quantity":1}"#;

        let contract: ItemContract = serde_json::from_str(json).unwrap();

        assert_eq!(contract.price, Decimal::new(1099, 2));
        assert!(serde_json::to_string(&contract).unwrap().contains(r#""price":10.99"#));
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = r#"{"title":"t","price":1,"quantity":1}"#;

        let result: Result<ItemContract, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
