use serde::{Deserialize, Serialize};

/// A purchasable price as returned by `GET /price/by-handle/{handle}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub id: String,
    pub handle: String,
    pub name: String,
    pub description: Option<String>,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    pub price_type: PriceType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    Recurring,
    OneTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_wire_shape() {
        let raw = r#"{
            "id": "price_1",
            "handle": "monthly",
            "name": "Monthly plan",
            "description": null,
            "amount": 900,
            "price_type": "recurring"
        }"#;
        let price: Price = serde_json::from_str(raw).unwrap();
        assert_eq!(price.price_type, PriceType::Recurring);
        assert_eq!(price.amount, 900);
        assert!(price.description.is_none());
    }

    #[test]
    fn test_unknown_price_type_is_rejected() {
        let raw = r#"{
            "id": "price_1",
            "handle": "monthly",
            "name": "Monthly plan",
            "description": null,
            "amount": 900,
            "price_type": "weekly"
        }"#;
        assert!(serde_json::from_str::<Price>(raw).is_err());
    }
}
