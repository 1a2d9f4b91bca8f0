//! Order (commande) domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TOP_ORDERS, MIN_TOP_ORDERS};
use crate::error::{DomainError, DomainResult};

/// Order domain entity.
///
/// Monetary fields are stored as provided: nothing ties `total_ht`, `tva`
/// and `total_ttc` together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    /// Surrogate identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Ordered product
    #[serde(rename = "produitNom")]
    #[cfg_attr(feature = "openapi", schema(example = "Clavier"))]
    pub product_name: Option<String>,
    /// Number of units
    #[serde(rename = "quantite")]
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub quantity: i32,
    /// Unit price
    #[serde(rename = "prix")]
    #[cfg_attr(feature = "openapi", schema(example = 25.0))]
    pub unit_price: f64,
    /// Pre-tax total
    #[serde(rename = "totalHt")]
    #[cfg_attr(feature = "openapi", schema(example = 75.0))]
    pub total_ht: f64,
    /// Tax rate, in percent
    #[cfg_attr(feature = "openapi", schema(example = 20))]
    pub tva: i32,
    /// Tax-inclusive total
    #[serde(rename = "totalTtc")]
    #[cfg_attr(feature = "openapi", schema(example = 90.0))]
    pub total_ttc: f64,
    /// Owning client, kept for lookups only
    #[serde(skip)]
    pub client_id: Option<i64>,
}

impl Order {
    pub fn new(id: i64, data: OrderData) -> Self {
        Self {
            id,
            product_name: data.product_name,
            quantity: data.quantity,
            unit_price: data.unit_price,
            total_ht: data.total_ht,
            tva: data.tva,
            total_ttc: data.total_ttc,
            client_id: data.client_id,
        }
    }

    /// Check whether this order belongs to the given client
    pub fn belongs_to(&self, client_id: i64) -> bool {
        self.client_id == Some(client_id)
    }
}

/// Writable order fields (used for create and full update)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderData {
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_ht: f64,
    pub tva: i32,
    pub total_ttc: f64,
    pub client_id: Option<i64>,
}

impl OrderData {
    pub fn new(
        product_name: impl Into<String>,
        quantity: i32,
        unit_price: f64,
        total_ht: f64,
        tva: i32,
        total_ttc: f64,
    ) -> Self {
        Self {
            product_name: Some(product_name.into()),
            quantity,
            unit_price,
            total_ht,
            tva,
            total_ttc,
            client_id: None,
        }
    }

    /// Assign the order to a client
    pub fn for_client(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }
}

/// Size of a "top orders by tax-inclusive total" ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLimit(u64);

impl TopLimit {
    /// Build a limit from a caller-supplied size, rejecting sizes below one.
    pub fn new(size: i64) -> DomainResult<Self> {
        if size < MIN_TOP_ORDERS {
            return Err(DomainError::validation(format!(
                "top must be at least {}, got {}",
                MIN_TOP_ORDERS, size
            )));
        }
        Ok(Self(size as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for TopLimit {
    fn default() -> Self {
        Self(DEFAULT_TOP_ORDERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_limit_rejects_non_positive_sizes() {
        assert!(TopLimit::new(0).is_err());
        assert!(TopLimit::new(-3).is_err());
        assert_eq!(TopLimit::new(1).unwrap().get(), 1);
        assert_eq!(TopLimit::new(25).unwrap().get(), 25);
    }

    #[test]
    fn test_default_top_limit() {
        assert_eq!(TopLimit::default().get(), DEFAULT_TOP_ORDERS);
    }

    #[test]
    fn test_order_never_serializes_its_client() {
        let order = Order::new(4, OrderData::new("Souris", 1, 10.0, 10.0, 20, 12.0).for_client(9));
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["totalTtc"], 12.0);
        assert_eq!(json["quantite"], 1);
        assert!(json.get("client_id").is_none());
        assert!(json.get("clientId").is_none());
        assert!(order.belongs_to(9));
    }
}
