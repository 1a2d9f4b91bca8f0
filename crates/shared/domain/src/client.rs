//! Client domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Client domain entity.
///
/// A client owns its orders; the orders only point back to the client
/// through their `client_id`, which is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Client {
    /// Surrogate identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Family name
    #[serde(rename = "nom")]
    #[cfg_attr(feature = "openapi", schema(example = "Dupont"))]
    pub name: Option<String>,
    /// Given name
    #[serde(rename = "prenom")]
    #[cfg_attr(feature = "openapi", schema(example = "Marie"))]
    pub surname: Option<String>,
    /// Postal address
    #[serde(rename = "adresse")]
    #[cfg_attr(feature = "openapi", schema(example = "12 rue de la Paix, Paris"))]
    pub address: Option<String>,
    /// Orders placed by this client, by ascending id
    #[serde(rename = "commandes", default)]
    pub orders: Vec<Order>,
}

impl Client {
    /// Build a client from its stored fields, without orders attached yet.
    pub fn new(id: i64, data: ClientData) -> Self {
        Self {
            id,
            name: data.name,
            surname: data.surname,
            address: data.address,
            orders: Vec::new(),
        }
    }

    /// Attach the client's orders.
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }
}

/// Writable client fields (used for create and full update)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientData {
    #[serde(rename = "nom")]
    pub name: Option<String>,
    #[serde(rename = "prenom")]
    pub surname: Option<String>,
    #[serde(rename = "adresse")]
    pub address: Option<String>,
}

impl ClientData {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            surname: Some(surname.into()),
            address: Some(address.into()),
        }
    }
}
