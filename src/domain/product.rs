use serde::{Deserialize, Serialize};

use crate::domain::types::ProductId;

/// A product stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// Used only for the price-ordered listing; no currency or precision
    /// rules apply.
    pub price: f64,
    /// Available stock count, compared with `>=` against requested counts.
    pub quantity: i32,
}

/// Payload used to create a [`Product`] or overwrite all mutable fields of an
/// existing one. Partial update is not supported.
///
/// Omitted fields take their default values; content is accepted as-is and
/// only the store schema constrains it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}
