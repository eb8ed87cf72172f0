//! Product entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Serialized as a JSON number (`9.99`), not a string.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new product.
///
/// `price` accepts either a JSON number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// DTO for replacing the mutable fields of a product.
///
/// Every field is written; an omitted `description` clears the column.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}
