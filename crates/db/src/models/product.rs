//! Product row model and DTO.

use pos_core::types::{DbId, SubCategoryId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub sub_category_id: SubCategoryId,
    pub created_at: Timestamp,
}

/// DTO for one element of a submitted product list.
///
/// Fields outside this shape are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    pub sub_category_id: SubCategoryId,
}
