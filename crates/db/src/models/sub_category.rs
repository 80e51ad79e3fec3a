//! Sub-category row model and DTO.
//!
//! Products only reference sub-categories by id; this table exists so the
//! reference can be enforced.

use pos_core::types::{SubCategoryId, Timestamp};
use sqlx::FromRow;

/// A row from the `sub_categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct SubCategory {
    pub id: SubCategoryId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a sub-category.
#[derive(Debug, Clone)]
pub struct CreateSubCategory {
    pub name: String,
}
