//! Repository for the `sub_categories` table.

use sqlx::PgPool;

use crate::models::sub_category::{CreateSubCategory, SubCategory};

const COLUMNS: &str = "id, name, created_at";

/// Minimal access to sub-categories, which products reference by id.
pub struct SubCategoryRepo;

impl SubCategoryRepo {
    /// Insert a new sub-category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubCategory,
    ) -> Result<SubCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_categories (name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubCategory>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }
}
