//! Repository for the `products` table.

use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, sub_category_id, created_at";

/// Provides bulk insertion for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert every product in one statement, returning the created rows in
    /// input order.
    ///
    /// The arrays are unnested `WITH ORDINALITY` so ids are assigned in the
    /// order the products were submitted. Being a single statement, the
    /// insert is all-or-nothing: if any row violates a constraint no row is
    /// written.
    pub async fn insert_many(
        pool: &PgPool,
        products: &[CreateProduct],
    ) -> Result<Vec<Product>, sqlx::Error> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        let sub_category_ids: Vec<_> = products.iter().map(|p| p.sub_category_id).collect();

        let query = format!(
            "INSERT INTO products (name, price, sub_category_id) \
             SELECT name, price, sub_category_id \
             FROM UNNEST($1::TEXT[], $2::FLOAT8[], $3::UUID[]) \
                  WITH ORDINALITY AS input(name, price, sub_category_id, ord) \
             ORDER BY ord \
             RETURNING {COLUMNS}"
        );
        let mut rows = sqlx::query_as::<_, Product>(&query)
            .bind(&names)
            .bind(&prices)
            .bind(&sub_category_ids)
            .fetch_all(pool)
            .await?;

        // RETURNING does not promise an order; ids do.
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }
}
