//! Handlers for the `/products` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pos_core::product::validate_product_batch;
use pos_db::models::product::CreateProduct;
use pos_db::save::save_product_list;

use crate::error::AppResult;
use crate::state::AppState;

/// Body returned when a batch was persisted.
pub const SAVE_SUCCEEDED_MESSAGE: &str = "Product list saved successfully";

/// POST /api/products/save-products
///
/// The request body is the product list itself. The whole batch is
/// validated, then written with a single bulk insert; either every product
/// is saved or none is.
pub async fn save_products(
    State(state): State<AppState>,
    body: Result<Json<Vec<CreateProduct>>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let Json(products) = body?;

    validate_product_batch(products.iter().map(|p| (p.name.as_str(), p.price)))?;

    let saved = save_product_list(&state.pool, &products).await?;
    tracing::debug!(count = saved.len(), "Save products request completed");

    Ok((StatusCode::OK, SAVE_SUCCEEDED_MESSAGE))
}
