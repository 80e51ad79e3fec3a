//! Route definitions for the `/products` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// POST   /save-products             -> save_products
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/save-products", post(products::save_products))
}
