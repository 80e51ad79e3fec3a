//! Integration tests for the shared middleware stack: request timeout and
//! panic recovery.

mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use common::{body_text, get as get_request, post_json, seed_sub_category};
use pos_api::router::{build_app_router, with_middleware};
use pos_api::state::AppState;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: a save blocked past the request timeout returns 408
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn blocked_save_times_out_with_408(pool: PgPool) {
    let sub = seed_sub_category(&pool, "Gadgets").await;

    let mut config = common::test_config();
    config.request_timeout_secs = 1;
    let app = build_app_router(AppState { pool: pool.clone() }, &config);

    // Hold an exclusive lock so the insert cannot proceed.
    let mut tx = pool.begin().await.unwrap();
    sqlx::query("LOCK TABLE products IN ACCESS EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await
        .unwrap();

    let response = post_json(
        app,
        "/api/products/save-products",
        json!([{"name": "Widget", "price": 9.99, "sub_category_id": sub}]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

    tx.rollback().await.unwrap();
}

// ---------------------------------------------------------------------------
// Test: a panicking handler returns 500 and the router keeps serving
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn panicking_handler_returns_500(pool: PgPool) {
    let routes = Router::new()
        .route("/explode", get(|| async { panic!("handler blew up") as () }))
        .route("/fine", get(|| async { "fine" }));
    let app = with_middleware(routes, &common::test_config()).with_state(AppState { pool });

    let response = get_request(app.clone(), "/explode").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("x-request-id").is_some());

    let response = get_request(app, "/fine").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "fine");
}
