use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pos_core::error::CoreError;
use pos_db::save::SaveError;

/// Body returned whenever a batch could not be persisted.
pub const SAVE_FAILED_MESSAGE: &str = "Error saving product list";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] as a plain-text body. Store details are
/// logged by the save path, never returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pos_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The batch persistence operation failed.
    #[error(transparent)]
    Save(#[from] SaveError),

    /// The request body could not be read as a product list.
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::Json(rejection) => (
                rejection.status(),
                format!("Invalid product list: {}", rejection.body_text()),
            ),

            AppError::Save(err) => classify_save_error(err),
        };

        (status, message).into_response()
    }
}

/// Map a failed save to an HTTP status and caller-facing message.
///
/// - Unknown sub-category reference maps to 422.
/// - A record the store refused maps to 400.
/// - Connectivity failures map to 503.
/// - Everything else maps to 500.
fn classify_save_error(err: &SaveError) -> (StatusCode, String) {
    match err {
        SaveError::UnknownSubCategory(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("{SAVE_FAILED_MESSAGE}: unknown sub-category reference"),
        ),
        SaveError::Rejected(_) => (
            StatusCode::BAD_REQUEST,
            format!("{SAVE_FAILED_MESSAGE}: a record was rejected by the store"),
        ),
        SaveError::Unavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            SAVE_FAILED_MESSAGE.to_string(),
        ),
        SaveError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            SAVE_FAILED_MESSAGE.to_string(),
        ),
    }
}
