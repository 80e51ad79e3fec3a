//! Batch persistence of submitted product lists.
//!
//! [`save_product_list`] is the single write path for products. It performs
//! one bulk insert, logs the outcome and hands back an explicit result so
//! the HTTP layer can pick the response status.

use crate::models::product::{CreateProduct, Product};
use crate::repositories::ProductRepo;
use crate::DbPool;

/// SQLSTATE codes the store raises when it rejects record contents.
const FOREIGN_KEY_VIOLATION: &str = "23503";
const REJECTED_RECORD_CODES: &[&str] = &[
    "23502", // not_null_violation
    "23514", // check_violation
    "22P02", // invalid_text_representation
    "22003", // numeric_value_out_of_range
    "22001", // string_data_right_truncation
    "22021", // character_not_in_repertoire (e.g. NUL in text)
];

/// Rows written by a successful [`save_product_list`] call, in input order.
#[derive(Debug, Clone)]
pub struct SavedProducts {
    pub products: Vec<Product>,
}

impl SavedProducts {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Why a batch could not be saved. Every variant means no row was written.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// A product references a sub-category id that does not exist.
    #[error("Unknown sub-category reference: {0}")]
    UnknownSubCategory(String),

    /// The store refused the contents of a record.
    #[error("Record rejected by the store: {0}")]
    Rejected(String),

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl SaveError {
    /// Classify a sqlx error by what went wrong for the batch.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                let code = db_err.code().map(|c| c.into_owned());
                match code.as_deref() {
                    Some(FOREIGN_KEY_VIOLATION) => Self::UnknownSubCategory(message),
                    Some(code) if REJECTED_RECORD_CODES.contains(&code) => {
                        Self::Rejected(message)
                    }
                    _ => Self::Database(sqlx::Error::Database(db_err)),
                }
            }
            err @ (sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Protocol(_)) => Self::Unavailable(err),
            other => Self::Database(other),
        }
    }

    /// Whether the failure came from connectivity rather than the data.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Persist a submitted product list with a single bulk insert.
///
/// On failure the error is logged and returned; nothing is retried. The
/// insert is one statement, so a failed batch leaves no rows behind.
pub async fn save_product_list(
    pool: &DbPool,
    products: &[CreateProduct],
) -> Result<SavedProducts, SaveError> {
    match ProductRepo::insert_many(pool, products).await {
        Ok(rows) => {
            tracing::info!(count = rows.len(), "Product list saved successfully");
            Ok(SavedProducts { products: rows })
        }
        Err(err) => {
            let err = SaveError::from_sqlx(err);
            tracing::error!(
                error = %err,
                batch_size = products.len(),
                transient = err.is_transient(),
                "Error saving product list"
            );
            Err(err)
        }
    }
}
