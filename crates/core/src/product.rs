//! Field rules for product records.
//!
//! Presence and type are already guaranteed by deserialization; these
//! checks cover what a typed body cannot express.

use crate::error::CoreError;

/// Reject names that are empty or contain only whitespace.
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reject prices that cannot be stored as a finite number.
///
/// JSON bodies cannot carry NaN or infinity, so this only fires for
/// callers that build products outside the HTTP path.
pub fn validate_product_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() {
        return Err(CoreError::Validation(format!(
            "Product price must be a finite number, got {price}"
        )));
    }
    Ok(())
}

/// Validate every `(name, price)` pair of a batch, stopping at the first
/// failure. The error message names the offending position so the caller
/// can locate it in the submitted array.
pub fn validate_product_batch<'a, I>(fields: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    for (index, (name, price)) in fields.into_iter().enumerate() {
        validate_product_name(name)
            .and_then(|()| validate_product_price(price))
            .map_err(|CoreError::Validation(msg)| {
                CoreError::Validation(format!("products[{index}]: {msg}"))
            })?;
    }
    Ok(())
}
