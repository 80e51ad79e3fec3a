//! Shared domain types, errors and pure validation for the product batch
//! service. Nothing in this crate performs I/O.

pub mod error;
pub mod product;
pub mod types;
