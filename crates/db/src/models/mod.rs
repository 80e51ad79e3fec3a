//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the table row and a
//! create DTO for inserts.

pub mod product;
pub mod sub_category;
