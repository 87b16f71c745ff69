//! Data layer error type

use thiserror::Error;

/// Errors surfaced by the store. Absence of a record is a normal return
/// value (`Option` / `bool`), never an error.
#[derive(Debug, Error)]
pub enum DataError {
    /// SKU uniqueness is enforced at write time across all variants
    #[error("SKU already in use: {sku}")]
    DuplicateSku { sku: String },
}
