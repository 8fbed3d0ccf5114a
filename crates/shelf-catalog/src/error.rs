//! Catalog error types

use thiserror::Error;

use crate::product::ProductId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Storage error: {0}")]
    Storage(#[from] shelf_storage::StorageError),

    #[error("Background task failed: {0}")]
    Background(#[from] tokio::task::JoinError),
}

/// Validation failures for the add/edit form, reported in the order the
/// form checks them. The store never sees an invalid draft.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please select an image")]
    MissingImage,

    #[error("Please enter a title")]
    MissingTitle,

    #[error("Please enter a description")]
    MissingDescription,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Price cannot be zero")]
    ZeroPrice,
}
