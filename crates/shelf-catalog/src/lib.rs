//! Shelf Product Catalog
//!
//! The product entity, the store that persists it, and the live catalog
//! feed the list screen subscribes to. Form-level validation lives in
//! [`ProductDraft`]; the store itself persists whatever it is handed.

mod draft;
mod error;
mod product;
mod store;

pub use draft::ProductDraft;
pub use error::{CatalogError, DraftError};
pub use product::{Product, ProductId};
pub use store::ProductStore;

pub type Result<T> = std::result::Result<T, CatalogError>;
