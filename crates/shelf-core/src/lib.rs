//! Shelf Core
//!
//! Central coordination layer for the Shelf catalog app. The presentation
//! shell owns rendering; everything stateful lives behind [`Shop`].

mod config;
mod error;
mod shop;

pub use config::Config;
pub use error::CoreError;
pub use shop::Shop;

// Re-export core components
pub use shelf_catalog::{
    CatalogError, DraftError, Product, ProductDraft, ProductId, ProductStore,
};
pub use shelf_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
