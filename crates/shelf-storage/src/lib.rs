//! Shelf Storage Layer
//!
//! SQLite-based persistence for the product catalog.
//! One connection per process, shared by every consumer.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
