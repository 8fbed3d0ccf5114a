//! Main application state container
//!
//! The shop owns the one database connection and the product store built
//! on it. It is opened once at startup and cloned into every consumer;
//! clones share the same underlying state.

use tokio::sync::watch;

use shelf_catalog::{Product, ProductId, ProductStore};
use shelf_storage::Database;

use crate::config::Config;
use crate::Result;

pub struct Shop {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// Product store with the live catalog feed
    products: ProductStore,
}

impl Shop {
    /// Open the shop: create the data directory, open the database, and
    /// seed the catalog feed.
    pub fn open(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let products = ProductStore::new(db.clone())?;

        tracing::info!(path = %config.database_path.display(), "Shop opened");

        Ok(Self {
            config,
            db,
            products,
        })
    }

    // === Catalog operations ===

    pub fn products(&self) -> &ProductStore {
        &self.products
    }

    pub async fn upsert_product(&self, product: Product) -> Result<()> {
        Ok(self.products.upsert(product).await?)
    }

    pub async fn product(&self, id: ProductId) -> Result<Product> {
        Ok(self.products.get(id).await?)
    }

    pub fn watch_products(&self) -> watch::Receiver<Vec<Product>> {
        self.products.watch()
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Shop {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            products: self.products.clone(),
        }
    }
}
