//! Product store
//!
//! Owns every read and write of the `products` table and publishes the
//! live catalog feed. Each operation runs the blocking SQLite work on the
//! runtime's blocking pool so a UI event loop calling in is never stalled.

use std::sync::Arc;

use rusqlite::{Connection, OptionalExtension};
use tokio::sync::watch;

use shelf_storage::Database;

use crate::error::CatalogError;
use crate::product::{Product, ProductId};
use crate::Result;

pub struct ProductStore {
    /// Database for persistence
    db: Database,
    /// Current catalog, re-published after every write
    catalog: Arc<watch::Sender<Vec<Product>>>,
}

impl ProductStore {
    /// Build the store and seed the catalog feed with the current rows.
    pub fn new(db: Database) -> Result<Self> {
        let initial = db.with_connection(read_catalog)?;
        let (catalog, _) = watch::channel(initial);

        Ok(Self {
            db,
            catalog: Arc::new(catalog),
        })
    }

    /// Insert or replace a product.
    ///
    /// A record without an id is inserted and the store assigns one; a
    /// record with an id replaces that row's content entirely, inserting
    /// if the id is vacant. The updated catalog is published before this
    /// returns, so the next snapshot a subscriber sees includes the write.
    pub async fn upsert(&self, product: Product) -> Result<()> {
        let db = self.db.clone();
        let catalog = Arc::clone(&self.catalog);

        tokio::task::spawn_blocking(move || -> Result<()> {
            db.with_connection(|conn| {
                let product_id = match product.id {
                    Some(id) => {
                        conn.execute(
                            "INSERT OR REPLACE INTO products (id, title, description, image, price)
                             VALUES (?1, ?2, ?3, ?4, ?5)",
                            rusqlite::params![
                                id,
                                product.title,
                                product.description,
                                product.image,
                                product.price,
                            ],
                        )?;
                        id
                    }
                    None => {
                        conn.execute(
                            "INSERT INTO products (title, description, image, price)
                             VALUES (?1, ?2, ?3, ?4)",
                            rusqlite::params![
                                product.title,
                                product.description,
                                product.image,
                                product.price,
                            ],
                        )?;
                        conn.last_insert_rowid()
                    }
                };

                // Publish while still holding the connection so snapshots
                // can never go out in a different order than the writes
                let snapshot = read_catalog(conn)?;
                catalog.send_replace(snapshot);

                tracing::info!(product_id, "Saved product");
                Ok(())
            })?;
            Ok(())
        })
        .await?
    }

    /// One-shot lookup by id.
    pub async fn get(&self, id: ProductId) -> Result<Product> {
        let db = self.db.clone();

        tokio::task::spawn_blocking(move || -> Result<Product> {
            let product = db.with_connection(|conn| {
                let product = conn
                    .query_row(
                        "SELECT id, title, description, image, price
                         FROM products WHERE id = ?1",
                        [id],
                        row_to_product,
                    )
                    .optional()?;
                Ok(product)
            })?;

            product.ok_or(CatalogError::NotFound(id))
        })
        .await?
    }

    /// Subscribe to the live catalog.
    ///
    /// The receiver observes the current catalog as its first delivery and
    /// a fresh full snapshot after every mutation. Dropping it is the only
    /// way to unsubscribe, and has no other effect.
    pub fn watch(&self) -> watch::Receiver<Vec<Product>> {
        let mut rx = self.catalog.subscribe();
        rx.mark_changed();
        rx
    }
}

impl Clone for ProductStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

fn row_to_product(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        image: row.get(3)?,
        price: row.get(4)?,
    })
}

/// Load all rows in storage order.
fn read_catalog(conn: &Connection) -> shelf_storage::Result<Vec<Product>> {
    let mut stmt = conn.prepare("SELECT id, title, description, image, price FROM products")?;
    let rows = stmt.query_map([], row_to_product)?;

    let mut products = Vec::new();
    for row in rows {
        products.push(row?);
    }

    Ok(products)
}
