//! Add/edit form state
//!
//! Validation happens here, before the store is ever invoked. Checks run
//! in the order the form surfaces them; the first failure wins.

use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::product::{Product, ProductId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Set when editing an existing product, `None` on the add form
    pub id: Option<ProductId>,
    pub title: String,
    pub description: String,
    /// `None` until the user has picked an image
    pub image: Option<String>,
    /// Raw text-field contents, parsed during validation
    pub price: String,
}

impl ProductDraft {
    /// Empty add form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit form pre-filled from an existing record.
    pub fn edit(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            image: Some(product.image.clone()),
            price: product.price.to_string(),
        }
    }

    /// Check the draft and build the record to persist.
    ///
    /// Title and description are trimmed only for the blank check; the
    /// stored values keep the user's raw text.
    pub fn validate(&self) -> std::result::Result<Product, DraftError> {
        let image = match self.image.as_deref() {
            Some(image) if !image.trim().is_empty() => image,
            _ => return Err(DraftError::MissingImage),
        };

        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }

        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice(self.price.clone()))?;

        if price == 0.0 {
            return Err(DraftError::ZeroPrice);
        }

        Ok(Product {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image: image.to_string(),
            price,
        })
    }
}
