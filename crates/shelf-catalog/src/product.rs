//! Product data structure

use serde::{Deserialize, Serialize};

/// Row id assigned by the store on first insert.
pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier; `None` until the store assigns one
    pub id: Option<ProductId>,
    /// Display title
    pub title: String,
    /// Longer description shown on the detail form
    pub description: String,
    /// URI of the product image; the catalog never owns the image bytes
    pub image: String,
    /// Unit price
    pub price: f64,
}

impl Product {
    /// Build a record that has not been persisted yet.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            image: image.into(),
            price,
        }
    }

    /// Whether the store has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_is_unassigned() {
        let product = Product::new("Lamp", "Desk lamp", "img://1", 19.99);
        assert_eq!(product.id, None);
        assert!(!product.is_persisted());
        assert_eq!(product.title, "Lamp");
    }

    #[test]
    fn test_wire_shape() {
        let product = Product {
            id: Some(3),
            title: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            image: "img://1".to_string(),
            price: 19.99,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Lamp");
        assert_eq!(json["price"], 19.99);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
