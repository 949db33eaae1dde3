//! Catalog Model

use serde::{Deserialize, Serialize};

use super::{Category, Product, Tag};

/// Everything fetched from the remote source in one load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub tags: Vec<Tag>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, products: Vec<Product>, tags: Vec<Tag>) -> Self {
        Self {
            categories,
            products,
            tags,
        }
    }

    /// Products belonging to a category, in catalog order
    pub fn products_in_category(&self, category_id: i64) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.category_id == category_id)
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
