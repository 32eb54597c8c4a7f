use chrono::{DateTime, Utc};

use crate::product::{Product, ProductId};

/// Category labels the source is known to use, in the order the choice list
/// presents them.
pub const KNOWN_CATEGORIES: [&str; 4] = [
    "men's clothing",
    "women's clothing",
    "electronics",
    "jewelery",
];

/// Read-only catalog snapshot.
///
/// Loaded once per session from the external source and never refreshed or
/// mutated afterwards; everything downstream (filtering, selection) borrows
/// from it. Original source order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            loaded_at: Utc::now(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// When this snapshot was taken.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Look up a product by id. Ids are assumed unique upstream; the first
    /// match wins if they are not.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category labels actually present, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }
}
