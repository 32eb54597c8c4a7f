use serde::{Deserialize, Serialize};

/// Product identifier (small integer id assigned by the upstream source).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate customer rating as reported by the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating in `[0, 5]`.
    pub rate: f64,
    /// Number of ratings behind the average.
    pub count: u64,
}

/// A single catalog entry, immutable for the session.
///
/// Shape mirrors the source's JSON. `description`, `image` and `rating` are
/// lenient: a product missing any of them still deserializes and renders as
/// blank rather than faulting the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Non-negative decimal price, wire-faithful (no arithmetic is done on it).
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_from_source_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.test/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.price, 109.95);
        let rating = product.rating.unwrap();
        assert_eq!(rating.rate, 3.9);
        assert_eq!(rating.count, 120);
    }

    #[test]
    fn product_without_rating_still_deserializes() {
        let json = r#"{
            "id": 7,
            "title": "Plain Mug",
            "price": 4.5,
            "category": "electronics"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, None);
        assert_eq!(product.description, "");
        assert_eq!(product.image, "");
    }

    #[test]
    fn product_id_is_transparent_in_json() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(id.to_string(), "42");
    }
}
