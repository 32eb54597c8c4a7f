//! Display shaping: the strings the table and the detail overlay render.

use shopfront_catalog::{Product, ProductId};

use crate::text::truncate;

/// Width the table clips long text cells (title, description) to.
pub const TEXT_CELL_WIDTH: usize = 20;

/// One display-ready table row.
///
/// Everything is pre-formatted: the rendering surface just places strings in
/// cells. Missing fields come through as empty strings, never as a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub image: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub rating: String,
    pub description: String,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: product.image.clone(),
            title: truncate(Some(&product.title), TEXT_CELL_WIDTH).unwrap_or_default(),
            category: product.category.clone(),
            price: format!("{:.2}", product.price),
            rating: rating_display(product),
            description: truncate(Some(&product.description), TEXT_CELL_WIDTH)
                .unwrap_or_default(),
        }
    }
}

/// What the detail overlay shows for the selected product.
///
/// An absent rating renders as blank strings rather than aborting the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub title: String,
    pub image: String,
    pub description: String,
    pub rating_value: String,
    pub rated_by: String,
}

impl ProductDetail {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            rating_value: rating_display(product),
            rated_by: product
                .rating
                .as_ref()
                .map(|r| r.count.to_string())
                .unwrap_or_default(),
        }
    }
}

fn rating_display(product: &Product) -> String {
    product
        .rating
        .as_ref()
        .map(|r| format!("{:.1}", r.rate))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::Rating;

    fn product() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Fjallraven Foldsack No. 1 Backpack".to_string(),
            price: 109.95,
            description: "Fits 15 inch laptops and more".to_string(),
            category: "men's clothing".to_string(),
            image: "https://example.test/1.jpg".to_string(),
            rating: Some(Rating { rate: 3.9, count: 120 }),
        }
    }

    #[test]
    fn row_clips_long_text_and_formats_price() {
        let row = ProductRow::from_product(&product());
        assert_eq!(row.id, ProductId::new(1));
        assert_eq!(row.title.chars().count(), TEXT_CELL_WIDTH);
        assert!(row.title.ends_with('…'));
        assert_eq!(row.price, "109.95");
        assert_eq!(row.rating, "3.9");
        assert_eq!(row.description.chars().count(), TEXT_CELL_WIDTH);
    }

    #[test]
    fn detail_carries_full_text_and_rating_count() {
        let detail = ProductDetail::from_product(&product());
        assert_eq!(detail.title, "Fjallraven Foldsack No. 1 Backpack");
        assert_eq!(detail.description, "Fits 15 inch laptops and more");
        assert_eq!(detail.rating_value, "3.9");
        assert_eq!(detail.rated_by, "120");
    }

    #[test]
    fn missing_fields_render_as_blanks() {
        let mut bare = product();
        bare.rating = None;
        bare.description = String::new();
        bare.image = String::new();

        let row = ProductRow::from_product(&bare);
        assert_eq!(row.rating, "");
        assert_eq!(row.description, "");

        let detail = ProductDetail::from_product(&bare);
        assert_eq!(detail.rating_value, "");
        assert_eq!(detail.rated_by, "");
        assert_eq!(detail.image, "");
    }
}
