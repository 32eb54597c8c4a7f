//! Listing error model.

use shopfront_catalog::ProductId;
use thiserror::Error;

/// Result type used across the listing layer.
pub type ListingResult<T> = Result<T, ListingError>;

/// Listing-level error.
///
/// An empty filter result is not an error; the only failure here is a row
/// action referencing an id the catalog never held.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// A detail request named a product the catalog does not contain.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}
