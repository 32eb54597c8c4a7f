//! `shopfront-catalog` — the product catalog domain.
//!
//! This crate contains the **pure domain** side of the listing: the wire-shaped
//! `Product` model and the read-only `Catalog` snapshot (no IO, no HTTP).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, KNOWN_CATEGORIES};
pub use product::{Product, ProductId, Rating};
