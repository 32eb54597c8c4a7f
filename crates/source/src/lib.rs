//! `shopfront-source` — the catalog's external data source.
//!
//! One HTTP GET per page load, no retry, no auth, no source-side pagination.
//! A failed fetch is fatal for that render cycle and is returned to the
//! caller; there is no cached fallback and never a silently empty catalog.

pub mod client;

pub use client::{CatalogSource, SourceError, DEFAULT_BASE_URL};
