//! `shopfront-listing` — view-model logic for the product table.
//!
//! Filter engine, selection state, and display shaping for a single listing
//! session, implemented purely as deterministic logic (no IO, no HTTP, no
//! rendering). The rendering surface consumes the outputs and feeds user
//! actions back in.

pub mod chips;
pub mod error;
pub mod filter;
pub mod row;
pub mod selection;
pub mod session;
pub mod text;

pub use chips::{applied_filters, disambiguate_label, FilterChip, CATEGORY_FILTER_KEY};
pub use error::{ListingError, ListingResult};
pub use filter::{visible_rows, FilterState};
pub use row::{ProductDetail, ProductRow, TEXT_CELL_WIDTH};
pub use selection::Selection;
pub use session::ListingSession;
pub use text::truncate;
