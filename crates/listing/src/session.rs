use shopfront_catalog::{Catalog, Product, ProductId};

use crate::chips::{applied_filters, FilterChip};
use crate::error::{ListingError, ListingResult};
use crate::filter::{visible_rows, FilterState};
use crate::row::{ProductDetail, ProductRow};
use crate::selection::Selection;

/// One viewer's listing state: a catalog snapshot plus the filter and
/// selection it drives.
///
/// Owned by a single logical viewer; every operation is synchronous and
/// in-memory, and the catalog never changes after construction, so no
/// locking is involved. Filtering is re-evaluated per call and is
/// independent of the selection.
#[derive(Debug, Clone)]
pub struct ListingSession {
    catalog: Catalog,
    filter: FilterState,
    selection: Selection,
}

impl ListingSession {
    /// Start a session over a freshly loaded catalog: no filters, nothing
    /// selected.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
            selection: Selection::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Products currently visible under the active filters, catalog order.
    pub fn visible_rows(&self) -> Vec<&Product> {
        visible_rows(self.catalog.products(), &self.filter)
    }

    /// Display-shaped rows for the table widget.
    pub fn table_rows(&self) -> Vec<ProductRow> {
        self.visible_rows()
            .into_iter()
            .map(ProductRow::from_product)
            .collect()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.filter.clear_query();
    }

    pub fn set_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.set_categories(categories);
    }

    pub fn clear_categories(&mut self) {
        self.filter.clear_categories();
    }

    /// The "clear all" affordance next to the chips.
    pub fn clear_all_filters(&mut self) {
        self.filter.clear_all();
    }

    /// Chips summarizing the currently applied filters.
    pub fn applied_filters(&self) -> Vec<FilterChip> {
        applied_filters(&self.filter)
    }

    /// Row action: open the detail overlay on the product with `id`.
    ///
    /// Replaces any current selection. Unknown ids are an error; the table
    /// only hands out ids the catalog produced, so hitting this means the
    /// caller and the catalog disagree.
    pub fn select(&mut self, id: ProductId) -> ListingResult<()> {
        let product = self
            .catalog
            .get(id)
            .ok_or(ListingError::ProductNotFound(id))?
            .clone();
        self.selection.select(product);
        Ok(())
    }

    /// Close the detail overlay.
    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    /// Detail-overlay contents, when a product is selected.
    pub fn detail(&self) -> Option<ProductDetail> {
        self.selection.active().map(ProductDetail::from_product)
    }
}
