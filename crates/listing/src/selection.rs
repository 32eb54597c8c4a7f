use serde::{Deserialize, Serialize};
use shopfront_catalog::Product;

/// The product currently shown in the detail overlay, if any.
///
/// At most one product at a time; selecting with something already open just
/// replaces it (no stacking, no error). Products are immutable for the
/// session, so holding an owned copy is equivalent to holding a reference
/// into the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    active: Option<Product>,
}

impl Selection {
    /// Starts with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on `product`, replacing any current selection.
    pub fn select(&mut self, product: Product) {
        self.active = Some(product);
    }

    /// Close the overlay.
    pub fn dismiss(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Product> {
        self.active.as_ref()
    }

    /// Overlay visibility is a direct function of the selection.
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}
