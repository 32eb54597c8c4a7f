use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shopfront_catalog::Product;

/// The filters currently applied to the table.
///
/// "No filter" has exactly one encoding per dimension: an empty category set
/// and an empty query string both mean "match everything". There is no
/// second, `Option`-shaped encoding of absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    categories: BTreeSet<String>,
    query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the category selection (multi-select choice list).
    pub fn set_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
    }

    /// Replace the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Drop every filter at once (the "clear all" affordance).
    pub fn clear_all(&mut self) {
        self.clear_categories();
        self.clear_query();
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_unfiltered(&self) -> bool {
        self.categories.is_empty() && self.query.is_empty()
    }

    /// Both predicates must pass: category membership (empty set matches
    /// everything) and case-insensitive substring match on the title (empty
    /// query matches everything). Lowercasing is Unicode-default and
    /// locale-neutral, so matching does not vary by platform.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let query_ok = self.query.is_empty()
            || product
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        category_ok && query_ok
    }
}

/// The subset of `catalog` visible under `filter`, in original catalog order.
///
/// Single stable pass: no re-sort, no dedup, no pagination. An empty result
/// is an ordinary outcome, never an error. Pure function of its inputs;
/// selection state plays no part.
pub fn visible_rows<'a>(catalog: &'a [Product], filter: &FilterState) -> Vec<&'a Product> {
    catalog.iter().filter(|p| filter.matches(p)).collect()
}
