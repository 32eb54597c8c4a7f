//! Applied-filter chips shown next to the search box.

use crate::filter::FilterState;

/// Internal key for the category filter dimension.
pub const CATEGORY_FILTER_KEY: &str = "category";

/// One chip summarizing an applied filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: &'static str,
    pub label: String,
}

/// Human-readable chip label for a filter key and its applied values.
///
/// Total and pure: keys without a specialized phrasing fall back to the raw
/// values, comma-joined. Category labels read fine verbatim, so they take
/// the fallback. An unknown key is not an error.
pub fn disambiguate_label(key: &str, values: &[String]) -> String {
    match key {
        "query" => format!("Title contains \"{}\"", values.join(", ")),
        _ => values.join(", "),
    }
}

/// Chips for every filter dimension that is currently active.
///
/// A dimension at its "no filter" state contributes no chip. The free-text
/// query is surfaced by the search box itself, not as a chip, matching the
/// filter widget's convention.
pub fn applied_filters(filter: &FilterState) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    if !filter.categories().is_empty() {
        let values: Vec<String> = filter.categories().iter().cloned().collect();
        chips.push(FilterChip {
            key: CATEGORY_FILTER_KEY,
            label: disambiguate_label(CATEGORY_FILTER_KEY, &values),
        });
    }
    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back_to_joined_values() {
        let values = vec!["alpha".to_string(), "beta".to_string()];
        assert_eq!(disambiguate_label("no-such-key", &values), "alpha, beta");
        assert_eq!(disambiguate_label("no-such-key", &[]), "");
    }

    #[test]
    fn query_key_gets_specialized_phrasing() {
        let values = vec!["hat".to_string()];
        assert_eq!(
            disambiguate_label("query", &values),
            "Title contains \"hat\""
        );
    }

    #[test]
    fn category_values_render_verbatim() {
        let values = vec!["men's clothing".to_string()];
        assert_eq!(
            disambiguate_label(CATEGORY_FILTER_KEY, &values),
            "men's clothing"
        );
    }

    #[test]
    fn no_chips_when_unfiltered() {
        let filter = FilterState::new();
        assert!(applied_filters(&filter).is_empty());

        // A query alone contributes no chip either.
        let mut filter = FilterState::new();
        filter.set_query("hat");
        assert!(applied_filters(&filter).is_empty());
    }

    #[test]
    fn category_chip_appears_and_clears() {
        let mut filter = FilterState::new();
        filter.set_categories(["electronics", "jewelery"]);

        let chips = applied_filters(&filter);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, CATEGORY_FILTER_KEY);
        assert_eq!(chips[0].label, "electronics, jewelery");

        filter.clear_categories();
        assert!(applied_filters(&filter).is_empty());
    }
}
