//! Pure catalog computations: filter, search, sort, paging and lookup.
//!
//! None of these functions touch the source list; they return borrowed
//! views over it.

use super::aggregate::{Product, ProductId};
use crate::enums::{ProductCategory, SortMode};
use std::fmt;

/// Category filter selected in the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
    /// A code that names no category. Matches nothing.
    Unrecognized(String),
}

impl CategoryFilter {
    /// Parses a filter code. Unknown codes are kept as `Unrecognized`
    /// instead of widening to `All`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "all" => CategoryFilter::All,
            other => match ProductCategory::from_code(other) {
                Some(category) => CategoryFilter::Only(category),
                None => CategoryFilter::Unrecognized(other.to_string()),
            },
        }
    }

    pub fn code(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.code(),
            CategoryFilter::Unrecognized(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(category) => category.display_name(),
            CategoryFilter::Unrecognized(code) => code,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Filters, searches and sorts the catalog.
///
/// Sorting is stable, so ties keep their source order.
pub fn apply_view<'a>(
    catalog: &'a [Product],
    filter: &CategoryFilter,
    search: &str,
    sort: SortMode,
) -> Vec<&'a Product> {
    let needle = search.trim().to_lowercase();

    let mut results: Vec<&Product> = catalog
        .iter()
        .filter(|p| filter.matches(p))
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .collect();

    match sort {
        SortMode::Newest | SortMode::Popular => results.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::Featured | SortMode::Price => {}
    }

    results
}

/// First `visible_count` results, clamped to the result length
pub fn page<T>(results: &[T], visible_count: usize) -> &[T] {
    &results[..visible_count.min(results.len())]
}

/// Next visible count after a "load more" trigger: `min(visible + increment, total)`.
///
/// The result never exceeds `total`. A count already past `total` is pulled
/// back to it.
pub fn load_more(visible_count: usize, increment: usize, total: usize) -> usize {
    visible_count.saturating_add(increment).min(total)
}

/// Whether a "load more" control should be offered
pub fn has_more(visible_count: usize, total: usize) -> bool {
    visible_count < total
}

/// Quick-view lookup
pub fn find_by_id(catalog: &[Product], id: ProductId) -> Option<&Product> {
    catalog.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::list_catalog;

    fn ids(results: &[&Product]) -> Vec<u32> {
        results.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_filter_by_category() {
        for category in ProductCategory::all() {
            let results = apply_view(
                list_catalog(),
                &CategoryFilter::Only(category),
                "",
                SortMode::Featured,
            );
            assert!(!results.is_empty());
            assert!(results.iter().all(|p| p.category == category));
        }

        let security = apply_view(
            list_catalog(),
            &CategoryFilter::from_code("security"),
            "",
            SortMode::Featured,
        );
        assert_eq!(ids(&security), vec![2, 6, 11]);
    }

    #[test]
    fn test_unrecognized_filter_is_empty() {
        let filter = CategoryFilter::from_code("elevators");
        assert_eq!(filter, CategoryFilter::Unrecognized("elevators".to_string()));
        assert!(apply_view(list_catalog(), &filter, "", SortMode::Featured).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = apply_view(list_catalog(), &CategoryFilter::All, "  LED ", SortMode::Featured);
        assert_eq!(ids(&results), vec![9]);

        let results = apply_view(list_catalog(), &CategoryFilter::All, "Emergency", SortMode::Featured);
        assert_eq!(ids(&results), vec![6, 9, 13]);

        for term in ["display", "IOT", "air"] {
            let needle = term.to_lowercase();
            let results = apply_view(list_catalog(), &CategoryFilter::All, term, SortMode::Featured);
            assert!(!results.is_empty());
            for p in results {
                assert!(
                    p.title.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle)
                        || p.category.code().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_search_matches_category_code() {
        let results = apply_view(list_catalog(), &CategoryFilter::All, "multimedia", SortMode::Featured);
        assert_eq!(ids(&results), vec![4, 8, 15]);
    }

    #[test]
    fn test_blank_search_is_noop() {
        let results = apply_view(list_catalog(), &CategoryFilter::All, "   ", SortMode::Featured);
        assert_eq!(results.len(), 15);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let results = apply_view(
            list_catalog(),
            &CategoryFilter::Only(ProductCategory::Components),
            "lighting",
            SortMode::Newest,
        );
        assert_eq!(ids(&results), vec![13, 9]);
    }

    #[test]
    fn test_sort_modes() {
        let featured = apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Featured);
        assert_eq!(ids(&featured), (1..=15).collect::<Vec<_>>());
        assert_eq!(
            featured,
            apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Featured)
        );

        let newest = apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Newest);
        assert!(newest.windows(2).all(|w| w[0].id > w[1].id));

        let popular = apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Popular);
        assert_eq!(popular, newest);

        let price = apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Price);
        assert_eq!(price, featured);
    }

    #[test]
    fn test_empty_catalog() {
        let results = apply_view(&[], &CategoryFilter::All, "", SortMode::Newest);
        assert!(results.is_empty());
        assert!(page(&results, 6).is_empty());
        assert_eq!(load_more(0, 3, 0), 0);
        assert!(!has_more(0, 0));
    }

    #[test]
    fn test_page_bounds() {
        let results = apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Featured);
        assert!(page(&results, 0).is_empty());
        assert_eq!(page(&results, 15), results.as_slice());
        assert_eq!(page(&results, 100), results.as_slice());
        assert_eq!(ids(page(&results, 6)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_load_more_is_clamped_to_total() {
        for total in 0..20 {
            for visible in 0..25 {
                for increment in 0..5 {
                    let next = load_more(visible, increment, total);
                    assert!(next <= total);
                    assert!(next >= visible.min(total));
                }
            }
        }
    }

    #[test]
    fn test_load_more_past_total_pulls_back() {
        assert_eq!(load_more(20, 3, 15), 15);
        assert_eq!(load_more(15, 3, 15), 15);
        assert_eq!(load_more(7, 0, 3), 3);
    }

    #[test]
    fn test_load_more_walkthrough() {
        let results = apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Featured);
        let total = results.len();

        let mut visible = 6;
        visible = load_more(visible, 3, total);
        assert_eq!(visible, 9);
        assert_eq!(ids(page(&results, visible)), (1..=9).collect::<Vec<_>>());

        visible = load_more(visible, 3, total);
        visible = load_more(visible, 3, total);
        assert_eq!(visible, 15);
        assert!(!has_more(visible, total));
        assert_eq!(load_more(visible, 3, total), 15);
    }

    #[test]
    fn test_find_by_id() {
        let product = find_by_id(list_catalog(), ProductId(4)).unwrap();
        assert_eq!(product.title, "Digital Multimedia Display");
        assert!(find_by_id(list_catalog(), ProductId(999)).is_none());
    }

    #[test]
    fn test_source_is_untouched() {
        let before = list_catalog().to_vec();
        let _ = apply_view(list_catalog(), &CategoryFilter::All, "", SortMode::Newest);
        assert_eq!(list_catalog(), before.as_slice());
    }
}
