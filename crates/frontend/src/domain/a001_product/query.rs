//! Deep links into the products page: `?category=security&q=led&sort=newest`

use contracts::domain::a001_product::{CatalogView, CategoryFilter};
use contracts::enums::SortMode;
use serde::Deserialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl CatalogQuery {
    /// Parses a location search string, with or without the leading `?`.
    /// Malformed input yields an empty query.
    pub fn parse(search: &str) -> Self {
        let raw = search.trim_start_matches('?');
        if raw.is_empty() {
            return Self::default();
        }
        serde_qs::from_str(raw).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed catalog query {:?}: {}", raw, e);
            Self::default()
        })
    }

    /// Query of the current page URL
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| Self::parse(&search))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.q.is_none() && self.sort.is_none()
    }

    /// Sort mode named by the query. Unknown codes fall back to featured.
    pub fn sort_mode(&self) -> Option<SortMode> {
        self.sort.as_deref().map(|code| {
            code.parse::<SortMode>().unwrap_or_else(|e| {
                log::warn!("{}, using {}", e, SortMode::Featured);
                SortMode::Featured
            })
        })
    }

    /// Category filter named by the query. Unknown codes stay unrecognized
    /// and produce an empty listing.
    pub fn filter(&self) -> Option<CategoryFilter> {
        self.category.as_deref().map(|code| {
            let filter = CategoryFilter::from_code(code);
            if let CategoryFilter::Unrecognized(code) = &filter {
                log::warn!("Unknown category filter {:?}, nothing will match", code);
            }
            filter
        })
    }

    pub fn apply(&self, view: &mut CatalogView<'_>) {
        if let Some(filter) = self.filter() {
            view.set_filter(filter);
        }
        if let Some(q) = &self.q {
            view.set_search(q);
        }
        if let Some(sort) = self.sort_mode() {
            view.set_sort(sort);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::list_catalog;
    use contracts::enums::ProductCategory;
    use contracts::shared::config::CatalogConfig;

    #[test]
    fn test_parse_full_query() {
        let query = CatalogQuery::parse("?category=security&q=door&sort=newest");
        assert_eq!(query.category.as_deref(), Some("security"));
        assert_eq!(query.q.as_deref(), Some("door"));
        assert_eq!(query.sort_mode(), Some(SortMode::Newest));
        assert_eq!(query.filter(), Some(CategoryFilter::Only(ProductCategory::Security)));
    }

    #[test]
    fn test_parse_empty_query() {
        assert!(CatalogQuery::parse("").is_empty());
        assert!(CatalogQuery::parse("?").is_empty());
    }

    #[test]
    fn test_percent_decoding() {
        let query = CatalogQuery::parse("q=smart%20panel");
        assert_eq!(query.q.as_deref(), Some("smart panel"));
    }

    #[test]
    fn test_unknown_codes() {
        let query = CatalogQuery::parse("category=elevators&sort=cheapest");
        assert_eq!(query.sort_mode(), Some(SortMode::Featured));
        assert_eq!(
            query.filter(),
            Some(CategoryFilter::Unrecognized("elevators".to_string()))
        );
    }

    #[test]
    fn test_apply_to_view() {
        let mut view = CatalogView::new(list_catalog(), &CatalogConfig::default());
        CatalogQuery::parse("category=components&sort=newest").apply(&mut view);

        let ids: Vec<u32> = view.visible().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![13, 10, 9, 3]);
        assert!(!view.has_more());
    }

    #[test]
    fn test_empty_query_keeps_defaults() {
        let mut view = CatalogView::new(list_catalog(), &CatalogConfig::default());
        CatalogQuery::default().apply(&mut view);
        assert_eq!(view.filter(), &CategoryFilter::All);
        assert_eq!(view.visible_count(), 6);
    }
}
