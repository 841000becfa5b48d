use super::aggregate::{Product, ProductId};
use super::view::{apply_view, find_by_id, has_more, load_more, page, CategoryFilter};
use crate::enums::SortMode;
use crate::shared::config::CatalogConfig;

/// Handle for one in-flight "load more".
///
/// Tickets issued before a filter, search or sort change are stale and are
/// ignored by [`CatalogView::finish_load_more`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// View state of the products page.
///
/// Owns the filter parameters and the visible window over a borrowed
/// catalog. The current result set is cached and rebuilt on every change.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    catalog: &'a [Product],
    filter: CategoryFilter,
    search: String,
    sort: SortMode,
    results: Vec<&'a Product>,
    visible_count: usize,
    initial_page_size: usize,
    page_increment: usize,
    generation: u64,
    pending: bool,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a [Product], config: &CatalogConfig) -> Self {
        let mut view = Self {
            catalog,
            filter: CategoryFilter::All,
            search: String::new(),
            sort: SortMode::Featured,
            results: Vec::new(),
            visible_count: 0,
            initial_page_size: config.initial_page_size,
            page_increment: config.page_increment,
            generation: 0,
            pending: false,
        };
        view.refresh();
        view
    }

    pub fn catalog(&self) -> &'a [Product] {
        self.catalog
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.filter == filter {
            return;
        }
        log::debug!("catalog filter: {} -> {}", self.filter, filter);
        self.filter = filter;
        self.refresh();
    }

    /// Terms differing only in surrounding whitespace count as unchanged
    pub fn set_search(&mut self, search: &str) {
        if self.search.trim() == search.trim() {
            return;
        }
        log::debug!("catalog search: {:?}", search);
        self.search = search.to_string();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        if self.sort == sort {
            return;
        }
        log::debug!("catalog sort: {} -> {}", self.sort, sort);
        self.sort = sort;
        self.refresh();
    }

    /// Full filtered and sorted result set
    pub fn results(&self) -> &[&'a Product] {
        &self.results
    }

    /// Currently rendered part of the result set
    pub fn visible(&self) -> &[&'a Product] {
        page(&self.results, self.visible_count)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn has_more(&self) -> bool {
        has_more(self.visible_count, self.total())
    }

    pub fn is_loading(&self) -> bool {
        self.pending
    }

    /// Starts a "load more". Returns `None` while another load is pending
    /// or when nothing is left to show.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        if self.pending || !self.has_more() {
            return None;
        }
        self.pending = true;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Applies a finished "load more". Returns `false` for stale tickets.
    pub fn finish_load_more(&mut self, ticket: LoadTicket) -> bool {
        if ticket.generation != self.generation {
            log::debug!("discarding stale load ticket");
            return false;
        }
        self.pending = false;
        let before = self.visible_count;
        self.visible_count = load_more(before, self.page_increment, self.total());
        log::debug!("catalog visible: {} -> {}", before, self.visible_count);
        true
    }

    /// Quick-view lookup over the whole catalog
    pub fn quick_view(&self, id: ProductId) -> Option<&'a Product> {
        find_by_id(self.catalog, id)
    }

    fn refresh(&mut self) {
        self.results = apply_view(self.catalog, &self.filter, &self.search, self.sort);
        self.visible_count = self.initial_page_size.min(self.results.len());
        self.generation += 1;
        self.pending = false;
    }
}
