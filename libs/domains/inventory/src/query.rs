//! Query/View Engine - search, filter, and pagination over the collection

use crate::models::{CategoryId, Equipment};

/// Default rows per page, matching the store-agnostic table default
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The active search/filter/pagination state for the equipment table.
///
/// Changing the search text or the category filter resets the page index to
/// 0: a stale index from a larger result set would otherwise silently show an
/// empty page. The same applies to page-size changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    search_text: String,
    category_filter: Option<CategoryId>,
    page_index: usize,
    page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category_filter: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category_filter(&self) -> Option<CategoryId> {
        self.category_filter
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the free-text search; resets to page 0
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page_index = 0;
    }

    /// Set or clear the category filter; resets to page 0
    pub fn set_category_filter(&mut self, filter: Option<CategoryId>) {
        self.category_filter = filter;
        self.page_index = 0;
    }

    /// Move to a page; out-of-range pages derive an empty row set, not an error
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Change rows per page; resets to page 0
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page_index = 0;
    }

    /// The filter predicate: case-insensitive name containment AND category
    /// match when a filter is set
    pub fn matches(&self, row: &Equipment) -> bool {
        let name_matches = row
            .name
            .to_lowercase()
            .contains(&self.search_text.to_lowercase());
        let category_matches = self
            .category_filter
            .is_none_or(|wanted| row.category_id == wanted);
        name_matches && category_matches
    }
}

/// One derived page of the table plus the pagination-control total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The visible slice, preserving collection order
    pub rows: Vec<Equipment>,
    /// Size of the full filtered set, not the slice; pagination controls
    /// need the total to render page counts correctly
    pub total_count: usize,
}

/// Derive the currently visible page. Pure and deterministic; never mutates
/// the collection.
pub fn derive_page(collection: &[Equipment], query: &ViewQuery) -> Page {
    let filtered: Vec<&Equipment> = collection.iter().filter(|row| query.matches(row)).collect();
    let total_count = filtered.len();

    let start = query.page_index().saturating_mul(query.page_size());
    let end = start.saturating_add(query.page_size()).min(total_count);
    let rows = if start >= total_count {
        Vec::new()
    } else {
        filtered[start..end].iter().map(|row| (*row).clone()).collect()
    };

    Page { rows, total_count }
}
