//! Pure derivation of what the dashboard shows from a [`BrowserState`].
//!
//! [`derive`] is called for every frame; nothing is cached between calls.

use crate::core::records::Record;

use super::state::{BrowserState, Phase};

/// Records whose lower-cased title contains the lower-cased query, or whose
/// decimal id contains the query. An empty query keeps every record.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle) || record.id.to_string().contains(query)
        })
        .collect()
}

/// `ceil(count / page_size)`; zero for an empty set.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Rows of 1-based `page`. Pages outside the set yield an empty slice.
pub fn page_slice<'a, T>(filtered: &'a [T], page: usize, page_size: usize) -> &'a [T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(filtered.len());
    &filtered[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Everything the dashboard renders for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub phase: Phase,
    pub rows: Vec<&'a Record>,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_buttons: Vec<PageButton>,
    pub loading: bool,
    pub error_message: Option<&'a str>,
    /// The table is hidden while loading and after a failed fetch.
    pub show_table: bool,
}

impl ListView<'_> {
    /// Current page lies past the last page (possible after a query edit).
    pub fn page_out_of_range(&self) -> bool {
        self.current_page > self.total_pages && self.total_pages > 0
    }
}

pub fn derive(state: &BrowserState) -> ListView<'_> {
    let filtered = filter_records(state.records(), state.query());
    let filtered_count = filtered.len();
    let total = total_pages(filtered_count, state.page_size());
    let current_page = state.page();
    let rows = page_slice(&filtered, current_page, state.page_size()).to_vec();

    let page_buttons = (1..=total)
        .map(|number| PageButton {
            number,
            active: number == current_page,
        })
        .collect();

    ListView {
        phase: state.phase(),
        rows,
        filtered_count,
        total_pages: total,
        current_page,
        page_buttons,
        loading: state.loading(),
        error_message: state.error_message(),
        show_table: !state.loading() && state.error_message().is_none(),
    }
}
