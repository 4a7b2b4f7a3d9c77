//! Browser state machine: `Idle → Loading → Ready | Error`.
//!
//! Every transition consumes the current snapshot and returns the next one.
//! Nothing derived from the records is stored here; see [`super::view`].

use crate::core::records::{Record, FETCH_ERROR_MESSAGE};

use super::view::{filter_records, total_pages};

/// Rows per page.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    records: Vec<Record>,
    query: String,
    page: usize,
    page_size: usize,
    phase: Phase,
    error_message: Option<String>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            phase: Phase::Idle,
            error_message: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    // ── Fetch lifecycle ─────────────────────────────────────────────────

    /// `Idle → Loading`. Any other phase is left as is: one fetch per mount.
    pub fn begin_fetch(mut self) -> Self {
        if self.phase == Phase::Idle {
            self.phase = Phase::Loading;
        } else {
            log::debug!("begin_fetch ignored in phase {:?}", self.phase);
        }
        self
    }

    /// `Loading → Ready` with the record set replaced wholesale.
    pub fn fetch_succeeded(mut self, records: Vec<Record>) -> Self {
        if self.phase != Phase::Loading {
            log::debug!("Discarding fetch result in phase {:?}", self.phase);
            return self;
        }
        self.records = records;
        self.phase = Phase::Ready;
        self.error_message = None;
        self
    }

    /// `Loading → Error`. Records stay empty and there is no retry.
    pub fn fetch_failed(mut self) -> Self {
        if self.phase != Phase::Loading {
            log::debug!("Discarding fetch failure in phase {:?}", self.phase);
            return self;
        }
        self.records.clear();
        self.phase = Phase::Error;
        self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
        self
    }

    // ── User edits ──────────────────────────────────────────────────────

    /// Replace the query verbatim. The current page is deliberately kept,
    /// even when it is now past the last page.
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.query = text.into();
        self
    }

    /// Whether `n` is one of the page buttons currently on screen.
    pub fn is_selectable_page(&self, n: usize) -> bool {
        let count = filter_records(&self.records, &self.query).len();
        (1..=total_pages(count, self.page_size)).contains(&n)
    }

    /// Select page `n` if it is a rendered page button; otherwise unchanged.
    pub fn with_page(mut self, n: usize) -> Self {
        if self.is_selectable_page(n) {
            self.page = n;
        }
        self
    }
}
