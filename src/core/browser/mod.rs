//! List browser: fetched records, a search query and a page number, plus the
//! pure derivation of the visible page from them.

pub mod state;
pub mod view;

pub use state::{BrowserState, Phase, PAGE_SIZE};
pub use view::{derive, filter_records, page_slice, total_pages, ListView, PageButton};
