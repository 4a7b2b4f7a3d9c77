//! Property-based tests for the List Browser
//!
//! Tests invariants:
//! - Filter keeps exactly the matching records, in source order
//! - Empty query keeps everything
//! - Page slices concatenate back to the filtered list
//! - `total_pages` matches the ceiling division
//! - `with_query` leaves the page untouched

use proptest::prelude::*;

use crate::core::browser::{derive, filter_records, page_slice, total_pages, BrowserState};
use crate::core::records::Record;

// ============================================================================
// Strategies
// ============================================================================

fn arb_record() -> impl Strategy<Value = Record> {
    (1u64..500, "[a-zA-Z0-9 ]{0,24}", "[a-z \n]{0,40}")
        .prop_map(|(id, title, body)| Record::new(id, title, body))
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..40)
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[0-9]{1,2}",
        "[a-zA-Z]{1,3}",
        "[a-zA-Z0-9 ]{1,5}",
    ]
}

fn matches(record: &Record, query: &str) -> bool {
    record.title.to_lowercase().contains(&query.to_lowercase())
        || record.id.to_string().contains(query)
}

fn ready_state(records: Vec<Record>) -> BrowserState {
    BrowserState::new().begin_fetch().fetch_succeeded(records)
}

// ============================================================================
// Filter
// ============================================================================

proptest! {
    #[test]
    fn filter_is_exact(records in arb_records(), query in arb_query()) {
        let filtered = filter_records(&records, &query);

        for record in &filtered {
            prop_assert!(matches(record, &query));
        }
        let expected = records.iter().filter(|r| matches(r, &query)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn filter_preserves_source_order(records in arb_records(), query in arb_query()) {
        let filtered = filter_records(&records, &query);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|r| records.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_query_is_identity(records in arb_records()) {
        let filtered = filter_records(&records, "");
        prop_assert_eq!(filtered.len(), records.len());
    }
}

// ============================================================================
// Pagination
// ============================================================================

proptest! {
    #[test]
    fn total_pages_is_ceiling(count in 0usize..1000, page_size in 1usize..20) {
        let pages = total_pages(count, page_size);
        prop_assert!(pages * page_size >= count);
        if count > 0 {
            prop_assert!((pages - 1) * page_size < count);
        } else {
            prop_assert_eq!(pages, 0);
        }
    }

    #[test]
    fn pages_partition_filtered_list(items in prop::collection::vec(any::<u16>(), 0..60), page_size in 1usize..8) {
        let pages = total_pages(items.len(), page_size);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = page_slice(&items, page, page_size);
            prop_assert!(!slice.is_empty());
            prop_assert!(slice.len() <= page_size);
            rebuilt.extend_from_slice(slice);
        }
        prop_assert_eq!(rebuilt, items.clone());
        prop_assert!(page_slice(&items, pages + 1, page_size).is_empty());
    }

    #[test]
    fn page_buttons_cover_every_page(records in arb_records(), query in arb_query()) {
        let state = ready_state(records).with_query(query);
        let view = derive(&state);

        prop_assert_eq!(view.page_buttons.len(), view.total_pages);
        for (i, button) in view.page_buttons.iter().enumerate() {
            prop_assert_eq!(button.number, i + 1);
            prop_assert_eq!(button.active, button.number == view.current_page);
        }
    }

    #[test]
    fn query_edit_keeps_page(records in arb_records(), page in 1usize..5, query in arb_query()) {
        let state = ready_state(records).with_page(page);
        let before = state.page();
        let after = state.with_query(query);
        prop_assert_eq!(after.page(), before);
    }

    #[test]
    fn derive_is_repeatable(records in arb_records(), query in arb_query()) {
        let state = ready_state(records).with_query(query);
        prop_assert_eq!(derive(&state), derive(&state));
    }
}
