//! Multi-step browser sessions: fetch, then a sequence of user edits, with
//! the derived view checked after each step.

use crate::core::browser::{derive, BrowserState, Phase, PAGE_SIZE};
use crate::core::records::{Record, FETCH_ERROR_MESSAGE};

fn posts(n: u64) -> Vec<Record> {
    (1..=n)
        .map(|id| Record::new(id, format!("Post number {id}"), format!("Body {id}")))
        .collect()
}

fn ids(state: &BrowserState) -> Vec<u64> {
    derive(state).rows.iter().map(|r| r.id).collect()
}

#[test]
fn test_query_past_last_page_then_recover() {
    let state = BrowserState::new()
        .begin_fetch()
        .fetch_succeeded(posts(20))
        .with_page(4);
    assert_eq!(ids(&state), vec![16, 17, 18, 19, 20]);

    // "1" keeps 1, 10..=19: 11 records, 3 pages; page 4 is past the end
    let state = state.with_query("1");
    let view = derive(&state);
    assert_eq!(view.filtered_count, 11);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.current_page, 4);
    assert!(view.rows.is_empty());
    assert!(view.page_out_of_range());
    assert!(view.page_buttons.iter().all(|b| !b.active));

    // Page 4 is no longer a button
    let state = state.with_page(4);
    assert_eq!(state.page(), 4);
    let state = state.with_page(3);
    assert_eq!(ids(&state), vec![19]);
    assert!(!derive(&state).page_out_of_range());
}

#[test]
fn test_clearing_query_restores_full_list() {
    let state = BrowserState::new()
        .begin_fetch()
        .fetch_succeeded(posts(12))
        .with_query("NUMBER 1")
        .with_query("");
    let view = derive(&state);
    assert_eq!(view.filtered_count, 12);
    assert_eq!(view.total_pages, 12usize.div_ceil(PAGE_SIZE));
}

#[test]
fn test_no_match_has_no_buttons() {
    let state = BrowserState::new()
        .begin_fetch()
        .fetch_succeeded(posts(12))
        .with_query("zzz");
    let view = derive(&state);
    assert_eq!(view.total_pages, 0);
    assert!(view.page_buttons.is_empty());
    assert!(view.rows.is_empty());
    assert!(view.show_table);
    assert_eq!(view.current_page, 1);
}

#[test]
fn test_edits_after_failure_have_no_visible_effect() {
    let state = BrowserState::new()
        .begin_fetch()
        .fetch_failed()
        .with_query("7")
        .with_page(2);

    let view = derive(&state);
    assert_eq!(view.phase, Phase::Error);
    assert_eq!(state.query(), "7");
    assert_eq!(state.page(), 1);
    assert_eq!(view.error_message, Some(FETCH_ERROR_MESSAGE));
    assert!(view.rows.is_empty());
    assert!(view.page_buttons.is_empty());
}

#[test]
fn test_failure_is_terminal_for_the_mount() {
    let state = BrowserState::new()
        .begin_fetch()
        .fetch_failed()
        .begin_fetch()
        .fetch_succeeded(posts(3));
    assert_eq!(state.phase(), Phase::Error);
    assert!(state.records().is_empty());
}

#[test]
fn test_query_is_kept_verbatim() {
    let state = BrowserState::new()
        .begin_fetch()
        .fetch_succeeded(posts(20))
        .with_query(" 7");
    assert_eq!(state.query(), " 7");
    // Leading space is part of the needle, so only titles with " 7" match
    assert_eq!(ids(&state), vec![7]);
}
