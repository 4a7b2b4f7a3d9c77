//! Mock-driven tests
//!
//! Uses the mockall doubles generated for [`SessionStore`] and
//! [`RecordSource`] to pin down how the gate and the dashboard talk to their
//! backends, including the failure paths real backends rarely hit.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use mockall::predicate::eq;
use tokio::sync::mpsc;

use crate::core::browser::Phase;
use crate::core::records::{FetchError, MockRecordSource, Record, FETCH_ERROR_MESSAGE};
use crate::core::session::{
    GateDecision, GateError, LoginOutcome, MockSessionStore, SessionGate, SessionStoreError,
    PLACEHOLDER_TOKEN, TOKEN_KEY,
};
use crate::tui::events::AppEvent;
use crate::tui::services::Services;
use crate::tui::views::dashboard::DashboardState;

fn io_error() -> SessionStoreError {
    SessionStoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
}

// ============================================================================
// Session gate against a mock store
// ============================================================================

#[test]
fn test_check_session_reads_token_key() {
    let mut store = MockSessionStore::new();
    store
        .expect_get()
        .with(eq(TOKEN_KEY))
        .times(1)
        .returning(|_| Ok(Some("anything".to_string())));

    let gate = SessionGate::new(store);
    assert_eq!(gate.check_session(), GateDecision::Granted);
}

#[test]
fn test_unreadable_store_denies() {
    let mut store = MockSessionStore::new();
    store.expect_get().returning(|_| Err(io_error()));

    let gate = SessionGate::new(store);
    assert_eq!(gate.check_session(), GateDecision::Denied);
}

#[test]
fn test_rejected_login_never_writes() {
    let mut store = MockSessionStore::new();
    store.expect_set().times(0);

    let gate = SessionGate::new(store);
    let outcome = gate.submit_credentials("not-an-email", "123456").unwrap();
    assert!(matches!(outcome, LoginOutcome::Rejected(_)));
}

#[test]
fn test_accepted_login_writes_placeholder_token() {
    let mut store = MockSessionStore::new();
    store
        .expect_set()
        .with(eq(TOKEN_KEY), eq(PLACEHOLDER_TOKEN))
        .times(1)
        .returning(|_, _| Ok(()));

    let gate = SessionGate::new(store);
    let outcome = gate.submit_credentials("a@b.co", "123456").unwrap();
    assert_eq!(outcome, LoginOutcome::Accepted(PLACEHOLDER_TOKEN.to_string()));
}

#[test]
fn test_store_write_failure_surfaces() {
    let mut store = MockSessionStore::new();
    store.expect_set().returning(|_, _| Err(io_error()));

    let gate = SessionGate::new(store);
    let result = gate.submit_credentials("a@b.co", "123456");
    assert!(matches!(result, Err(GateError::Store(_))));
}

#[test]
fn test_logout_tolerates_store_failure() {
    let mut store = MockSessionStore::new();
    store
        .expect_delete()
        .with(eq(TOKEN_KEY))
        .times(2)
        .returning(|_| Err(io_error()));

    let gate = SessionGate::new(store);
    gate.logout();
    gate.logout();
}

// ============================================================================
// Dashboard against a mock record source
// ============================================================================

fn services(source: MockRecordSource) -> Services {
    let mut store = MockSessionStore::new();
    store.expect_get().returning(|_| Ok(None));
    Services::new(Box::new(store), Arc::new(source))
}

/// Wait for the dashboard's fetch event and apply it.
async fn settle(dashboard: &mut DashboardState, events: &mut mpsc::UnboundedReceiver<AppEvent>) {
    let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("fetch did not complete")
        .expect("sender dropped");
    let AppEvent::RecordsLoaded { mount, result } = event else {
        panic!("unexpected event: {event:?}");
    };
    assert_eq!(mount, dashboard.mount_id());
    dashboard.apply_fetch(result);
    assert_ne!(dashboard.browser().phase(), Phase::Loading);
}

#[tokio::test]
async fn test_status_error_shows_generic_message() {
    let mut source = MockRecordSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .returning(|| Err(FetchError::Status(503)));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut dashboard = DashboardState::new(1);
    dashboard.mount(&services(source), &tx);
    settle(&mut dashboard, &mut rx).await;

    let view = dashboard.view();
    assert_eq!(view.error_message, Some(FETCH_ERROR_MESSAGE));
    assert!(!view.show_table);
    assert_eq!(view.total_pages, 0);
}

#[tokio::test]
async fn test_each_mount_fetches_independently() {
    let mut source = MockRecordSource::new();
    source
        .expect_fetch_all()
        .times(2)
        .returning(|| Ok(vec![Record::new(1, "only", "post")]));
    let services = services(source);

    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut first = DashboardState::new(1);
    first.mount(&services, &tx);
    settle(&mut first, &mut rx).await;

    let mut second = DashboardState::new(2);
    second.mount(&services, &tx);
    settle(&mut second, &mut rx).await;

    assert_eq!(first.view().filtered_count, 1);
    assert_eq!(second.view().filtered_count, 1);
}
