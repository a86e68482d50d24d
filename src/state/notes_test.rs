use super::*;
use crate::net::types::Pagination;

fn note(id: &str) -> Note {
    Note {
        id: id.to_owned(),
        user_id: "u-1".to_owned(),
        content: format!("note {id}"),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

fn page(current: u32, total: u32, ids: &[&str]) -> NoteListResponse {
    NoteListResponse {
        notes: ids.iter().map(|id| note(id)).collect(),
        pagination: Pagination {
            current_page: current,
            limit: PAGE_SIZE,
            total_count: u64::from(total) * u64::from(PAGE_SIZE),
            total_pages: total,
        },
    }
}

#[test]
fn defaults_allow_a_first_fetch() {
    let mut state = NotesState::default();
    assert!(state.has_more());

    let ticket = state.begin_fetch().expect("first fetch");
    assert_eq!(ticket.page, 1);
    assert!(state.loading);
}

#[test]
fn begin_fetch_refuses_while_loading() {
    let mut state = NotesState::default();
    let _ticket = state.begin_fetch().expect("first fetch");
    assert!(state.begin_fetch().is_none());
}

#[test]
fn apply_page_merges_and_advances_cursor() {
    let mut state = NotesState::default();
    let ticket = state.begin_fetch().expect("fetch");
    state.apply_page(ticket, page(1, 3, &["a", "b"]));

    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.next_page, 2);
    assert_eq!(state.total_pages, Some(3));
    assert!(state.has_more());
}

#[test]
fn duplicate_records_across_pages_are_dropped() {
    let mut state = NotesState::default();
    let first = state.begin_fetch().expect("fetch");
    state.apply_page(first, page(1, 2, &["a", "b"]));

    // A note created between fetches shifts the window; "b" reappears.
    let second = state.begin_fetch().expect("fetch");
    state.apply_page(second, page(2, 2, &["b", "c"]));

    let ids: Vec<&str> = state.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn exhausted_history_stops_fetching() {
    let mut state = NotesState::default();
    let ticket = state.begin_fetch().expect("fetch");
    state.apply_page(ticket, page(1, 1, &["a"]));

    assert!(!state.has_more());
    assert!(state.begin_fetch().is_none());
}

#[test]
fn failed_fetch_records_error_and_allows_retry() {
    let mut state = NotesState::default();
    let ticket = state.begin_fetch().expect("fetch");
    state.fail_fetch(ticket, "boom".to_owned());

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));

    let retry = state.begin_fetch().expect("retry");
    assert_eq!(retry.page, 1);
    assert!(state.error.is_none());
}

#[test]
fn stale_resolution_after_reset_is_discarded() {
    let mut state = NotesState::default();
    let stale = state.begin_fetch().expect("fetch");

    state.reset();
    let fresh = state.begin_fetch().expect("fetch after reset");

    state.apply_page(stale, page(1, 5, &["old"]));
    assert!(state.items.is_empty());
    assert!(state.loading);

    state.apply_page(fresh, page(1, 1, &["new"]));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "new");
}

#[test]
fn stale_failure_is_discarded_too() {
    let mut state = NotesState::default();
    let stale = state.begin_fetch().expect("fetch");
    state.reset();
    let _fresh = state.begin_fetch().expect("fetch after reset");

    state.fail_fetch(stale, "late failure".to_owned());
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn near_bottom_triggers_within_threshold() {
    // 1000px of content, 400px viewport: bottom is at scroll_top 600.
    assert!(scrolled_near_bottom(500, 400, 1000));
    assert!(scrolled_near_bottom(600, 400, 1000));
    assert!(!scrolled_near_bottom(300, 400, 1000));
}
