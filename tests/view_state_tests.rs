// tests/view_state_tests.rs
// Pagination, search and URL behaviour of the attendee list view state

use std::cell::RefCell;

use attendee_admin::fixtures::attendees::{UniteSummit, ATTENDEE_COUNT};
use attendee_admin::fixtures::EventFixture;
use attendee_admin::web_app::model::*;

/// Persister that remembers every query it was asked to write
#[derive(Default)]
struct RecordingLocation {
    writes: RefCell<Vec<String>>,
}

impl LocationPersister for RecordingLocation {
    fn persist(&self, query: &str) {
        self.writes.borrow_mut().push(query.to_string());
    }
}

impl RecordingLocation {
    fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

fn loaded(query: &str) -> ViewState {
    let mut state = ViewState::from_query(query);
    state.set_total(ATTENDEE_COUNT);
    state
}

#[test]
fn test_total_pages_and_boundaries_for_every_page() {
    let total_pages = loaded("").total_pages();
    assert_eq!(total_pages, 23);

    for page in 1..=total_pages {
        let state = loaded(&format!("page={}", page));
        assert_eq!(state.can(PageAction::First), page != 1, "first on page {}", page);
        assert_eq!(state.can(PageAction::Previous), page != 1, "previous on page {}", page);
        assert_eq!(state.can(PageAction::Next), page != total_pages, "next on page {}", page);
        assert_eq!(state.can(PageAction::Last), page != total_pages, "last on page {}", page);
    }
}

#[test]
fn test_search_edit_always_resets_page() {
    for page in [1, 2, 12, 23] {
        let mut state = loaded(&format!("search=ana&page={}", page));
        state.set_search("ana s");
        assert_eq!(state.page(), 1, "from page {}", page);
    }
}

#[test]
fn test_request_for_shared_url() {
    let state = ViewState::from_query("?search=maria&page=2");
    let query = state.attendee_query();

    assert_eq!(query.page_index, 1);
    assert_eq!(query.query.as_deref(), Some("maria"));
    assert_eq!(
        query.query_pairs(),
        vec![("pageIndex", "1".to_string()), ("query", "maria".to_string())]
    );
}

#[test]
fn test_navigating_to_page_three_updates_location() {
    let location = RecordingLocation::default();
    let mut state = loaded("");

    for _ in 0..2 {
        if state.apply(PageAction::Next) {
            state.persist_to(&location);
        }
    }

    assert_eq!(state.page(), 3);
    assert_eq!(location.last().as_deref(), Some("page=3"));
    assert_eq!(ViewState::from_query(&location.last().unwrap_or_default()).page(), 3);
}

#[test]
fn test_last_page_click() {
    let location = RecordingLocation::default();
    let mut state = loaded("");

    assert!(state.apply(PageAction::Last));
    state.persist_to(&location);

    assert_eq!(state.page(), 23);
    assert_eq!(location.last().as_deref(), Some("page=23"));
}

#[test]
fn test_search_edit_is_written_to_location() {
    let location = RecordingLocation::default();
    let mut state = loaded("page=5");

    if state.set_search("joão") {
        state.persist_to(&location);
    }

    assert_eq!(location.last().as_deref(), Some("search=jo%C3%A3o&page=1"));
}

#[test]
fn test_empty_response_footer() {
    let state = loaded("search=zzz");
    let page = UniteSummit::attendees_page(&state.attendee_query());

    assert!(page.attendees.is_empty());
    assert_eq!(state.showing_label(page.attendees.len()), "Showing 0 of 228 items");
}

#[test]
fn test_full_page_footer() {
    let state = loaded("page=4");
    let page = UniteSummit::attendees_page(&state.attendee_query());

    assert_eq!(page.attendees.len(), PAGE_SIZE as usize);
    assert_eq!(state.showing_label(page.attendees.len()), "Showing 10 of 228 items");
    assert_eq!(state.page_label(), "Page 4 of 23");
}

#[test]
fn test_page_out_of_range_in_url_is_clamped_once_total_known() {
    let mut state = ViewState::from_query("page=99");
    assert_eq!(state.page(), 99);

    assert!(state.set_total(ATTENDEE_COUNT));
    assert_eq!(state.page(), 23);
}

#[test]
fn test_stale_response_discarded() {
    let mut listing = AttendeeListing::new();
    let mut state = loaded("");

    // Typing "m" then "ma" issues two requests
    state.set_search("m");
    let first = state.attendee_query();
    state.set_search("ma");
    let second = state.attendee_query();
    let current = state.attendee_query();

    // The second answers first, then the slow first response arrives
    assert!(listing.apply_page(&current, second.clone(), Ok::<_, String>(UniteSummit::attendees_page(&second))));
    assert!(!listing.apply_page(&current, first.clone(), Ok::<_, String>(UniteSummit::attendees_page(&first))));

    assert!(!listing.rows().is_empty());
    assert!(listing.rows().iter().all(|a| a.name.to_lowercase().contains("ma")));
    assert_eq!(listing.rows(), UniteSummit::attendees_page(&second).attendees.as_slice());
}

#[test]
fn test_failed_page_keeps_previous_rows_and_footer() {
    let mut listing = AttendeeListing::new();
    let mut state = loaded("page=3");

    let third = state.attendee_query();
    listing.apply_page(&third, third.clone(), Ok::<_, String>(UniteSummit::attendees_page(&third)));
    let shown: Vec<i64> = listing.rows().iter().map(|a| a.id).collect();

    assert!(state.apply(PageAction::Next));
    let fourth = state.attendee_query();
    listing.apply_page(&fourth, fourth.clone(), Err::<AttendeePage, _>("Could not load attendees: timed out"));

    let kept: Vec<i64> = listing.rows().iter().map(|a| a.id).collect();
    assert_eq!(kept, shown);
    assert_eq!(listing.errors(), vec!["Could not load attendees: timed out".to_string()]);
    assert_eq!(state.showing_label(listing.rows().len()), "Showing 10 of 228 items");
}

#[test]
fn test_failed_summary_stays_visible_after_rows_load() {
    let mut listing = AttendeeListing::new();
    let state = ViewState::from_query("");

    listing.record_summary(&Err::<EventSummary, _>("Could not load event: 404"));
    let query = state.attendee_query();
    listing.apply_page(&query, query.clone(), Ok::<_, String>(UniteSummit::attendees_page(&query)));

    assert_eq!(listing.rows().len(), PAGE_SIZE as usize);
    assert_eq!(listing.errors(), vec!["Could not load event: 404".to_string()]);
    // Without a total there is nowhere to page to
    assert!(!state.can(PageAction::Next));
}
