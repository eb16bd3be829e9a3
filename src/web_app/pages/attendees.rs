// web_app/pages/attendees.rs - Attendee list page
//
// Owns the view state (search, page, total), keeps it in sync with the
// address bar and re-fetches the attendee page whenever search or page
// change. Loads go through resources so the server renders the first page.
//
// Fetch failures keep the rows that are already on screen and show an
// error banner until the next successful load. There is no retry.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::{get_event_summary, list_attendees};

/// Attendee list page component
///
/// Orchestrates:
/// - Search field (resets to page 1 on every edit)
/// - Attendee table with pagination footer
/// - URL synchronisation through history replacement
#[component]
pub fn AttendeeListPage() -> impl IntoView {
    let initial = use_query_map().with_untracked(|params| {
        ViewState::from_params(params.get(SEARCH_PARAM), params.get(PAGE_PARAM))
    });
    let state = RwSignal::new(initial);

    // Total attendee count, once per mount
    let summary = Resource::new(|| (), |_| get_event_summary());

    // Search and page as entered, with the total applied so the page stays in range
    let view_state = Memo::new(move |_| {
        let mut view = state.get();
        if let Some(Ok(summary)) = summary.get() {
            view.set_total(summary.attendees_amount);
        }
        view
    });

    // Attendee page, re-fetched whenever search or page change
    let request = Memo::new(move |_| view_state.with(ViewState::attendee_query));
    let attendee_page = Resource::new(
        move || request.get(),
        |query: AttendeeQuery| async move {
            let result = list_attendees(query.clone()).await;
            (query, result)
        },
    );

    // Rows and errors on screen; responses for older requests are ignored
    let listing = Memo::new(move |previous: Option<&AttendeeListing>| {
        let mut listing = previous.cloned().unwrap_or_default();
        if let Some(result) = summary.get() {
            listing.record_summary(&result);
        }
        if let Some((answered, result)) = attendee_page.get() {
            listing.apply_page(&request.get(), answered, result);
        }
        listing
    });

    // Mirror search and page into the address bar (skipping the mount run)
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let persister = move |query: &str| {
        let target = format!("{}?{}", pathname.get_untracked(), query);
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    };
    let location_query = Memo::new(move |_| view_state.with(ViewState::to_query));
    Effect::new(move |previous: Option<()>| {
        location_query.track();
        if previous.is_some() {
            view_state.with_untracked(|s| s.persist_to(&persister));
        }
    });

    let on_search = Callback::new(move |text: String| {
        let mut next = view_state.get_untracked();
        if next.set_search(text) {
            state.set(next);
        }
    });

    let on_action = Callback::new(move |action: PageAction| {
        let mut next = view_state.get_untracked();
        if next.apply(action) {
            state.set(next);
        }
    });

    let search_value = Signal::derive(move || state.with(|s| s.search().to_string()));
    let rows = Signal::derive(move || listing.with(|l| l.rows().to_vec()));

    view! {
        <div class="flex flex-col gap-4">
            <div class="flex gap-3 items-center">
                <h1 class="text-2xl font-bold">"Attendees"</h1>
                <SearchField value=search_value on_input=on_search />
                <Suspense fallback=|| ()>
                    {move || summary.get().and_then(Result::ok).and_then(|s| s.title).map(|title| view! {
                        <span class="text-sm text-zinc-400">{title}</span>
                    })}
                </Suspense>
            </div>

            <Transition fallback=|| view! { <Loading message="Loading attendees..." /> }>
                {move || attendee_page.get().map(|_| view! {
                    <div class="flex flex-col gap-4">
                        {move || listing
                            .with(AttendeeListing::errors)
                            .into_iter()
                            .map(|error| view! { <ErrorDisplay error=error /> })
                            .collect_view()}
                        <AttendeeTable attendees=rows state=view_state on_action=on_action />
                    </div>
                })}
            </Transition>
        </div>
    }
}
