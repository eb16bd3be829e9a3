// web_app/pages/event.rs - Event overview page

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::{EventSummary, PAGE_SIZE};
use crate::web_app::server_fns::get_event_summary;

/// "228 attendees on 23 pages"
pub fn attendance_line(summary: &EventSummary) -> String {
    let pages = summary.attendees_amount.div_ceil(u64::from(PAGE_SIZE));
    let attendees = if summary.attendees_amount == 1 { "attendee" } else { "attendees" };
    let page_word = if pages == 1 { "page" } else { "pages" };
    format!("{} {} on {} {}", summary.attendees_amount, attendees, pages, page_word)
}

/// Title and attendance of the configured event
#[component]
pub fn EventOverviewPage() -> impl IntoView {
    let summary = Resource::new(|| (), |_| get_event_summary());

    view! {
        <Suspense fallback=|| view! { <Loading message="Loading event..." /> }>
            {move || summary.get().map(|result| match result {
                Ok(summary) => view! {
                    <div class="flex flex-col gap-3">
                        <h1 class="text-2xl font-bold">
                            {summary.title.clone().unwrap_or_else(|| "Untitled event".to_string())}
                        </h1>
                        <p class="text-sm text-zinc-400">{attendance_line(&summary)}</p>
                        <NavLink href="/attendees">"Browse attendees"</NavLink>
                    </div>
                }.into_any(),
                Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
            })}
        </Suspense>
    }
}
