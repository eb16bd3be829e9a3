// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the header navigation and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::web_app::components::NavLink;
use crate::web_app::pages::{AttendeeListPage, EventOverviewPage};

/// Sections shown in the header as (href, label)
pub const NAV_SECTIONS: [(&str, &str); 2] = [("/events", "Events"), ("/attendees", "Attendees")];

/// Whether the header link for `href` matches the current path
pub fn is_active_section(pathname: &str, href: &str) -> bool {
    match href {
        "/attendees" => pathname == "/" || pathname.starts_with("/attendees"),
        _ => pathname.starts_with(href),
    }
}

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Header with navigation links
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Attendee Admin" />
        <Meta name="description" content="Search and browse the attendees of an event" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/attendee_admin.css" />

        <Router>
            <div class="max-w-[1216px] mx-auto py-5 flex flex-col gap-5">
                <Header />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=AttendeeListPage />
                        <Route path=path!("/attendees") view=AttendeeListPage />
                        <Route path=path!("/events") view=EventOverviewPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Top navigation bar
#[component]
fn Header() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="flex items-center gap-5 py-2">
            <span class="text-lg font-bold text-orange-400">"pass.in"</span>
            <nav class="flex items-center gap-5">
                {NAV_SECTIONS.into_iter().map(move |(href, label)| {
                    move || {
                        let active = is_active_section(&pathname.get(), href);
                        view! { <NavLink href=href active=active>{label}</NavLink> }
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 gap-4">
            <h1 class="text-6xl font-bold text-zinc-600">"404"</h1>
            <p class="text-zinc-400">"Page not found"</p>
            <NavLink href="/attendees">"Go to attendees"</NavLink>
        </div>
    }
}
