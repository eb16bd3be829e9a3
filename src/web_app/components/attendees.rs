// web_app/components/attendees.rs - Attendee list UI components
//
// These components render the attendee table:
// - SearchField: Search input above the table
// - AttendeeRow: One attendee with registration and check-in times
// - PaginationControls: First/previous/next/last buttons
// - AttendeeTable: Header, rows and footer with the "showing" summary

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::web_app::components::common::IconButton;
use crate::web_app::model::{relative_time, Attendee, PageAction, ViewState};

const CHECKBOX_CLASS: &str = "size-4 bg-black/20 rounded border border-white/10 \
                              focus:ring-0 focus:ring-offset-0 checked:text-orange-400";
const HEADER_CLASS: &str = "py-3 px-4 text-sm font-semibold text-left";
const CELL_CLASS: &str = "py-3 px-4 text-sm text-zinc-300";

/// Label for the check-in column
pub fn check_in_label(now: DateTime<Utc>, attendee: &Attendee) -> String {
    match attendee.checked_in_at {
        Some(at) => relative_time(now, at),
        None => "Not checked in".to_string(),
    }
}

fn action_glyph(action: PageAction) -> &'static str {
    match action {
        PageAction::First => "«",
        PageAction::Previous => "‹",
        PageAction::Next => "›",
        PageAction::Last => "»",
    }
}

/// Search input bound to the view state
#[component]
pub fn SearchField(
    /// Current search text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every edit
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="px-3 w-72 py-1.5 border border-white/10 rounded-lg flex items-center gap-3">
            <span class="text-emerald-300 text-sm">"🔍"</span>
            <input
                type="search"
                placeholder="Search attendees..."
                class="bg-transparent flex-1 outline-none border-0 p-0 text-sm focus:ring-0 focus:ring-offset-0"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// One table row
#[component]
pub fn AttendeeRow(
    attendee: Attendee,
    /// Reference instant for the relative times
    now: DateTime<Utc>,
) -> impl IntoView {
    let registered = relative_time(now, attendee.created_at);
    let check_in = check_in_label(now, &attendee);
    let check_in_class = if attendee.is_checked_in() { CELL_CLASS } else { "py-3 px-4 text-sm text-zinc-500" };

    view! {
        <tr class="border-b border-white/10 hover:bg-white/5">
            <td class=CELL_CLASS>
                <input class=CHECKBOX_CLASS type="checkbox" />
            </td>
            <td class=CELL_CLASS>{attendee.id}</td>
            <td class=CELL_CLASS>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold text-white">{attendee.name}</span>
                    <span>{attendee.email}</span>
                </div>
            </td>
            <td class=CELL_CLASS>{registered}</td>
            <td class=check_in_class>{check_in}</td>
            <td class=CELL_CLASS>
                <IconButton transparent=true label="More actions">"⋯"</IconButton>
            </td>
        </tr>
    }
}

/// First/previous/next/last buttons, disabled at the boundaries
#[component]
pub fn PaginationControls(
    #[prop(into)]
    state: Signal<ViewState>,
    on_action: Callback<PageAction>,
) -> impl IntoView {
    view! {
        <div class="flex gap-1.5">
            {PageAction::ALL.into_iter().map(move |action| {
                view! {
                    <IconButton
                        label=action.label()
                        disabled=Signal::derive(move || !state.with(|s| s.can(action)))
                        on_click=Callback::new(move |()| on_action.run(action))
                    >
                        {action_glyph(action)}
                    </IconButton>
                }
            }).collect_view()}
        </div>
    }
}

/// Attendee table with footer
#[component]
pub fn AttendeeTable(
    /// Rows of the current page
    #[prop(into)]
    attendees: Signal<Vec<Attendee>>,
    #[prop(into)]
    state: Signal<ViewState>,
    on_action: Callback<PageAction>,
) -> impl IntoView {
    view! {
        <div class="border border-white/10 rounded-lg">
            <table class="w-full">
                <thead>
                    <tr class="border-b border-white/10">
                        <th style="width: 48px" class=HEADER_CLASS>
                            <input class=CHECKBOX_CLASS type="checkbox" />
                        </th>
                        <th class=HEADER_CLASS>"Code"</th>
                        <th class=HEADER_CLASS>"Attendee"</th>
                        <th class=HEADER_CLASS>"Registered"</th>
                        <th class=HEADER_CLASS>"Checked in"</th>
                        <th style="width: 64px" class=HEADER_CLASS></th>
                    </tr>
                </thead>

                <tbody>
                    <For
                        each=move || attendees.get()
                        key=|attendee| attendee.id
                        children=move |attendee| {
                            view! { <AttendeeRow attendee=attendee now=Utc::now() /> }
                        }
                    />
                </tbody>

                <tfoot>
                    <tr>
                        <td class=CELL_CLASS colspan="3">
                            {move || state.with(|s| s.showing_label(attendees.with(Vec::len)))}
                        </td>
                        <td class=format!("{} text-right", CELL_CLASS) colspan="3">
                            <div class="inline-flex items-center gap-8">
                                <span>{move || state.with(ViewState::page_label)}</span>
                                <PaginationControls state=state on_action=on_action />
                            </div>
                        </td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
