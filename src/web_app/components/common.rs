// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-8 w-8 border-4 border-white/10 border-t-orange-400"></div>
            <span class="mt-4 text-zinc-400 text-sm animate-pulse">{message}</span>
        </div>
    }
}

/// Error banner component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div role="alert" class="border border-red-400/30 bg-red-500/10 rounded-lg px-4 py-3 flex items-start gap-3">
            <span class="text-red-300 font-bold">"⚠"</span>
            <div>
                <h3 class="text-red-200 text-sm font-semibold">"Could not load event data"</h3>
                <p class="text-red-300/80 text-sm">{error}</p>
            </div>
        </div>
    }
}

pub(crate) fn icon_button_class(transparent: bool) -> &'static str {
    if transparent {
        "bg-black/20 border border-white/10 rounded-md p-1.5 \
         disabled:opacity-50 disabled:cursor-not-allowed"
    } else {
        "bg-white/10 border border-white/10 rounded-md p-1.5 \
         disabled:opacity-50 disabled:cursor-not-allowed"
    }
}

/// Square icon button used by the table controls
#[component]
pub fn IconButton(
    /// Icon glyph
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Lighter background for in-row actions
    #[prop(default = false)]
    transparent: bool,
    /// Accessible label
    #[prop(default = "")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=icon_button_class(transparent)
            title=label
            aria-label=label
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

pub(crate) fn nav_link_class(active: bool) -> &'static str {
    if active {
        "font-medium text-sm opacity-80"
    } else {
        "font-medium text-sm"
    }
}

/// Navigation anchor with an "active" style for the current section
#[component]
pub fn NavLink(
    /// Link target
    #[prop(into)]
    href: String,
    /// Whether this link points at the current page
    #[prop(default = false)]
    active: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=nav_link_class(active)>
            {children()}
        </a>
    }
}
