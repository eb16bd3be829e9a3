// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation (calls the events API)
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn events_client() -> Result<crate::web_app::api::EventsClient, ServerFnError> {
    use crate::web_app::api::{registry, EventsClient};

    // Context first (tests or a manually provided client)
    if let Some(client) = use_context::<EventsClient>() {
        return Ok(client);
    }

    if let Some(client) = registry::get_client() {
        return Ok(client);
    }

    tracing::error!("No events client registered");
    Err(ServerFnError::new("Events API client not available"))
}

/// Summary of the configured event (used for the total attendee count)
#[server(GetEventSummary, "/api")]
pub async fn get_event_summary() -> Result<EventSummary, ServerFnError> {
    let client = events_client()?;

    match client.event_summary().await {
        Ok(summary) => {
            tracing::info!("Event summary loaded: {} attendees", summary.attendees_amount);
            Ok(summary)
        }
        Err(e) => {
            tracing::error!("Event summary failed: {}", e);
            Err(ServerFnError::new(format!("Could not load event: {}", e)))
        }
    }
}

/// One page of attendees, optionally filtered by name
#[server(ListAttendees, "/api")]
pub async fn list_attendees(query: AttendeeQuery) -> Result<AttendeePage, ServerFnError> {
    tracing::info!("Attendee request: {:?}", query);

    let client = events_client()?;

    match client.attendees(&query).await {
        Ok(page) => {
            tracing::info!("Attendee request successful: {} rows", page.attendees.len());
            Ok(page)
        }
        Err(e) => {
            tracing::error!("Attendee request failed: {}", e);
            Err(ServerFnError::new(format!("Could not load attendees: {}", e)))
        }
    }
}
