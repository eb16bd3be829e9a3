// web_app/api/registry.rs - Process-wide events client
//
// The server binary registers one client at startup. Server functions
// pick it up from here when it is not provided through Leptos context.

use std::sync::Mutex;
use std::sync::OnceLock;

use crate::web_app::api::events::EventsClient;

static CLIENT: OnceLock<EventsClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<EventsClient>> = Mutex::new(None);

/// Initialize the global events client
pub fn init_client(client: EventsClient) {
    tracing::info!("Initializing global events client for {}", client.event_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Events client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: EventsClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the global events client
pub fn get_client() -> Option<EventsClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global events client is empty!");
    }
    client
}
