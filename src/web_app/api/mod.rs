// web_app/api/mod.rs - API module for server-side logic
//
// This module talks to the remote events service on behalf of the
// server functions. It only exists in the server build.

pub mod config;
pub mod events;
pub mod registry;

pub use config::{ConfigError, EventsConfig};
pub use events::{EventsApiError, EventsClient};
