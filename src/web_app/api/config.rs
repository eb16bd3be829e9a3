// web_app/api/config.rs - Events API configuration
//
// Read from the environment (and a `.env` file when present):
// - EVENTS_API_URL: base URL of the events collection
// - EVENT_ID: the event whose attendees are listed
// - EVENTS_API_TIMEOUT_SECS: per-request timeout

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;
use uuid::Uuid;

pub const DEFAULT_EVENTS_API_URL: &str = "https://pass-in-node.onrender.com/events";
pub const DEFAULT_EVENT_ID: &str = "9a391a85-eea9-4c72-bf91-c9f8682f5fe0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid EVENTS_API_URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("EVENTS_API_URL '{0}' cannot be used as a base URL")]
    NotABaseUrl(String),

    #[error("invalid EVENT_ID '{value}': {source}")]
    InvalidEventId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("invalid EVENTS_API_TIMEOUT_SECS '{0}'")]
    InvalidTimeout(String),
}

/// Where the attendee data comes from
#[derive(Clone, Debug)]
pub struct EventsConfig {
    pub base_url: Url,
    pub event_id: Uuid,
    pub timeout: Duration,
}

impl EventsConfig {
    /// Load from the process environment, falling back to the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("EVENTS_API_URL").unwrap_or_else(|| DEFAULT_EVENTS_API_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABaseUrl(raw_url));
        }

        let raw_id = lookup("EVENT_ID").unwrap_or_else(|| DEFAULT_EVENT_ID.to_string());
        let event_id = Uuid::parse_str(raw_id.trim()).map_err(|source| ConfigError::InvalidEventId {
            value: raw_id.clone(),
            source,
        })?;

        let timeout = match lookup("EVENTS_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, event_id, timeout })
    }

    /// Configuration pointing at `base_url` with the given event
    pub fn for_base(base_url: Url, event_id: Uuid) -> Self {
        Self {
            base_url,
            event_id,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
