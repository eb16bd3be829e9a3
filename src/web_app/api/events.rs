// web_app/api/events.rs - Client for the remote events service
//
// Two endpoints are used:
// - GET {base}/{event_id}                                  -> event summary
// - GET {base}/{event_id}/attendees?pageIndex=N[&query=..] -> one page of attendees

use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::web_app::api::config::EventsConfig;
use crate::web_app::model::{AttendeePage, AttendeeQuery, EventResponse, EventSummary};

#[derive(Debug, Error)]
pub enum EventsApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client bound to one event of the events service
#[derive(Clone, Debug)]
pub struct EventsClient {
    http: reqwest::Client,
    event_url: Url,
}

impl EventsClient {
    pub fn new(config: &EventsConfig) -> Result<Self, EventsApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(EventsApiError::Client)?;

        Ok(Self {
            http,
            event_url: event_url(&config.base_url, config.event_id),
        })
    }

    /// URL of the event summary
    pub fn event_url(&self) -> &Url {
        &self.event_url
    }

    /// URL of one attendee page
    pub fn attendees_url(&self, query: &AttendeeQuery) -> Url {
        let mut url = self.event_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push("attendees");
        }
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        url
    }

    /// GET /events/{id}
    pub async fn event_summary(&self) -> Result<EventSummary, EventsApiError> {
        let response: EventResponse = self.get_json(self.event_url.clone()).await?;
        Ok(response.event)
    }

    /// GET /events/{id}/attendees
    pub async fn attendees(&self, query: &AttendeeQuery) -> Result<AttendeePage, EventsApiError> {
        self.get_json(self.attendees_url(query)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, EventsApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| EventsApiError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EventsApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(|source| EventsApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// `{base}/{event_id}`, tolerating a trailing slash on the base
fn event_url(base: &Url, event_id: Uuid) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&event_id.to_string());
    }
    url
}
