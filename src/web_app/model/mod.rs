// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the remote events API, the server
// functions and the hydrated page, so they must compile for every target.
//
// Structure:
// - view_state.rs: Search/page/total state and URL query mapping
// - listing.rs: Rows and load errors currently on screen
// - relative_time.rs: "3 days ago" style labels for timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod listing;
pub mod relative_time;
pub mod view_state;

pub use relative_time::relative_time;
pub use listing::AttendeeListing;
pub use view_state::*;

/// Number of attendees shown per page
pub const PAGE_SIZE: u32 = 10;

/// Registrant of the event, optionally checked in
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

/// Event summary (matches the `event` object of `GET /events/{id}`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(default)]
    pub title: Option<String>,
    pub attendees_amount: u64,
}

/// Envelope returned by `GET /events/{id}`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub event: EventSummary,
}

/// One page of attendees (matches `GET /events/{id}/attendees`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeePage {
    pub attendees: Vec<Attendee>,
}

/// Parameters of one attendee list request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeQuery {
    /// 0-based page index
    pub page_index: u32,
    /// Search text, absent when the search field is empty
    pub query: Option<String>,
}

impl AttendeeQuery {
    /// Query pairs in the order the events API expects them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("pageIndex", self.page_index.to_string())];
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}
