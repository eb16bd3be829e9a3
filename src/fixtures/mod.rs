// fixtures/mod.rs - Test fixtures module
//
// Canned events API data shared by the unit tests, the integration tests
// and the in-process stub server that stands in for the remote service.

pub mod attendees;

use crate::web_app::model::{AttendeePage, AttendeeQuery};

/// A data set that can answer the two events API endpoints
pub trait EventFixture {
    /// Body of `GET /events/{id}`
    fn event_body() -> serde_json::Value;

    /// Body of `GET /events/{id}/attendees` for the given query
    fn attendees_page(query: &AttendeeQuery) -> AttendeePage;
}
