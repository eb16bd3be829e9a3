// common/mod.rs - Shared test utilities for the events API
//
// This module provides an in-process stand-in for the remote events
// service so the client and server functions can be tested without the
// network:
// 1. Answers GET /events/{id} and GET /events/{id}/attendees from the fixture
// 2. Returns 404 for any other event id
// 3. Serves malformed JSON under /broken/{id}

use actix_web::{web, App, HttpResponse, HttpServer};
use attendee_admin::fixtures::attendees::{UniteSummit, FIXTURE_EVENT_ID};
use attendee_admin::fixtures::EventFixture;
use attendee_admin::web_app::api::{EventsClient, EventsConfig};
use attendee_admin::web_app::model::AttendeeQuery;
use serde::Deserialize;
use serde_json::json;
use url::Url;
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttendeesParams {
    page_index: Option<u32>,
    query: Option<String>,
}

async fn event(path: web::Path<String>) -> HttpResponse {
    if path.as_str() != FIXTURE_EVENT_ID {
        return HttpResponse::NotFound().json(json!({ "message": "Event not found." }));
    }
    HttpResponse::Ok().json(UniteSummit::event_body())
}

async fn attendees(path: web::Path<String>, params: web::Query<AttendeesParams>) -> HttpResponse {
    if path.as_str() != FIXTURE_EVENT_ID {
        return HttpResponse::NotFound().json(json!({ "message": "Event not found." }));
    }

    let params = params.into_inner();
    let query = AttendeeQuery {
        page_index: params.page_index.unwrap_or(0),
        query: params.query,
    };
    HttpResponse::Ok().json(UniteSummit::attendees_page(&query))
}

async fn broken() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("{\"event\": ")
}

/// Start the stub server and return its events base URL
///
/// Must be called from within an actix runtime (`#[actix_web::test]`).
pub async fn spawn_stub_api() -> anyhow::Result<Url> {
    let server = HttpServer::new(|| {
        App::new()
            .route("/events/{id}", web::get().to(event))
            .route("/events/{id}/attendees", web::get().to(attendees))
            .route("/broken/{id}", web::get().to(broken))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("stub server did not bind"))?;

    actix_web::rt::spawn(server.run());

    Ok(Url::parse(&format!("http://{}/events", addr))?)
}

/// Client for `event_id` on the given base URL
pub fn client_for(base: Url, event_id: &str) -> anyhow::Result<EventsClient> {
    let config = EventsConfig::for_base(base, Uuid::parse_str(event_id)?);
    Ok(EventsClient::new(&config)?)
}
