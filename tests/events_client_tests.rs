// tests/events_client_tests.rs
// Test suite for the events API client against the in-process stub

mod common;

use attendee_admin::fixtures::attendees::{ATTENDEE_COUNT, FIXTURE_EVENT_ID};
use attendee_admin::web_app::api::EventsApiError;
use attendee_admin::web_app::model::AttendeeQuery;
use common::{client_for, spawn_stub_api};

#[actix_web::test]
async fn test_event_summary_total() -> anyhow::Result<()> {
    let base = spawn_stub_api().await?;
    let client = client_for(base, FIXTURE_EVENT_ID)?;

    let summary = client.event_summary().await?;
    assert_eq!(summary.attendees_amount, ATTENDEE_COUNT);
    assert_eq!(summary.title.as_deref(), Some("Unite Summit"));

    Ok(())
}

#[actix_web::test]
async fn test_search_second_page() -> anyhow::Result<()> {
    let base = spawn_stub_api().await?;
    let client = client_for(base, FIXTURE_EVENT_ID)?;

    // 19 attendees are named Maria; the second page holds the last 9
    let page = client
        .attendees(&AttendeeQuery { page_index: 1, query: Some("maria".to_string()) })
        .await?;

    assert_eq!(page.attendees.len(), 9);
    assert!(page.attendees.iter().all(|a| a.name.starts_with("Maria")));

    Ok(())
}

#[actix_web::test]
async fn test_last_and_past_last_page() -> anyhow::Result<()> {
    let base = spawn_stub_api().await?;
    let client = client_for(base, FIXTURE_EVENT_ID)?;

    let last = client.attendees(&AttendeeQuery { page_index: 22, query: None }).await?;
    assert_eq!(last.attendees.len(), 8);

    let beyond = client.attendees(&AttendeeQuery { page_index: 23, query: None }).await?;
    assert!(beyond.attendees.is_empty());

    Ok(())
}

#[actix_web::test]
async fn test_unknown_event_is_status_error() -> anyhow::Result<()> {
    let base = spawn_stub_api().await?;
    let client = client_for(base, "00000000-0000-0000-0000-000000000000")?;

    let err = client.event_summary().await.unwrap_err();
    match err {
        EventsApiError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {:?}", other),
    }

    Ok(())
}

#[actix_web::test]
async fn test_malformed_body_is_decode_error() -> anyhow::Result<()> {
    let base = spawn_stub_api().await?;
    let broken_base = base.join("/broken")?;
    let client = client_for(broken_base, FIXTURE_EVENT_ID)?;

    let err = client.event_summary().await.unwrap_err();
    assert!(matches!(err, EventsApiError::Decode { .. }), "got {:?}", err);

    Ok(())
}

#[actix_web::test]
async fn test_unreachable_service_is_http_error() -> anyhow::Result<()> {
    let client = client_for(url::Url::parse("http://127.0.0.1:9/events")?, FIXTURE_EVENT_ID)?;

    let err = client.attendees(&AttendeeQuery::default()).await.unwrap_err();
    assert!(matches!(err, EventsApiError::Http { .. }), "got {:?}", err);
    assert!(err.to_string().contains("127.0.0.1:9"));

    Ok(())
}
