// fixtures/attendees.rs
//
// A deterministic roster of 228 attendees for one event. Every fifth
// attendee never checked in. The attendee endpoint filters by name and
// pages by `pageIndex` the same way the remote service does.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

use crate::fixtures::EventFixture;
use crate::web_app::model::{Attendee, AttendeePage, AttendeeQuery, PAGE_SIZE};

/// Event identifier the fixture answers for
pub const FIXTURE_EVENT_ID: &str = "9a391a85-eea9-4c72-bf91-c9f8682f5fe0";

/// Number of attendees in the roster
pub const ATTENDEE_COUNT: u64 = 228;

const FIRST_NAMES: [&str; 12] = [
    "Maria", "Joao", "Ana", "Pedro", "Juliana", "Lucas", "Fernanda", "Rafael", "Camila",
    "Bruno", "Larissa", "Diego",
];

const LAST_NAMES: [&str; 6] = ["Silva", "Souza", "Oliveira", "Santos", "Costa", "Pereira"];

pub struct UniteSummit;

impl UniteSummit {
    /// Registration time of the first attendee
    pub fn opened_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .unwrap_or_default()
    }

    /// The whole roster, ordered by id
    pub fn roster() -> Vec<Attendee> {
        (0..ATTENDEE_COUNT as i64)
            .map(|n| {
                let first = FIRST_NAMES[(n as usize) % FIRST_NAMES.len()];
                let last = LAST_NAMES[(n as usize / FIRST_NAMES.len()) % LAST_NAMES.len()];
                let created_at = Self::opened_at() + Duration::hours(n * 3);

                Attendee {
                    id: 10_000 + n,
                    name: format!("{} {}", first, last),
                    email: format!("{}.{}{}@example.com", first, last, n).to_lowercase(),
                    created_at,
                    checked_in_at: (n % 5 != 0).then(|| created_at + Duration::days(30)),
                }
            })
            .collect()
    }

    /// Attendees whose name contains `search`, ignoring case
    pub fn matching(search: Option<&str>) -> Vec<Attendee> {
        let needle = search.map(str::to_lowercase).unwrap_or_default();
        Self::roster()
            .into_iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl EventFixture for UniteSummit {
    fn event_body() -> serde_json::Value {
        json!({
            "event": {
                "id": FIXTURE_EVENT_ID,
                "title": "Unite Summit",
                "slug": "unite-summit",
                "details": null,
                "maximumAttendees": 300,
                "attendeesAmount": ATTENDEE_COUNT,
            }
        })
    }

    fn attendees_page(query: &AttendeeQuery) -> AttendeePage {
        let start = query.page_index as usize * PAGE_SIZE as usize;
        let attendees = Self::matching(query.query.as_deref())
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE as usize)
            .collect();

        AttendeePage { attendees }
    }
}
