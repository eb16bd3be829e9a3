// web_app/model/listing.rs - What the attendee list currently shows
//
// Loaded results are folded into an `AttendeeListing`. A page is applied
// only when it answers the request that is current, and a failed load keeps
// the rows already on screen. Summary and list failures are tracked apart so
// a successful page load never hides a failed summary load.

use std::fmt::Display;

use super::{Attendee, AttendeePage, AttendeeQuery, EventSummary};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendeeListing {
    rows: Vec<Attendee>,
    shown: Option<AttendeeQuery>,
    list_error: Option<String>,
    summary_error: Option<String>,
}

impl AttendeeListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Attendee] {
        &self.rows
    }

    /// Request whose rows are on screen, if any page has loaded yet
    pub fn shown(&self) -> Option<&AttendeeQuery> {
        self.shown.as_ref()
    }

    /// Apply the outcome of the request for `answered`.
    ///
    /// Returns false when `answered` is no longer the `current` request; the
    /// outcome is dropped in that case.
    pub fn apply_page<E: Display>(
        &mut self,
        current: &AttendeeQuery,
        answered: AttendeeQuery,
        result: Result<AttendeePage, E>,
    ) -> bool {
        if &answered != current {
            tracing::debug!("Discarding superseded attendee response for {:?}", answered);
            return false;
        }

        match result {
            Ok(page) => {
                self.rows = page.attendees;
                self.shown = Some(answered);
                self.list_error = None;
            }
            Err(e) => {
                let message = e.to_string();
                if self.list_error.as_ref() != Some(&message) {
                    tracing::warn!("Attendee request failed: {}", message);
                }
                self.list_error = Some(message);
            }
        }
        true
    }

    /// Record the outcome of the event summary request
    pub fn record_summary<E: Display>(&mut self, result: &Result<EventSummary, E>) {
        match result {
            Ok(_) => self.summary_error = None,
            Err(e) => {
                let message = e.to_string();
                if self.summary_error.as_ref() != Some(&message) {
                    tracing::warn!("Event summary request failed: {}", message);
                }
                self.summary_error = Some(message);
            }
        }
    }

    /// Messages for the error banner, summary failure first
    pub fn errors(&self) -> Vec<String> {
        self.summary_error
            .iter()
            .chain(self.list_error.iter())
            .cloned()
            .collect()
    }
}
