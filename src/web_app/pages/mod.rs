// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - AttendeeListPage: Searchable, paginated attendee table
// - EventOverviewPage: Title and attendance of the event

pub mod attendees;
pub mod event;

// Re-export page components
pub use attendees::AttendeeListPage;
pub use event::EventOverviewPage;
