// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (NavLink, IconButton, Loading, etc.)
// - attendees.rs: Attendee table, search field and pagination controls

pub mod attendees;
pub mod common;

// Re-export commonly used components for convenience
pub use attendees::*;
pub use common::*;
