// web_app/model/view_state.rs - Attendee list view state
//
// The address bar mirrors this state: it is read once at mount and
// written back on every change. Writing goes through a LocationPersister
// so the state logic itself never touches the browser.

use url::form_urlencoded;

use super::{AttendeeQuery, PAGE_SIZE};

/// URL query parameter holding the search text
pub const SEARCH_PARAM: &str = "search";
/// URL query parameter holding the 1-based page number
pub const PAGE_PARAM: &str = "page";

/// Pagination controls of the attendee table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

impl PageAction {
    pub const ALL: [PageAction; 4] = [
        PageAction::First,
        PageAction::Previous,
        PageAction::Next,
        PageAction::Last,
    ];

    /// Accessible label for the control
    pub fn label(self) -> &'static str {
        match self {
            PageAction::First => "First page",
            PageAction::Previous => "Previous page",
            PageAction::Next => "Next page",
            PageAction::Last => "Last page",
        }
    }
}

/// Side effect that writes the serialized state into the current location
///
/// In the browser this replaces the history entry; tests record the calls.
pub trait LocationPersister {
    fn persist(&self, query: &str);
}

impl<F> LocationPersister for F
where
    F: Fn(&str),
{
    fn persist(&self, query: &str) {
        self(query)
    }
}

/// Search text, current page and (once known) the total attendee count
///
/// Invariant: once `total` is known, `page` stays within
/// `[1, max(1, total_pages)]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    search: String,
    page: u32,
    total: Option<u64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            total: None,
        }
    }
}

impl ViewState {
    pub fn new(search: impl Into<String>, page: u32) -> Self {
        Self {
            search: search.into(),
            page: page.max(1),
            total: None,
        }
    }

    /// Parse a location query string (with or without the leading `?`)
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut search = None;
        let mut page = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                SEARCH_PARAM => search = Some(value.into_owned()),
                PAGE_PARAM => page = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::from_params(search, page)
    }

    /// Build the state from already-decoded query parameters
    ///
    /// Missing search means empty; a missing, zero or non-numeric page means 1.
    pub fn from_params(search: Option<String>, page: Option<String>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        Self::new(search.unwrap_or_default(), page)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// `ceil(total / PAGE_SIZE)`, or 0 while the total is unknown
    pub fn total_pages(&self) -> u32 {
        self.total
            .map(|total| {
                let pages = total.div_ceil(u64::from(PAGE_SIZE));
                u32::try_from(pages).unwrap_or(u32::MAX)
            })
            .unwrap_or(0)
    }

    /// Record the total attendee count and clamp the page into range
    ///
    /// Returns true when the state changed.
    pub fn set_total(&mut self, total: u64) -> bool {
        let before = (self.page, self.total);
        self.total = Some(total);
        self.page = self.clamp_page(self.page);
        before != (self.page, self.total)
    }

    /// Replace the search text; the page always goes back to 1
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        let changed = self.search != search || self.page != 1;
        self.search = search;
        self.page = 1;
        changed
    }

    /// Jump to a page, clamped into the valid range
    pub fn go_to(&mut self, page: u32) -> bool {
        let page = self.clamp_page(page);
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Whether the control for `action` is enabled
    pub fn can(&self, action: PageAction) -> bool {
        match action {
            PageAction::First | PageAction::Previous => self.page > 1,
            PageAction::Next | PageAction::Last => self.page < self.total_pages(),
        }
    }

    /// Apply a pagination action; disabled actions are no-ops
    pub fn apply(&mut self, action: PageAction) -> bool {
        if !self.can(action) {
            return false;
        }

        let target = match action {
            PageAction::First => 1,
            PageAction::Previous => self.page - 1,
            PageAction::Next => self.page + 1,
            PageAction::Last => self.total_pages(),
        };
        self.go_to(target)
    }

    /// Parameters for the attendee request matching this state
    pub fn attendee_query(&self) -> AttendeeQuery {
        AttendeeQuery {
            page_index: self.page - 1,
            query: (!self.search.is_empty()).then(|| self.search.clone()),
        }
    }

    /// Serialize to a location query string (without the leading `?`)
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }
        serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        serializer.finish()
    }

    /// Write this state into the location through `persister`
    pub fn persist_to(&self, persister: &impl LocationPersister) {
        let query = self.to_query();
        tracing::debug!("Persisting view state to location: ?{}", query);
        persister.persist(&query);
    }

    /// Footer text, e.g. "Showing 10 of 228 items"
    pub fn showing_label(&self, rows: usize) -> String {
        format!("Showing {} of {} items", rows, self.total.unwrap_or(0))
    }

    /// Page indicator, e.g. "Page 3 of 23"
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }

    fn clamp_page(&self, page: u32) -> u32 {
        match self.total {
            Some(_) => page.clamp(1, self.total_pages().max(1)),
            None => page.max(1),
        }
    }
}
