// Call log state - cursor-paginated, newest first
//
// Pages are requested ten at a time. A short page means the end has been
// reached. The cursor is the `call_id` of the last call shown; an empty page
// leaves it where it was. Any failure replaces the whole list with an error.

use super::{Generation, Tab};
use crate::api::{ApiError, ApiRequest, Call, CallsQuery, Ticket};

/// Calls requested per page
pub const PAGE_SIZE: usize = 10;

const FETCH_FAILED: &str = "Failed to fetch calls";

#[derive(Debug)]
pub struct CallLog {
    generation: Generation,
    calls: Vec<Call>,
    loading: bool,
    has_more: bool,
    cursor: Option<String>,
    /// The page in flight continues the list rather than starting it over
    append: bool,
    /// Set when a page failed; the list is not shown alongside it
    pub error: Option<String>,
    /// Highlighted row; `calls.len()` is the "Load more" row
    pub selected: usize,
    /// Index of the call open in the detail modal
    detail: Option<usize>,
}

impl Default for CallLog {
    fn default() -> Self {
        Self {
            generation: Generation::default(),
            calls: Vec::new(),
            loading: false,
            has_more: true,
            cursor: None,
            append: false,
            error: None,
            selected: 0,
            detail: None,
        }
    }
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset and request the first page
    pub fn mount(&mut self) -> ApiRequest {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
        self.load_page(None)
    }

    pub fn unmount(&mut self) {
        self.generation.bump();
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }

    /// Request one page. `None` starts over; `Some(id)` continues after `id`.
    pub fn load_page(&mut self, cursor: Option<String>) -> ApiRequest {
        self.loading = true;
        self.append = cursor.is_some();
        if !self.append {
            self.error = None;
        }
        let ticket = Ticket::new(Tab::Calls, self.generation.bump());
        ApiRequest::ListCalls(ticket, CallsQuery::newest_first(PAGE_SIZE, cursor))
    }

    /// Next page, unless at the end, already loading, or failed
    pub fn load_more(&mut self) -> Option<ApiRequest> {
        if !self.has_more || self.loading || self.error.is_some() {
            return None;
        }
        let cursor = self.cursor.clone();
        Some(self.load_page(cursor))
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The Load more row exists and is highlighted
    pub fn on_load_more_row(&self) -> bool {
        self.has_more && self.selected >= self.calls.len()
    }

    fn last_row(&self) -> usize {
        if self.has_more {
            self.calls.len()
        } else {
            self.calls.len().saturating_sub(1)
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.last_row());
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Enter on the highlighted row: open its detail, or load more
    pub fn activate(&mut self) -> Option<ApiRequest> {
        if self.on_load_more_row() {
            return self.load_more();
        }
        self.select_call(self.selected);
        None
    }

    pub fn select_call(&mut self, index: usize) {
        if index < self.calls.len() {
            self.detail = Some(index);
        }
    }

    pub fn dismiss(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&Call> {
        self.detail.and_then(|i| self.calls.get(i))
    }

    /// Apply a `/calls` response. Returns false if it was stale.
    pub fn apply(&mut self, generation: Generation, result: Result<Vec<Call>, ApiError>) -> bool {
        if generation != self.generation {
            tracing::debug!("Dropping stale call page");
            return false;
        }
        if !self.loading {
            return false;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                let replace = !self.append;
                self.has_more = page.len() == PAGE_SIZE;
                if let Some(last) = page.last() {
                    self.cursor = Some(last.call_id.clone());
                }
                tracing::debug!(
                    "Loaded {} calls (more: {})",
                    page.len(),
                    self.has_more
                );
                if replace {
                    self.calls = page;
                    self.detail = None;
                } else {
                    self.calls.extend(page);
                }
                self.selected = self.selected.min(self.last_row());
            }
            Err(e) => {
                tracing::warn!("Call page failed: {}", e);
                self.error = Some(e.user_message(FETCH_FAILED));
                self.calls.clear();
                self.detail = None;
                self.has_more = false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{CallAnalysis, CallCost};
    use reqwest::StatusCode;

    fn call(id: usize) -> Call {
        Call {
            call_id: format!("call_{id}"),
            start_timestamp: 1_700_000_000_000 - id as i64 * 60_000,
            from_number: "+15550001234".into(),
            duration_ms: 30_000,
            call_cost: CallCost { combined_cost: 4.2 },
            call_analysis: CallAnalysis::default(),
            recording_url: String::new(),
            transcript_object: vec![],
        }
    }

    fn page(range: std::ops::Range<usize>) -> Vec<Call> {
        range.map(call).collect()
    }

    fn query(request: &ApiRequest) -> (Generation, CallsQuery) {
        match request {
            ApiRequest::ListCalls(t, q) => (t.generation, q.clone()),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn paginates_until_a_short_page() {
        let mut log = CallLog::new();

        let (g, q) = query(&log.mount());
        assert_eq!(q.pagination_key, None);
        assert_eq!(q.limit, PAGE_SIZE);
        log.apply(g, Ok(page(0..10)));
        assert!(log.has_more());

        let (g, q) = query(&log.load_more().unwrap());
        assert_eq!(q.pagination_key.as_deref(), Some("call_9"));
        log.apply(g, Ok(page(10..20)));
        assert!(log.has_more());

        let (g, q) = query(&log.load_more().unwrap());
        assert_eq!(q.pagination_key.as_deref(), Some("call_19"));
        log.apply(g, Ok(page(20..24)));
        assert!(!log.has_more());

        assert_eq!(log.calls().len(), 24);
        assert!(log.load_more().is_none());
    }

    #[test]
    fn first_page_reload_replaces_instead_of_appending() {
        let mut log = CallLog::new();
        let (g, _) = query(&log.mount());
        log.apply(g, Ok(page(0..10)));
        log.select_call(2);

        let (g, q) = query(&log.load_page(None));
        assert_eq!(q.pagination_key, None);
        log.apply(g, Ok(page(0..10)));

        assert_eq!(log.calls().len(), 10);
        assert_eq!(log.calls()[0].call_id, "call_0");
        assert_eq!(log.cursor.as_deref(), Some("call_9"));
        assert!(log.detail().is_none());
    }

    #[test]
    fn load_more_is_noop_while_loading() {
        let mut log = CallLog::new();
        let _ = log.mount();
        assert!(log.is_loading());
        assert!(log.load_more().is_none());
    }

    #[test]
    fn empty_page_keeps_cursor_and_ends() {
        let mut log = CallLog::new();
        let (g, _) = query(&log.mount());
        log.apply(g, Ok(page(0..10)));
        let (g, _) = query(&log.load_more().unwrap());
        log.apply(g, Ok(vec![]));

        assert_eq!(log.cursor.as_deref(), Some("call_9"));
        assert!(!log.has_more());
        assert_eq!(log.calls().len(), 10);
    }

    #[test]
    fn failure_replaces_the_list() {
        let mut log = CallLog::new();
        let (g, _) = query(&log.mount());
        log.apply(g, Ok(page(0..10)));
        log.select_call(3);

        let (g, _) = query(&log.load_more().unwrap());
        log.apply(
            g,
            Err(ApiError::Status {
                endpoint: "/calls",
                status: StatusCode::SERVICE_UNAVAILABLE,
            }),
        );

        assert_eq!(log.error.as_deref(), Some("Failed to fetch calls"));
        assert!(log.calls().is_empty());
        assert!(log.detail().is_none());
        assert!(log.load_more().is_none());
    }

    #[test]
    fn detail_open_and_dismiss() {
        let mut log = CallLog::new();
        let (g, _) = query(&log.mount());
        log.apply(g, Ok(page(0..3)));

        log.select_next();
        assert!(log.activate().is_none());
        assert_eq!(log.detail().unwrap().call_id, "call_1");
        log.dismiss();
        assert!(log.detail().is_none());
    }

    #[test]
    fn load_more_row_only_when_more() {
        let mut log = CallLog::new();
        let (g, _) = query(&log.mount());
        log.apply(g, Ok(page(0..10)));
        for _ in 0..20 {
            log.select_next();
        }
        assert!(log.on_load_more_row());
        assert!(matches!(log.activate(), Some(ApiRequest::ListCalls(..))));

        let mut short = CallLog::new();
        let (g, _) = query(&short.mount());
        short.apply(g, Ok(page(0..2)));
        for _ in 0..5 {
            short.select_next();
        }
        assert_eq!(short.selected, 1);
        assert!(!short.on_load_more_row());
    }

    #[test]
    fn remount_drops_inflight_page() {
        let mut log = CallLog::new();
        let (old, _) = query(&log.mount());
        let (fresh, _) = query(&log.mount());
        assert!(!log.apply(old, Ok(page(0..10))));
        assert!(log.is_loading());
        assert!(log.apply(fresh, Ok(page(0..4))));
        assert_eq!(log.calls().len(), 4);
    }
}
