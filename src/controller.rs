//! Directory controller: view state + reducers.
//!
//! `ViewState` is a plain value. Transitions are pure functions
//! (`on_query_changed`, `on_page_requested`) returning a new state;
//! `DirectoryController` only sequences them against a shared store and
//! keeps the filtered list that belongs to the current query.
//!
//! Инварианты:
//! - current_page ∈ [1, max(1, page_count)]
//! - смена query всегда сбрасывает current_page в 1
//! - filtered пересчитывается при каждой смене query, навигация его не трогает
//!
//! No debounce: every query change re-filters the whole store. Fine for the
//! tens of records a scheme list carries; revisit for large sources.

use log::debug;

use crate::config::{DirectoryConfig, EmptyPagePolicy};
use crate::filter::filter_indices;
use crate::metrics;
use crate::paginator::{clamp_page, page_count, window_bounds};
use crate::record::SchemeRecord;
use crate::store::RecordStore;
use crate::view::PageView;

/// Per-session view state. Owned by exactly one controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub current_page: usize,
    pub page_size: usize,
    pub empty_policy: EmptyPagePolicy,
}

impl ViewState {
    pub fn new(cfg: &DirectoryConfig) -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            page_size: cfg.page_size.max(1),
            empty_policy: cfg.empty_policy,
        }
    }

    pub fn page_count(&self, filtered_len: usize) -> usize {
        page_count(filtered_len, self.page_size, self.empty_policy)
    }
}

/// Navigation intent coming from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    First,
    Last,
    /// Explicit 1-based page number (may be stale / out of range).
    Number(i64),
}

/// Outcome of a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Raw page number the request resolved to before clamping.
    pub requested: i64,
    /// Page after clamping.
    pub target: usize,
    pub clamped: bool,
    pub changed: bool,
}

/// Query changed: replace the query and reset to page 1.
/// Re-submitting the current query leaves the state untouched.
pub fn on_query_changed(state: &ViewState, new_query: &str) -> ViewState {
    if state.query == new_query {
        return state.clone();
    }
    ViewState {
        query: new_query.to_string(),
        current_page: 1,
        ..state.clone()
    }
}

/// Page navigation: clamp into range; same page is a no-op.
pub fn on_page_requested(
    state: &ViewState,
    filtered_len: usize,
    request: PageRequest,
) -> (ViewState, Transition) {
    let pages = state.page_count(filtered_len);
    let current = state.current_page as i64;
    let requested = match request {
        PageRequest::Previous => current.saturating_sub(1),
        PageRequest::Next => current.saturating_add(1),
        PageRequest::First => 1,
        PageRequest::Last => pages as i64,
        PageRequest::Number(n) => n,
    };
    let target = clamp_page(requested, pages);
    let tr = Transition {
        requested,
        target,
        clamped: requested != target as i64,
        changed: target != state.current_page,
    };
    if !tr.changed {
        return (state.clone(), tr);
    }
    let next = ViewState {
        current_page: target,
        ..state.clone()
    };
    (next, tr)
}

/// Sequences filter + paginate against one store for one view session.
#[derive(Debug)]
pub struct DirectoryController {
    store: RecordStore,
    state: ViewState,
    // позиции в store, совпадающие с state.query
    filtered: Vec<usize>,
}

impl DirectoryController {
    pub fn new(store: RecordStore, cfg: &DirectoryConfig) -> Self {
        let state = ViewState::new(cfg);
        let filtered = filter_indices(store.records(), &state.query);
        Self {
            store,
            state,
            filtered,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count(self.filtered.len())
    }

    /// Current filtered list, in store order.
    pub fn filtered(&self) -> impl Iterator<Item = &SchemeRecord> + '_ {
        let records = self.store.records();
        self.filtered.iter().map(move |&i| &records[i])
    }

    /// Trigger: query changed. Re-filters, resets to page 1, republishes.
    pub fn set_query(&mut self, query: &str) -> PageView {
        let next = on_query_changed(&self.state, query);
        if next != self.state {
            self.filtered = filter_indices(self.store.records(), &next.query);
            self.state = next;
            metrics::record_query_change();
            debug!(
                "query='{}' -> {} matches, {} pages",
                self.state.query,
                self.filtered.len(),
                self.page_count()
            );
        }
        self.view()
    }

    /// Trigger: page navigation. Never re-filters.
    pub fn request_page(&mut self, request: PageRequest) -> PageView {
        let (next, tr) = on_page_requested(&self.state, self.filtered.len(), request);
        metrics::record_page_request(tr.clamped, !tr.changed);
        if tr.changed {
            debug!("page {} -> {} ({:?})", self.state.current_page, tr.target, request);
            self.state = next;
        } else {
            debug!("page request {:?} is a no-op at page {}", request, self.state.current_page);
        }
        self.view()
    }

    /// Publish the current window.
    pub fn view(&self) -> PageView {
        let pages = self.page_count();
        let (start, end) = window_bounds(
            self.filtered.len(),
            self.state.current_page,
            self.state.page_size,
        );
        let records = self.store.records();
        let window: Vec<SchemeRecord> = self.filtered[start..end]
            .iter()
            .map(|&i| records[i].clone())
            .collect();

        let view = PageView::new(
            self.state.query.clone(),
            window,
            self.state.current_page,
            pages,
            self.filtered.len(),
            self.state.page_size,
        );
        metrics::record_view_published(view.is_empty);
        view
    }
}
