//! Lightweight global metrics for the scheme directory.
//!
//! Потокобезопасные атомарные счётчики для подсистем:
//! - Record store (loads, degraded loads)
//! - Directory controller (query changes, page requests, clamps, no-ops)
//! - Published views

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Record store -----
static STORE_LOADS_OK: AtomicU64 = AtomicU64::new(0);
static STORE_LOADS_FAILED: AtomicU64 = AtomicU64::new(0);
static STORE_RECORDS_LOADED: AtomicU64 = AtomicU64::new(0);

// ----- Controller -----
static QUERY_CHANGES: AtomicU64 = AtomicU64::new(0);
static PAGE_REQUESTS: AtomicU64 = AtomicU64::new(0);
static PAGE_REQUESTS_CLAMPED: AtomicU64 = AtomicU64::new(0);
static PAGE_REQUESTS_NOOP: AtomicU64 = AtomicU64::new(0);

// ----- Views -----
static VIEWS_PUBLISHED: AtomicU64 = AtomicU64::new(0);
static VIEWS_EMPTY: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    // Record store
    pub store_loads_ok: u64,
    pub store_loads_failed: u64,
    pub store_records_loaded: u64,

    // Controller
    pub query_changes: u64,
    pub page_requests: u64,
    pub page_requests_clamped: u64,
    pub page_requests_noop: u64,

    // Views
    pub views_published: u64,
    pub views_empty: u64,
}

impl MetricsSnapshot {
    /// Доля пустых выдач (0.0..=1.0).
    pub fn empty_view_ratio(&self) -> f64 {
        if self.views_published == 0 {
            0.0
        } else {
            self.views_empty as f64 / self.views_published as f64
        }
    }
}

// ----- Recorders (Record store) -----
pub fn record_store_load_ok(records: usize) {
    STORE_LOADS_OK.fetch_add(1, Ordering::Relaxed);
    STORE_RECORDS_LOADED.fetch_add(records as u64, Ordering::Relaxed);
}

pub fn record_store_load_failed() {
    STORE_LOADS_FAILED.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Controller) -----
pub fn record_query_change() {
    QUERY_CHANGES.fetch_add(1, Ordering::Relaxed);
}

pub fn record_page_request(clamped: bool, noop: bool) {
    PAGE_REQUESTS.fetch_add(1, Ordering::Relaxed);
    if clamped {
        PAGE_REQUESTS_CLAMPED.fetch_add(1, Ordering::Relaxed);
    }
    if noop {
        PAGE_REQUESTS_NOOP.fetch_add(1, Ordering::Relaxed);
    }
}

// ----- Recorders (Views) -----
pub fn record_view_published(empty: bool) {
    VIEWS_PUBLISHED.fetch_add(1, Ordering::Relaxed);
    if empty {
        VIEWS_EMPTY.fetch_add(1, Ordering::Relaxed);
    }
}

// ----- Snapshot / Reset -----
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        store_loads_ok: STORE_LOADS_OK.load(Ordering::Relaxed),
        store_loads_failed: STORE_LOADS_FAILED.load(Ordering::Relaxed),
        store_records_loaded: STORE_RECORDS_LOADED.load(Ordering::Relaxed),

        query_changes: QUERY_CHANGES.load(Ordering::Relaxed),
        page_requests: PAGE_REQUESTS.load(Ordering::Relaxed),
        page_requests_clamped: PAGE_REQUESTS_CLAMPED.load(Ordering::Relaxed),
        page_requests_noop: PAGE_REQUESTS_NOOP.load(Ordering::Relaxed),

        views_published: VIEWS_PUBLISHED.load(Ordering::Relaxed),
        views_empty: VIEWS_EMPTY.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    STORE_LOADS_OK.store(0, Ordering::Relaxed);
    STORE_LOADS_FAILED.store(0, Ordering::Relaxed);
    STORE_RECORDS_LOADED.store(0, Ordering::Relaxed);

    QUERY_CHANGES.store(0, Ordering::Relaxed);
    PAGE_REQUESTS.store(0, Ordering::Relaxed);
    PAGE_REQUESTS_CLAMPED.store(0, Ordering::Relaxed);
    PAGE_REQUESTS_NOOP.store(0, Ordering::Relaxed);

    VIEWS_PUBLISHED.store(0, Ordering::Relaxed);
    VIEWS_EMPTY.store(0, Ordering::Relaxed);
}
