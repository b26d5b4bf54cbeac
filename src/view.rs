//! PageView — what the controller publishes to the presentation layer,
//! plus plain-text rendering used by the CLI.

use serde::Serialize;
use std::fmt::Write as _;

use crate::consts::{EMPTY_HINT, EMPTY_TITLE};
use crate::record::SchemeRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub query: String,
    pub window: Vec<SchemeRecord>,
    pub current_page: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub page_size: usize,
    pub is_empty: bool,
    /// Previous control enabled.
    pub has_previous: bool,
    /// Next control enabled.
    pub has_next: bool,
    /// Pagination controls are rendered at all (more than one page).
    pub show_controls: bool,
}

impl PageView {
    pub fn new(
        query: String,
        window: Vec<SchemeRecord>,
        current_page: usize,
        page_count: usize,
        total_matches: usize,
        page_size: usize,
    ) -> Self {
        Self {
            query,
            is_empty: total_matches == 0,
            has_previous: current_page > 1,
            has_next: current_page < page_count,
            show_controls: page_count > 1,
            window,
            current_page,
            page_count,
            total_matches,
            page_size,
        }
    }

    pub fn to_json(&self) -> String {
        // PageView состоит только из строк и чисел — сериализация не падает
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Human-readable rendering: one line per record, then the pager line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.is_empty {
            let _ = writeln!(out, "{}. {}", EMPTY_TITLE, EMPTY_HINT);
        } else {
            let first = self.current_page.saturating_sub(1) * self.page_size + 1;
            for (i, r) in self.window.iter().enumerate() {
                let _ = writeln!(out, "{:>4}. {}\n      {}", first + i, r.name, r.link);
            }
        }
        if self.show_controls {
            let _ = writeln!(
                out,
                "{}  Page {} of {}  {}",
                if self.has_previous { "[prev]" } else { "[----]" },
                self.current_page,
                self.page_count,
                if self.has_next { "[next]" } else { "[----]" },
            );
        }
        out
    }
}
