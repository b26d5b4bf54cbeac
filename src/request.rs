//! Stateless view requests (`/schemes?q=..&page=..`).
//!
//! HTTP carries no session, so each request replays the two triggers on a
//! fresh controller: query changed, then page requested.

use crate::config::DirectoryConfig;
use crate::controller::{DirectoryController, PageRequest};
use crate::paginator::parse_page_number;
use crate::store::RecordStore;
use crate::view::PageView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    pub query: String,
    pub page: i64,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl ViewRequest {
    /// Parse the query string of a request URL. Unknown keys are ignored,
    /// a non-numeric page falls back to 1, an oversized one saturates and
    /// is clamped later. A bad percent-escape keeps the raw text.
    pub fn from_url(url: &str) -> Self {
        let mut req = Self::default();
        let qs = match url.split_once('?') {
            Some((_, qs)) => qs,
            None => return req,
        };
        for pair in qs.split('&') {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let v = decode_component(v);
            match k {
                "q" | "query" => req.query = v,
                "page" => req.page = parse_page_number(&v).unwrap_or(1),
                _ => {}
            }
        }
        req
    }

    pub fn execute(&self, store: &RecordStore, cfg: &DirectoryConfig) -> PageView {
        let mut ctl = DirectoryController::new(store.clone(), cfg);
        ctl.set_query(&self.query);
        ctl.request_page(PageRequest::Number(self.page))
    }
}

/// Path part of a request URL (без query string).
pub fn url_path(url: &str) -> &str {
    url.split_once('?').map(|(p, _)| p).unwrap_or(url)
}

fn decode_component(raw: &str) -> String {
    let plus = raw.replace('+', " ");
    urlencoding::decode(&plus)
        .map(|s| s.into_owned())
        .unwrap_or(plus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_and_page() {
        let r = ViewRequest::from_url("/schemes?q=PM%20Kisan&page=2");
        assert_eq!(r.query, "PM Kisan");
        assert_eq!(r.page, 2);

        let r = ViewRequest::from_url("/schemes?q=soil+health&page=abc&x=1");
        assert_eq!(r.query, "soil health");
        assert_eq!(r.page, 1);

        assert_eq!(ViewRequest::from_url("/schemes"), ViewRequest::default());
        assert_eq!(url_path("/schemes?q=a"), "/schemes");
    }
}
