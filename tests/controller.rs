mod common;

use schemedir::{
    on_page_requested, on_query_changed, DirectoryConfig, DirectoryController, EmptyPagePolicy,
    PageRequest, RecordStore, ViewState,
};

use common::{generated_records, names, sample_store};

fn cfg(page_size: usize, policy: EmptyPagePolicy) -> DirectoryConfig {
    DirectoryConfig::default()
        .with_page_size(page_size)
        .with_empty_policy(policy)
}

#[test]
fn sample_scenario_pm_two_per_page() {
    let mut ctl = DirectoryController::new(sample_store(), &cfg(2, EmptyPagePolicy::ShowSinglePage));

    let v1 = ctl.set_query("pm");
    assert_eq!(v1.total_matches, 3);
    assert_eq!(v1.page_count, 2);
    assert_eq!(v1.current_page, 1);
    assert_eq!(names(&v1.window), vec!["PM-KISAN", "PM Fasal Bima Yojna"]);
    assert!(!v1.has_previous);
    assert!(v1.has_next);

    let v2 = ctl.request_page(PageRequest::Next);
    assert_eq!(v2.current_page, 2);
    assert_eq!(names(&v2.window), vec!["PM Krishi Sinchai Yojna"]);
    assert!(v2.has_previous);
    assert!(!v2.has_next);

    // page 3 -> clamp к 2
    let v3 = ctl.request_page(PageRequest::Number(3));
    assert_eq!(v3.current_page, 2);
    assert_eq!(v3, v2);
}

#[test]
fn sample_scenario_no_match_both_policies() {
    for (policy, expected_pages) in [
        (EmptyPagePolicy::ShowSinglePage, 1usize),
        (EmptyPagePolicy::HideControls, 0usize),
    ] {
        let mut ctl = DirectoryController::new(sample_store(), &cfg(2, policy));
        let v = ctl.set_query("xyz");
        assert!(v.is_empty);
        assert!(v.window.is_empty());
        assert_eq!(v.page_count, expected_pages);
        assert_eq!(v.current_page, 1);
        assert!(!v.has_previous && !v.has_next && !v.show_controls);

        // навигация на пустом списке инертна
        for req in [PageRequest::Next, PageRequest::Previous, PageRequest::Last, PageRequest::Number(9)] {
            let again = ctl.request_page(req);
            assert_eq!(again.current_page, 1);
        }
    }
}

#[test]
fn query_change_always_resets_page() {
    let store = RecordStore::from_records(generated_records(95)).expect("valid");
    let mut ctl = DirectoryController::new(store, &cfg(10, EmptyPagePolicy::ShowSinglePage));
    assert_eq!(ctl.page_count(), 10);

    for (page, query) in [(7i64, "a"), (3, "pm"), (2, ""), (10, "yojana")] {
        ctl.request_page(PageRequest::Number(page));
        let before = ctl.state().current_page;
        assert!(before >= 1);
        let v = ctl.set_query(query);
        assert_eq!(v.current_page, 1, "query '{query}' after page {before}");
    }
}

#[test]
fn navigation_at_bounds_is_noop() {
    let state = ViewState {
        query: String::new(),
        current_page: 1,
        page_size: 10,
        empty_policy: EmptyPagePolicy::ShowSinglePage,
    };
    let (next, tr) = on_page_requested(&state, 25, PageRequest::Previous);
    assert_eq!(next, state);
    assert!(!tr.changed);
    assert!(tr.clamped);

    let last = ViewState { current_page: 3, ..state.clone() };
    let (next, tr) = on_page_requested(&last, 25, PageRequest::Next);
    assert_eq!(next.current_page, 3);
    assert!(!tr.changed);

    let (next, tr) = on_page_requested(&state, 25, PageRequest::Last);
    assert_eq!(next.current_page, 3);
    assert!(tr.changed && !tr.clamped);
}

#[test]
fn out_of_range_numbers_clamp_not_equal_to_request() {
    let state = ViewState {
        query: "x".into(),
        current_page: 2,
        page_size: 5,
        empty_policy: EmptyPagePolicy::HideControls,
    };
    for (req, expect) in [(-3i64, 1usize), (0, 1), (4, 4), (5, 4), (999, 4)] {
        let (next, tr) = on_page_requested(&state, 20, PageRequest::Number(req));
        assert_eq!(next.current_page, expect, "request {req}");
        assert_eq!(tr.clamped, !(1..=4).contains(&req));
    }
}

#[test]
fn reducer_query_change_keeps_config_and_resets_page() {
    let state = ViewState {
        query: "pm".into(),
        current_page: 4,
        page_size: 20,
        empty_policy: EmptyPagePolicy::HideControls,
    };
    let next = on_query_changed(&state, "soil");
    assert_eq!(next.query, "soil");
    assert_eq!(next.current_page, 1);
    assert_eq!(next.page_size, 20);
    assert_eq!(next.empty_policy, EmptyPagePolicy::HideControls);

    // тот же запрос — не смена
    assert_eq!(on_query_changed(&state, "pm"), state);
}

#[test]
fn page_navigation_keeps_filtered_list() {
    let mut ctl = DirectoryController::new(sample_store(), &cfg(1, EmptyPagePolicy::ShowSinglePage));
    ctl.set_query("yojna");
    let before: Vec<i64> = ctl.filtered().map(|r| r.id).collect();
    ctl.request_page(PageRequest::Next);
    ctl.request_page(PageRequest::First);
    let after: Vec<i64> = ctl.filtered().map(|r| r.id).collect();
    assert_eq!(before, vec![2, 4]);
    assert_eq!(before, after);
}

#[test]
fn empty_store_renders_empty_state() {
    let mut ctl = DirectoryController::new(RecordStore::empty(), &DirectoryConfig::default());
    let v = ctl.view();
    assert!(v.is_empty);
    assert_eq!(v.page_count, 1);
    let v = ctl.set_query("pm");
    assert!(v.is_empty);
    assert!(v.render_text().contains("No schemes found"));
}
