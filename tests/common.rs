#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use inkpress::app::{AppState, GatePolicy};
use inkpress::harness::{StepOutcome, parse_script, run_script};
use inkpress::models::*;
use inkpress::router::*;

/// Provider calls recorded in invocation order.
pub type CallLog = Rc<RefCell<Vec<PageId>>>;

/// Registry whose providers return their own page id and log each call.
/// Home is always registered.
pub fn recording_registry(pages: &[PageId]) -> (PageRegistry<PageId>, CallLog) {
    let log: CallLog = Rc::default();

    let home_log = Rc::clone(&log);
    let mut registry = PageRegistry::new(move |ctx: &PageContext<'_>| {
        home_log.borrow_mut().push(PageId::Home);
        ctx.page
    });

    for page in pages.iter().copied().filter(|p| *p != PageId::Home) {
        let page_log = Rc::clone(&log);
        registry.insert(page, move |_: &PageContext<'_>| {
            page_log.borrow_mut().push(page);
            page
        });
    }

    (registry, log)
}

pub fn full_router() -> (GuardedRouter<PageId>, CallLog) {
    let (registry, log) = recording_registry(&PageId::ALL);
    (GuardedRouter::new(registry), log)
}

pub fn nav_to(page: PageId) -> NavigationState {
    NavigationState::starting_at(page)
}

pub fn signed_in_state(policy: GatePolicy) -> AppState {
    let mut state = AppState::new().with_policy(policy);
    state.login();
    state
}

pub fn replay(state: &mut AppState, script: &str) -> Vec<StepOutcome> {
    let script = parse_script(script).expect("test script should parse");
    run_script(state, &script)
}

pub fn post_titled(id: &str, title: &str, status: PostStatus) -> PostSummary {
    PostSummary {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: String::new(),
        category: "Testing".to_string(),
        author: "Test Author".to_string(),
        date: "Jan 1, 2025".to_string(),
        read_time: "1 min".to_string(),
        status,
        stats: PostStats::default(),
    }
}

/// Three posts titled Alpha, beta, Gamma; only beta is a draft.
pub fn greek_posts() -> Vec<PostSummary> {
    vec![
        post_titled("a", "Alpha", PostStatus::Published),
        post_titled("b", "beta", PostStatus::Draft),
        post_titled("g", "Gamma", PostStatus::Published),
    ]
}
