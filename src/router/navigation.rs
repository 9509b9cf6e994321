use serde::{Deserialize, Serialize};

use crate::models::PageId;

/// Which page is current, plus the parameters handed to the post and
/// search pages.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    current_page: PageId,
    selected_post_id: String,
    search_query: String,
}

/// Optional overrides applied by a transition. `None` leaves the stored
/// value untouched.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransitionParams {
    pub selected_post_id: Option<String>,
    pub search_query: Option<String>,
}

impl TransitionParams {
    pub fn post(id: impl Into<String>) -> Self {
        Self {
            selected_post_id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Default::default()
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(page: PageId) -> Self {
        Self {
            current_page: page,
            ..Default::default()
        }
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn selected_post_id(&self) -> &str {
        &self.selected_post_id
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn transition(&mut self, target: PageId, params: TransitionParams) {
        tracing::debug!(from = %self.current_page, to = %target, "page transition");

        self.current_page = target;
        if let Some(id) = params.selected_post_id {
            self.selected_post_id = id;
        }
        if let Some(query) = params.search_query {
            self.search_query = query;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home_with_empty_params() {
        let nav = NavigationState::new();
        assert_eq!(nav.current_page(), PageId::Home);
        assert_eq!(nav.selected_post_id(), "");
        assert_eq!(nav.search_query(), "");
    }

    #[test]
    fn transition_overwrites_only_supplied_params() {
        let mut nav = NavigationState::new();
        nav.transition(PageId::Search, TransitionParams::search("rust"));
        nav.transition(PageId::Post, TransitionParams::post("3"));

        assert_eq!(nav.current_page(), PageId::Post);
        assert_eq!(nav.selected_post_id(), "3");
        assert_eq!(nav.search_query(), "rust");
    }

    #[test]
    fn explicit_empty_param_clears() {
        let mut nav = NavigationState::new();
        nav.transition(PageId::Post, TransitionParams::post("3"));
        nav.transition(PageId::Blog, TransitionParams::post(""));
        assert_eq!(nav.selected_post_id(), "");
    }
}
