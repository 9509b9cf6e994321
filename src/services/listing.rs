use std::collections::BTreeSet;

use crate::models::{PostSummary, StatusFilter};

/// Case-insensitive substring match on the title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Posts whose title contains `query` and whose status passes `status`,
/// in catalog order.
pub fn filter_posts<'a>(
    posts: &'a [PostSummary],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a PostSummary> {
    posts
        .iter()
        .filter(|post| title_matches(&post.title, query) && status.matches(post.status))
        .collect()
}

/// Checked rows on the my-posts table. Kept apart from the filter so a
/// hidden row stays checked when the filter changes.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header checkbox. Clears everything when the selection size equals
    /// the filtered row count, otherwise selects exactly the filtered rows.
    pub fn toggle_all<'a, I>(&mut self, filtered: I)
    where
        I: IntoIterator<Item = &'a PostSummary>,
    {
        let visible: Vec<&PostSummary> = filtered.into_iter().collect();
        if self.ids.len() == visible.len() {
            self.ids.clear();
        } else {
            self.ids = visible.iter().map(|post| post.id.clone()).collect();
        }
    }

    /// Whether the header checkbox renders as checked.
    pub fn all_selected(&self, filtered_len: usize) -> bool {
        filtered_len > 0 && self.ids.len() == filtered_len
    }
}
