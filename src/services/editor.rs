use chrono::{DateTime, Utc};

use crate::models::PageId;

use super::{is_space, trim_space};

/// Category options offered by the editor, as `(value, label)`.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("technology", "Technology"),
    ("development", "Development"),
    ("design", "Design"),
    ("writing", "Writing"),
    ("performance", "Performance"),
];

/// Lowercases `title`, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen and trims hyphens from both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

pub fn word_count(content: &str) -> usize {
    content.split(is_space).filter(|word| !word.is_empty()).count()
}

/// Draft being written in the editor. Nothing here is persisted; saving
/// only stamps the time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorDraft {
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    category: String,
    tags: Vec<String>,
    tag_input: String,
    last_saved: Option<DateTime<Utc>>,
}

impl EditorDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    /// Clearing the title keeps the last derived slug.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if !self.title.is_empty() {
            self.slug = slugify(&self.title);
        }
    }

    /// Manual override; the next title edit derives a fresh slug.
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_excerpt(&mut self, excerpt: impl Into<String>) {
        self.excerpt = excerpt.into();
    }

    /// Empty until one of [`CATEGORIES`] is picked.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_tag_input(&mut self, input: impl Into<String>) {
        self.tag_input = input.into();
    }

    /// Commits the tag input. Blank input is ignored and keeps the input
    /// as typed; otherwise the input is cleared and the trimmed tag is
    /// added unless already present. Returns whether a tag was added.
    pub fn commit_tag(&mut self) -> bool {
        let tag = trim_space(&self.tag_input);
        if tag.is_empty() {
            return false;
        }

        let added = !self.tags.iter().any(|t| t == tag);
        if added {
            self.tags.push(tag.to_string());
        }
        self.tag_input.clear();
        added
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn save(&mut self) -> DateTime<Utc> {
        self.save_at(Utc::now())
    }

    pub fn save_at(&mut self, at: DateTime<Utc>) -> DateTime<Utc> {
        tracing::debug!(slug = %self.slug, words = self.word_count(), "draft saved");
        self.last_saved = Some(at);
        at
    }

    /// Publishing only hands control back to the dashboard.
    pub fn publish(&self) -> PageId {
        tracing::debug!(slug = %self.slug, "draft published");
        PageId::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(
            slugify("Mastering TypeScript: Advanced Techniques!"),
            "mastering-typescript-advanced-techniques"
        );
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
        assert_eq!(slugify("Rust 2024 edition"), "rust-2024-edition");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn word_count_ignores_empty_tokens() {
        assert_eq!(word_count("  Hello   world  "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("\n\tone\ntwo three\t"), 3);
    }

    #[test]
    fn word_count_splits_like_browser_whitespace() {
        assert_eq!(word_count("a\u{FEFF}b"), 2);
        assert_eq!(word_count("a\u{85}b"), 1);
    }

    #[test]
    fn commit_tag_trims_browser_whitespace() {
        let mut draft = EditorDraft::new();
        draft.set_tag_input("\u{FEFF}wasm ");
        assert!(draft.commit_tag());
        assert_eq!(draft.tags(), ["wasm".to_string()]);
    }
}
