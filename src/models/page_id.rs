use serde::{Deserialize, Serialize};

use crate::common::ParsePageIdError;

/// Every page the front-end can show.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    #[default]
    Home,
    Blog,
    Post,
    Authors,
    Search,
    Login,
    Dashboard,
    Editor,
    MyPosts,
    Settings,
}

impl PageId {
    pub const ALL: [PageId; 10] = [
        Self::Home,
        Self::Blog,
        Self::Post,
        Self::Authors,
        Self::Search,
        Self::Login,
        Self::Dashboard,
        Self::Editor,
        Self::MyPosts,
        Self::Settings,
    ];

    /// Pages that require an authenticated session.
    pub const PROTECTED: [PageId; 4] = [
        Self::Dashboard,
        Self::Editor,
        Self::MyPosts,
        Self::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Blog => "blog",
            Self::Post => "post",
            Self::Authors => "authors",
            Self::Search => "search",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Editor => "editor",
            Self::MyPosts => "my-posts",
            Self::Settings => "settings",
        }
    }

    /// Label used in navigation menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Blog => "Articles",
            Self::Post => "Article",
            Self::Authors => "Authors",
            Self::Search => "Search",
            Self::Login => "Sign In",
            Self::Dashboard => "Dashboard",
            Self::Editor => "Write",
            Self::MyPosts => "My Posts",
            Self::Settings => "Settings",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Editor | Self::MyPosts | Self::Settings
        )
    }

    /// Parses a page id, falling back to [`PageId::Home`] for anything
    /// outside the known set.
    pub fn parse_lossy(s: &str) -> Self {
        match s.parse() {
            Ok(page) => page,
            Err(err) => {
                tracing::debug!(%err, "unrecognized page id, falling back to home");
                Self::Home
            }
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl PartialEq<&str> for PageId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for PageId {
    type Err = ParsePageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == normalized)
            .ok_or_else(|| ParsePageIdError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("{:<10}|", PageId::Home), "home      |");
        assert_eq!(format!("{:>9}", PageId::MyPosts), " my-posts");
    }

    #[test]
    fn from_str_accepts_wire_names() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
        }
        assert_eq!(" My-Posts ".parse::<PageId>(), Ok(PageId::MyPosts));
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert_eq!(
            "admin".parse::<PageId>(),
            Err(ParsePageIdError("admin".into()))
        );
        assert!("my_posts".parse::<PageId>().is_err());
    }

    #[test]
    fn parse_lossy_falls_back_to_home() {
        assert_eq!(PageId::parse_lossy(""), PageId::Home);
        assert_eq!(PageId::parse_lossy("404"), PageId::Home);
        assert_eq!(PageId::parse_lossy("editor"), PageId::Editor);
    }

    #[test]
    fn protected_set_matches_predicate() {
        for page in PageId::ALL {
            assert_eq!(page.is_protected(), PageId::PROTECTED.contains(&page));
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&PageId::MyPosts).unwrap();
        assert_eq!(json, "\"my-posts\"");
        let page: PageId = serde_json::from_str("\"settings\"").unwrap();
        assert_eq!(page, PageId::Settings);
    }
}
