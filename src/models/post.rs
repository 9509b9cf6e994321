use serde::{Deserialize, Serialize};

use super::PostStatus;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub status: PostStatus,
    pub stats: PostStats,
}

/// Engagement counters shown on the author dashboard.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PostStats {
    pub views: Option<u32>,
    pub comments: u32,
    pub likes: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub followers: String,
    pub posts: u32,
}

impl PostSummary {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

impl PostStats {
    /// Views rendered the way listings show them: `3.2K`, or `-` for drafts.
    pub fn views_label(&self) -> String {
        match self.views {
            None => "-".to_string(),
            Some(v) if v >= 1000 => format!("{:.1}K", f64::from(v) / 1000.0),
            Some(v) => v.to_string(),
        }
    }
}
