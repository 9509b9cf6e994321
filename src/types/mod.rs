use serde::{Deserialize, Serialize};

use crate::models::{PageId, Theme};
use crate::router::{Resolution, Substitution};

/// Sign-in payload produced by a valid login form
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up payload produced by a valid login form in create-account mode
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum AuthRequest {
    SignIn(LoginRequest),
    SignUp(RegisterRequest),
}

impl AuthRequest {
    pub fn email(&self) -> &str {
        match self {
            Self::SignIn(req) => &req.email,
            Self::SignUp(req) => &req.email,
        }
    }
}

/// Snapshot of the resolved view, as printed by the harness
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ViewReport {
    pub requested: PageId,
    pub page: PageId,
    pub substitution: Option<Substitution>,
    pub authenticated: bool,
    pub selected_post_id: String,
    pub search_query: String,
    pub theme: Theme,
}

impl ViewReport {
    pub fn resolution(&self) -> Resolution {
        Resolution {
            requested: self.requested,
            page: self.page,
            substitution: self.substitution,
        }
    }
}

/// One row of the page listing
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub id: PageId,
    pub label: String,
    pub protected: bool,
}

impl From<PageId> for PageInfo {
    fn from(id: PageId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            protected: id.is_protected(),
        }
    }
}
