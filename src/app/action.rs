use crate::models::PageId;
use crate::router::TransitionParams;

/// Everything a page or the header can ask the application to do.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    Navigate {
        page: PageId,
        params: TransitionParams,
    },
    /// Set the selected post and open the detail page.
    OpenPost(String),
    /// Header search box. Whitespace-only queries are ignored.
    Search(String),
    Login,
    /// Clears the session and returns to home.
    Logout,
    /// Social sign-in buttons skip form validation.
    SocialLogin(String),
    ToggleTheme,
}

impl Action {
    pub fn navigate(page: PageId) -> Self {
        Self::Navigate {
            page,
            params: TransitionParams::default(),
        }
    }

    pub fn navigate_with(page: PageId, params: TransitionParams) -> Self {
        Self::Navigate { page, params }
    }
}
