use serde::{Deserialize, Serialize};

use crate::common::config::AppConfig;
use crate::models::{PageId, Theme};
use crate::router::{self, AllPages, NavigationState, Resolution, SessionState, TransitionParams};
use crate::services::auth::{LoginErrors, LoginForm};
use crate::services::trim_space;
use crate::types::ViewReport;

use super::Action;

/// When a session change shows up in the reported view.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GatePolicy {
    /// The gate runs on every read of the current view, so logging out
    /// while on a protected page reports login immediately.
    #[default]
    Continuous,
    /// The view is fixed at the last navigation; a bare session change is
    /// only noticed by the next transition.
    OnTransition,
}

impl GatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::OnTransition => "on-transition",
        }
    }
}

impl std::fmt::Display for GatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "continuous" => Ok(Self::Continuous),
            "on-transition" | "on_transition" => Ok(Self::OnTransition),
            _ => Err(format!("invalid gate policy: {}", s)),
        }
    }
}

/// Root application state. Pages never hold a reference to it; they send
/// [`Action`]s and read the [`Resolution`] that comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    navigation: NavigationState,
    session: SessionState,
    theme: Theme,
    policy: GatePolicy,
    last_view: Resolution,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let navigation = NavigationState::starting_at(config.start_page);
        let session = SessionState::new();
        let last_view = router::resolve(&AllPages, &navigation, &session);

        Self {
            navigation,
            session,
            theme: Theme::from_dark_mode(config.dark_mode),
            policy: config.gate_policy,
            last_view,
        }
    }

    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    pub fn dispatch(&mut self, action: Action) -> Resolution {
        tracing::trace!(?action, "dispatch");

        match action {
            Action::Navigate { page, params } => self.navigate(page, params),
            Action::OpenPost(id) => self.navigate(PageId::Post, TransitionParams::post(id)),
            Action::Search(query) => {
                if trim_space(&query).is_empty() {
                    self.current_view()
                } else {
                    self.navigate(PageId::Search, TransitionParams::search(query))
                }
            }
            Action::Login => {
                self.login();
                self.current_view()
            }
            Action::Logout => {
                self.logout();
                self.navigate(PageId::Home, TransitionParams::default())
            }
            Action::SocialLogin(provider) => {
                tracing::debug!(%provider, "social sign-in");
                self.login();
                self.navigate(PageId::Dashboard, TransitionParams::default())
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.current_view()
            }
        }
    }

    pub fn navigate(&mut self, page: PageId, params: TransitionParams) -> Resolution {
        self.navigation.transition(page, params);
        self.last_view = router::resolve(&AllPages, &self.navigation, &self.session);
        self.last_view
    }

    /// Marks the session authenticated without navigating.
    pub fn login(&mut self) -> SessionState {
        self.session.login();
        self.session
    }

    /// Clears the session without navigating. [`Action::Logout`] is the
    /// user-facing variant that also returns home.
    pub fn logout(&mut self) -> SessionState {
        self.session.logout();
        self.session
    }

    /// Validates `form`; on success signs in and opens the dashboard. On
    /// failure the form carries the field errors and neither navigation nor
    /// session state changes.
    pub fn submit_login(&mut self, form: &mut LoginForm) -> Result<Resolution, LoginErrors> {
        form.submit()?;
        tracing::debug!(mode = ?form.mode(), "login form accepted");

        self.login();
        Ok(self.navigate(PageId::Dashboard, TransitionParams::default()))
    }

    pub fn current_view(&self) -> Resolution {
        match self.policy {
            GatePolicy::Continuous => router::resolve(&AllPages, &self.navigation, &self.session),
            GatePolicy::OnTransition => self.last_view,
        }
    }

    pub fn report(&self) -> ViewReport {
        let view = self.current_view();
        ViewReport {
            requested: view.requested,
            page: view.page,
            substitution: view.substitution,
            authenticated: self.session.is_authenticated(),
            selected_post_id: self.navigation.selected_post_id().to_string(),
            search_query: self.navigation.search_query().to_string(),
            theme: self.theme,
        }
    }
}
