use serde::{Deserialize, Serialize};

use crate::models::PageId;

use super::{NavigationState, PageContext, PageLookup, PageRegistry, SessionState};

/// Why the rendered page differs from the requested one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Substitution {
    /// No provider was registered for the requested page.
    UnknownPage,
    /// The requested page is protected and the session is anonymous.
    AuthGate,
}

impl Substitution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownPage => "unknown-page",
            Self::AuthGate => "auth-gate",
        }
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one pass through the router.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub requested: PageId,
    pub page: PageId,
    pub substitution: Option<Substitution>,
}

impl Resolution {
    pub fn direct(page: PageId) -> Self {
        Self {
            requested: page,
            page,
            substitution: None,
        }
    }

    pub fn was_gated(&self) -> bool {
        self.substitution == Some(Substitution::AuthGate)
    }
}

/// Picks the page to render for `nav` under `session`.
///
/// Unregistered pages fall back to home. Protected pages resolve to login
/// while the session is anonymous; if login itself is unregistered the
/// gate lands on home.
pub fn resolve(
    lookup: &impl PageLookup,
    nav: &NavigationState,
    session: &SessionState,
) -> Resolution {
    let requested = nav.current_page();

    let (page, mut substitution) = if lookup.contains(requested) {
        (requested, None)
    } else {
        tracing::debug!(page = %requested, "no provider registered, rendering home");
        (PageId::Home, Some(Substitution::UnknownPage))
    };

    let page = if page.is_protected() && !session.is_authenticated() {
        tracing::debug!(page = %page, "protected page requested anonymously, rendering login");
        substitution = Some(Substitution::AuthGate);
        if lookup.contains(PageId::Login) {
            PageId::Login
        } else {
            PageId::Home
        }
    } else {
        page
    };

    Resolution {
        requested,
        page,
        substitution,
    }
}

/// Registry plus the authentication gate.
#[derive(Debug)]
pub struct GuardedRouter<V> {
    registry: PageRegistry<V>,
}

impl<V> GuardedRouter<V> {
    pub fn new(registry: PageRegistry<V>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PageRegistry<V> {
        &self.registry
    }

    pub fn resolve(&self, nav: &NavigationState, session: &SessionState) -> Resolution {
        resolve(&self.registry, nav, session)
    }

    /// Resolves and invokes exactly one provider. A gated-out page's
    /// provider is never called.
    pub fn render(&self, nav: &NavigationState, session: &SessionState) -> (Resolution, V) {
        let resolution = self.resolve(nav, session);
        let view = self.render_resolution(resolution, nav, session);
        (resolution, view)
    }

    /// Invokes the provider for an already computed resolution, e.g. one
    /// held back by [`GatePolicy::OnTransition`](crate::app::GatePolicy).
    pub fn render_resolution(
        &self,
        resolution: Resolution,
        nav: &NavigationState,
        session: &SessionState,
    ) -> V {
        let ctx = PageContext {
            page: resolution.page,
            requested: resolution.requested,
            navigation: nav,
            session,
        };
        let provider = self
            .registry
            .get(resolution.page)
            .unwrap_or_else(|| self.registry.home());

        provider.render(&ctx)
    }
}
