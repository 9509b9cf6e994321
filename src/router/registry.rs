use std::collections::HashMap;

use crate::models::PageId;

use super::{NavigationState, SessionState};

/// Everything a page provider may read while rendering.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// The page being rendered, after gating and fallback.
    pub page: PageId,
    /// The page the navigation state asked for.
    pub requested: PageId,
    pub navigation: &'a NavigationState,
    pub session: &'a SessionState,
}

impl PageContext<'_> {
    pub fn selected_post_id(&self) -> &str {
        self.navigation.selected_post_id()
    }

    pub fn search_query(&self) -> &str {
        self.navigation.search_query()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// Produces the view for one page.
pub trait PageProvider<V> {
    fn render(&self, ctx: &PageContext<'_>) -> V;
}

impl<V, F> PageProvider<V> for F
where
    F: Fn(&PageContext<'_>) -> V,
{
    fn render(&self, ctx: &PageContext<'_>) -> V {
        self(ctx)
    }
}

/// Answers whether a page has a provider. Gating only needs this much.
pub trait PageLookup {
    fn contains(&self, page: PageId) -> bool;
}

/// Lookup for the complete page set, used when resolving without a
/// concrete renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllPages;

impl PageLookup for AllPages {
    fn contains(&self, _page: PageId) -> bool {
        true
    }
}

/// Maps page ids to providers. A home provider is mandatory so that the
/// fallback always has somewhere to land.
pub struct PageRegistry<V> {
    home: Box<dyn PageProvider<V>>,
    pages: HashMap<PageId, Box<dyn PageProvider<V>>>,
}

impl<V> PageRegistry<V> {
    pub fn new(home: impl PageProvider<V> + 'static) -> Self {
        Self {
            home: Box::new(home),
            pages: HashMap::new(),
        }
    }

    /// Builder form of [`PageRegistry::insert`].
    pub fn with(mut self, page: PageId, provider: impl PageProvider<V> + 'static) -> Self {
        self.insert(page, provider);
        self
    }

    /// Registers `provider` for `page`, replacing any previous one.
    pub fn insert(&mut self, page: PageId, provider: impl PageProvider<V> + 'static) {
        if page == PageId::Home {
            self.home = Box::new(provider);
        } else {
            self.pages.insert(page, Box::new(provider));
        }
    }

    pub fn get(&self, page: PageId) -> Option<&dyn PageProvider<V>> {
        if page == PageId::Home {
            return Some(self.home());
        }
        let provider: &dyn PageProvider<V> = self.pages.get(&page)?.as_ref();
        Some(provider)
    }

    pub fn home(&self) -> &dyn PageProvider<V> {
        self.home.as_ref()
    }

    pub fn registered(&self) -> impl Iterator<Item = PageId> + '_ {
        PageId::ALL.into_iter().filter(move |page| self.contains(*page))
    }
}

impl<V> PageLookup for PageRegistry<V> {
    fn contains(&self, page: PageId) -> bool {
        page == PageId::Home || self.pages.contains_key(&page)
    }
}

impl<V> std::fmt::Debug for PageRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("pages", &self.registered().collect::<Vec<_>>())
            .finish()
    }
}
