//! Client-side page layer. Mounted from [`crate::mount`].

pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;

use crate::app::{Action, AppState};
use crate::models::PageId;
use crate::router::{
    GuardedRouter, NavigationState, PageContext, PageRegistry, Resolution, SessionState,
};
use crate::services::auth::LoginForm;

use components::{Footer, Header};
use pages::*;

fn build_router(
    dispatch: Callback<Action>,
    on_submit: Callback<LoginForm, LoginForm>,
) -> GuardedRouter<AnyView> {
    let registry = PageRegistry::new(move |_: &PageContext<'_>| {
        view! { <HomePage dispatch /> }.into_any()
    })
        .with(PageId::Blog, move |_: &PageContext<'_>| {
            view! { <BlogListingPage dispatch /> }.into_any()
        })
        .with(PageId::Post, move |ctx: &PageContext<'_>| {
            let post_id = ctx.selected_post_id().to_string();
            view! { <SinglePostPage post_id dispatch /> }.into_any()
        })
        .with(PageId::Authors, move |_: &PageContext<'_>| {
            view! { <AuthorPage dispatch /> }.into_any()
        })
        .with(PageId::Search, move |ctx: &PageContext<'_>| {
            let query = ctx.search_query().to_string();
            view! { <SearchResultsPage query dispatch /> }.into_any()
        })
        .with(PageId::Login, move |_: &PageContext<'_>| {
            view! { <LoginPage dispatch on_submit /> }.into_any()
        })
        .with(PageId::Dashboard, move |_: &PageContext<'_>| {
            view! { <DashboardPage dispatch /> }.into_any()
        })
        .with(PageId::Editor, move |_: &PageContext<'_>| {
            view! { <EditorPage dispatch /> }.into_any()
        })
        .with(PageId::MyPosts, move |_: &PageContext<'_>| {
            view! { <MyPostsPage dispatch /> }.into_any()
        })
        .with(PageId::Settings, move |_: &PageContext<'_>| {
            view! { <SettingsPage dispatch /> }.into_any()
        });

    GuardedRouter::new(registry)
}

/// Root component: owns the [`AppState`] and renders the one page the
/// router resolves to.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(AppState::new());

    let dispatch = Callback::new(move |action: Action| {
        state.update(|s| {
            s.dispatch(action);
        });
    });

    let on_submit = Callback::new(move |mut form: LoginForm| {
        state.update(|s| {
            if let Err(errors) = s.submit_login(&mut form) {
                tracing::debug!(%errors, "sign-in rejected");
            }
        });
        form
    });

    let router = StoredValue::new_local(build_router(dispatch, on_submit));

    // Theme toggles leave this untouched, so the page is not rebuilt.
    let routed = Memo::new(move |_| {
        state.with(|s| -> (Resolution, NavigationState, SessionState) {
            (s.current_view(), s.navigation().clone(), *s.session())
        })
    });

    let current_page = Signal::derive(move || routed.with(|(view, _, _)| view.page));
    let authenticated = Signal::derive(move || state.with(|s| s.session().is_authenticated()));
    let dark_mode = Signal::derive(move || state.with(|s| s.theme().is_dark()));

    let page = move || {
        let (resolution, nav, session) = routed.get();
        router.with_value(|router| router.render_resolution(resolution, &nav, &session))
    };

    view! {
        <Title text=move || format!("{} | BlogPlatform", current_page.get().label()) />
        <Meta name="description" content="A modern blogging platform" />

        <div class=move || {
            if dark_mode.get() { "dark min-h-screen bg-background" } else { "min-h-screen bg-background" }
        }>
            <Header dispatch current_page authenticated dark_mode />
            <main>{page}</main>
            <Footer />
        </div>
    }
}
