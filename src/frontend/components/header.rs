use leptos::prelude::*;

use crate::app::Action;
use crate::models::PageId;

const PRIMARY_NAV: [PageId; 3] = [PageId::Home, PageId::Blog, PageId::Authors];
const USER_MENU: [PageId; 4] = [
    PageId::Dashboard,
    PageId::Editor,
    PageId::MyPosts,
    PageId::Settings,
];

#[component]
pub fn Header(
    dispatch: Callback<Action>,
    current_page: Signal<PageId>,
    authenticated: Signal<bool>,
    dark_mode: Signal<bool>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (menu_open, set_menu_open) = signal(false);

    let go = move |page: PageId| {
        set_menu_open.set(false);
        dispatch.run(Action::navigate(page));
    };

    view! {
        <header class="sticky top-0 z-50 bg-card/95 border-b border-border backdrop-blur-sm">
            <div class="max-w-7xl mx-auto px-4 flex items-center justify-between h-16">
                <div class="flex items-center gap-8">
                    <button class="flex items-center gap-2" on:click=move |_| go(PageId::Home)>
                        <span class="w-8 h-8 bg-primary rounded-lg text-white font-bold flex items-center justify-center">"B"</span>
                        <span class="font-semibold text-lg">"BlogPlatform"</span>
                    </button>
                    <nav class="flex items-center gap-6">
                        {PRIMARY_NAV
                            .into_iter()
                            .map(|page| view! {
                                <button
                                    class=move || {
                                        if current_page.get() == page {
                                            "text-sm text-primary font-medium"
                                        } else {
                                            "text-sm text-muted-foreground hover:text-primary"
                                        }
                                    }
                                    on:click=move |_| go(page)
                                >
                                    {page.label()}
                                </button>
                            })
                            .collect_view()}
                    </nav>
                </div>

                <div class="flex items-center gap-3">
                    <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        dispatch.run(Action::Search(query.get_untracked()));
                    }>
                        <input
                            type="search"
                            placeholder="Search articles..."
                            class="w-64 px-3 h-9 rounded-lg bg-input-background"
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </form>

                    <button
                        class="h-9 w-9"
                        aria-label="Toggle theme"
                        on:click=move |_| dispatch.run(Action::ToggleTheme)
                    >
                        {move || if dark_mode.get() { "☀" } else { "☾" }}
                    </button>

                    <Show
                        when=move || authenticated.get()
                        fallback=move || view! {
                            <button class="text-sm" on:click=move |_| go(PageId::Login)>"Sign In"</button>
                            <button class="text-sm bg-primary text-white px-3 py-1.5 rounded-lg" on:click=move |_| go(PageId::Editor)>
                                "Write"
                            </button>
                        }
                    >
                        <div class="relative">
                            <button class="h-9 w-9" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                                "👤"
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="absolute right-0 mt-2 w-56 bg-popover border border-border rounded-lg shadow-lg py-1">
                                    {USER_MENU
                                        .into_iter()
                                        .map(|page| view! {
                                            <button
                                                class="w-full px-4 py-2 text-sm text-left hover:bg-accent"
                                                on:click=move |_| go(page)
                                            >
                                                {page.label()}
                                            </button>
                                        })
                                        .collect_view()}
                                    <button
                                        class="w-full px-4 py-2 text-sm text-left text-destructive hover:bg-accent"
                                        on:click=move |_| {
                                            set_menu_open.set(false);
                                            dispatch.run(Action::Logout);
                                        }
                                    >
                                        "Log out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
