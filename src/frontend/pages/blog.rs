use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::PostCard;
use crate::models::catalog;
use crate::services::listing::title_matches;

#[component]
pub fn BlogListingPage(dispatch: Callback<Action>) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal("All".to_string());

    let visible = move || {
        let query = query.get();
        let category = category.get();
        catalog::posts()
            .into_iter()
            .filter(|post| category == "All" || post.category == category)
            .filter(|post| title_matches(&post.title, &query))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold mb-6">"All Articles"</h1>
            <div class="flex flex-wrap gap-2 mb-6">
                {catalog::categories()
                    .into_iter()
                    .map(|name| view! {
                        <button
                            class=move || {
                                if category.get() == name {
                                    "px-3 py-1 rounded-full text-sm bg-primary text-white"
                                } else {
                                    "px-3 py-1 rounded-full text-sm bg-muted"
                                }
                            }
                            on:click=move |_| set_category.set(name.to_string())
                        >
                            {name}
                        </button>
                    })
                    .collect_view()}
            </div>
            <input
                type="search"
                placeholder="Filter articles..."
                class="w-full mb-8 px-3 py-2 rounded-lg border border-border"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <div class="grid md:grid-cols-2 gap-6">
                {move || {
                    visible()
                        .into_iter()
                        .map(|post| view! { <PostCard post=post dispatch=dispatch /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
