use leptos::prelude::*;

use crate::app::Action;
use crate::models::catalog;
use crate::services::search::{highlight, search_posts};

#[component]
pub fn SearchResultsPage(#[prop(into)] query: String, dispatch: Callback<Action>) -> impl IntoView {
    // Refining here only narrows this page; the header search owns the
    // query stored in navigation state.
    let (query, set_query) = signal(query);

    let results = move || {
        let query = query.get();
        let posts = catalog::posts();
        search_posts(&posts, &query)
            .into_iter()
            .map(|post| {
                let id = post.id.clone();
                let title = highlight(&post.title, query.trim())
                    .into_iter()
                    .map(|segment| {
                        let text = segment.text.to_string();
                        if segment.highlighted {
                            view! { <mark class="bg-primary/20">{text}</mark> }.into_any()
                        } else {
                            text.into_any()
                        }
                    })
                    .collect_view();
                view! {
                    <li
                        class="p-6 rounded-xl bg-card border border-border cursor-pointer"
                        on:click=move |_| dispatch.run(Action::OpenPost(id.clone()))
                    >
                        <h3 class="text-lg font-semibold mb-2">{title}</h3>
                        <p class="text-sm text-muted-foreground">{post.excerpt.clone()}</p>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold mb-6">"Search Results"</h1>
            <input
                type="search"
                placeholder="Search articles..."
                class="w-full mb-8 px-4 py-3 rounded-lg border border-border"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <ul class="space-y-4">{results}</ul>
        </div>
    }
}
