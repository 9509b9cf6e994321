use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::{Badge, BadgeTone, Button};
use crate::models::{PageId, StatusFilter, catalog};
use crate::services::listing::{Selection, filter_posts};

#[component]
pub fn MyPostsPage(dispatch: Callback<Action>) -> impl IntoView {
    let posts = StoredValue::new(catalog::posts());
    let (query, set_query) = signal(String::new());
    let (status, set_status) = signal(StatusFilter::All);
    let selection = RwSignal::new(Selection::new());

    let filtered = Memo::new(move |_| {
        let query = query.get();
        let status = status.get();
        posts.with_value(|all| {
            filter_posts(all, &query, status)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let all_checked = move || {
        let visible = filtered.with(Vec::len);
        selection.with(|s| s.all_selected(visible))
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-12">
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h1 class="text-3xl font-bold mb-2">"My Posts"</h1>
                    <p class="text-muted-foreground">"Manage and track your content"</p>
                </div>
                <Button on_click=Callback::new(move |_| dispatch.run(Action::navigate(PageId::Editor)))>
                    "New Post"
                </Button>
            </div>

            <div class="flex gap-4 mb-6">
                <input
                    type="search"
                    placeholder="Search posts..."
                    class="flex-1 px-3 py-2 rounded-lg border border-border"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select
                    class="px-3 py-2 rounded-lg border border-border"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_status.set(value.parse().unwrap_or_default());
                    }
                >
                    <option value="all">"All Posts"</option>
                    <option value="published">"Published"</option>
                    <option value="draft">"Drafts"</option>
                </select>
            </div>

            <Show when=move || selection.with(|s| !s.is_empty())>
                <p class="mb-4 text-sm">{move || selection.with(Selection::len)} " selected"</p>
            </Show>

            <table class="w-full bg-card border border-border rounded-xl">
                <thead>
                    <tr>
                        <th class="p-3 w-10">
                            <input
                                type="checkbox"
                                prop:checked=all_checked
                                on:change=move |_| {
                                    filtered.with_untracked(|visible| selection.update(|s| s.toggle_all(visible)));
                                }
                            />
                        </th>
                        <th class="p-3 text-left">"Title"</th>
                        <th class="p-3 text-left">"Status"</th>
                        <th class="p-3 text-left">"Date"</th>
                        <th class="p-3 text-right">"Views"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|post| {
                                let id = post.id.clone();
                                let checked_id = post.id.clone();
                                let tone = if post.is_published() { BadgeTone::Success } else { BadgeTone::Muted };
                                view! {
                                    <tr class="border-t border-border">
                                        <td class="p-3">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selection.with(|s| s.contains(&checked_id))
                                                on:change=move |_| selection.update(|s| s.toggle(&id))
                                            />
                                        </td>
                                        <td class="p-3">{post.title}</td>
                                        <td class="p-3"><Badge text=post.status.to_string() tone=tone /></td>
                                        <td class="p-3 text-muted-foreground">{post.date}</td>
                                        <td class="p-3 text-right">{post.stats.views_label()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
