use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::{Badge, Button, ButtonVariant, Notice};
use crate::models::PageId;
use crate::services::editor::{CATEGORIES, EditorDraft};
use crate::services::trim_space;

#[component]
pub fn EditorPage(dispatch: Callback<Action>) -> impl IntoView {
    let draft = RwSignal::new(EditorDraft::new());

    let saved = Signal::derive(move || {
        draft.with(|d| {
            d.last_saved()
                .map(|at| format!("Saved {}", at.format("%H:%M:%S")))
        })
    });

    let publish = move |()| {
        let target = draft.with_untracked(EditorDraft::publish);
        dispatch.run(Action::navigate(target));
    };

    view! {
        <div class="min-h-screen bg-muted/30">
            <div class="sticky top-16 z-40 bg-card border-b border-border">
                <div class="max-w-7xl mx-auto px-4 flex items-center justify-between h-14">
                    <div class="flex items-center gap-4">
                        <Button
                            variant=ButtonVariant::Ghost
                            on_click=Callback::new(move |_| dispatch.run(Action::navigate(PageId::Dashboard)))
                        >
                            "← Back"
                        </Button>
                        <Notice message=saved />
                    </div>
                    <div class="flex items-center gap-2">
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=Callback::new(move |_| draft.update(|d| { d.save(); }))
                        >
                            "Save Draft"
                        </Button>
                        <Button on_click=Callback::new(publish)>"Publish"</Button>
                    </div>
                </div>
            </div>

            <div class="max-w-4xl mx-auto px-4 py-8 space-y-6">
                <input
                    type="text"
                    placeholder="Post title"
                    class="w-full text-4xl font-bold bg-transparent border-none focus:outline-none"
                    prop:value=move || draft.with(|d| d.title().to_string())
                    on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
                />
                <div class="flex items-center gap-2 text-sm text-muted-foreground">
                    "Slug: "
                    <input
                        type="text"
                        class="flex-1 px-2 py-1 rounded border border-border"
                        prop:value=move || draft.with(|d| d.slug().to_string())
                        on:input=move |ev| draft.update(|d| d.set_slug(event_target_value(&ev)))
                    />
                </div>
                <textarea
                    placeholder="Write a short excerpt..."
                    class="w-full px-3 py-2 rounded-lg border border-border"
                    prop:value=move || draft.with(|d| d.excerpt().to_string())
                    on:input=move |ev| draft.update(|d| d.set_excerpt(event_target_value(&ev)))
                ></textarea>
                <textarea
                    placeholder="Start writing your story..."
                    class="w-full min-h-96 px-3 py-2 rounded-lg border border-border font-mono"
                    prop:value=move || draft.with(|d| d.content().to_string())
                    on:input=move |ev| draft.update(|d| d.set_content(event_target_value(&ev)))
                ></textarea>
                <p class="text-xs text-muted-foreground">
                    {move || draft.with(EditorDraft::word_count)} " words"
                </p>

                <div>
                    <label class="block text-sm font-medium mb-2">"Category"</label>
                    <select
                        class="w-full px-3 py-2 rounded-lg border border-border"
                        prop:value=move || draft.with(|d| d.category().to_string())
                        on:change=move |ev| draft.update(|d| d.set_category(event_target_value(&ev)))
                    >
                        <option value="" disabled=true>"Select category"</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm font-medium mb-2">"Tags"</label>
                    <div class="flex flex-wrap gap-2 mb-2">
                        {move || {
                            draft
                                .with(|d| d.tags().to_vec())
                                .into_iter()
                                .map(|tag| {
                                    let removed = tag.clone();
                                    view! {
                                        <Badge
                                            text=tag
                                            on_remove=Callback::new(move |()| draft.update(|d| d.remove_tag(&removed)))
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <input
                        type="text"
                        placeholder="Add a tag and press Enter"
                        class="w-full px-3 py-2 rounded-lg border border-border"
                        prop:value=move || draft.with(|d| d.tag_input().to_string())
                        on:input=move |ev| draft.update(|d| d.set_tag_input(event_target_value(&ev)))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" && !draft.with_untracked(|d| trim_space(d.tag_input()).is_empty()) {
                                ev.prevent_default();
                                draft.update(|d| {
                                    d.commit_tag();
                                });
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
