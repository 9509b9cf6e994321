use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::{Badge, Button, ButtonVariant};
use crate::models::{PageId, catalog};

#[component]
pub fn SinglePostPage(#[prop(into)] post_id: String, dispatch: Callback<Action>) -> impl IntoView {
    let post = catalog::post_or_first(&post_id);
    let related: Vec<_> = catalog::published_posts()
        .into_iter()
        .filter(|p| p.id != post.id)
        .take(3)
        .collect();

    view! {
        <article class="max-w-4xl mx-auto px-4 py-12">
            <Button
                variant=ButtonVariant::Ghost
                on_click=Callback::new(move |_| dispatch.run(Action::navigate(PageId::Blog)))
            >
                "← Back to Articles"
            </Button>
            <div class="mt-6 mb-4">
                <Badge text=post.category />
            </div>
            <h1 class="text-4xl font-bold mb-4">{post.title}</h1>
            <p class="text-muted-foreground mb-8">
                {post.author} " · " {post.date} " · " {post.read_time} " read"
            </p>
            <p class="text-lg leading-relaxed">{post.excerpt}</p>

            <section class="mt-16">
                <h2 class="text-2xl font-bold mb-6">"Related Articles"</h2>
                <ul class="space-y-3">
                    {related
                        .into_iter()
                        .map(|p| {
                            let id = p.id.clone();
                            view! {
                                <li>
                                    <button
                                        class="text-left hover:text-primary"
                                        on:click=move |_| dispatch.run(Action::OpenPost(id.clone()))
                                    >
                                        {p.title}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </article>
    }
}
