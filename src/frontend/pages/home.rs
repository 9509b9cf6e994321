use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::{Button, ButtonVariant, PostCard};
use crate::models::{PageId, catalog};

#[component]
pub fn HomePage(dispatch: Callback<Action>) -> impl IntoView {
    let mut posts = catalog::published_posts();
    let featured = posts.remove(0);
    let featured_id = featured.id.clone();

    view! {
        <div class="max-w-7xl mx-auto px-4 py-12">
            <section
                class="mb-16 p-8 rounded-2xl bg-card border border-border cursor-pointer"
                on:click=move |_| dispatch.run(Action::OpenPost(featured_id.clone()))
            >
                <p class="text-sm text-primary font-medium mb-2">"Featured"</p>
                <h1 class="text-4xl font-bold mb-4">{featured.title}</h1>
                <p class="text-lg text-muted-foreground">{featured.excerpt}</p>
            </section>

            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold">"Latest Articles"</h2>
                <Button
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(move |_| dispatch.run(Action::navigate(PageId::Blog)))
                >
                    "View All"
                </Button>
            </div>
            <div class="grid md:grid-cols-3 gap-6">
                {posts
                    .into_iter()
                    .map(|post| view! { <PostCard post=post dispatch=dispatch /> })
                    .collect_view()}
            </div>
        </div>
    }
}
