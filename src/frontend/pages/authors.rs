use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::PostCard;
use crate::models::catalog;

#[component]
pub fn AuthorPage(dispatch: Callback<Action>) -> impl IntoView {
    let author = catalog::featured_author();
    let posts = catalog::published_posts();

    view! {
        <div class="max-w-5xl mx-auto px-4 py-12">
            <div class="p-8 rounded-2xl bg-card border border-border mb-12">
                <h1 class="text-3xl font-bold">{author.name}</h1>
                <p class="text-muted-foreground mb-4">{author.username}</p>
                <p class="mb-6">{author.bio}</p>
                <div class="flex gap-8">
                    <div>
                        <p class="font-bold text-xl">{author.followers}</p>
                        <p class="text-sm text-muted-foreground">"Followers"</p>
                    </div>
                    <div>
                        <p class="font-bold text-xl">{author.posts}</p>
                        <p class="text-sm text-muted-foreground">"Articles"</p>
                    </div>
                </div>
            </div>
            <h2 class="text-2xl font-bold mb-6">"Published Articles"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                {posts
                    .into_iter()
                    .map(|post| view! { <PostCard post=post dispatch=dispatch /> })
                    .collect_view()}
            </div>
        </div>
    }
}
