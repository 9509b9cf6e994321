use leptos::prelude::*;

use crate::app::Action;
use crate::models::PostSummary;

use super::{Badge, BadgeTone};

#[component]
pub fn PostCard(post: PostSummary, dispatch: Callback<Action>) -> impl IntoView {
    let id = post.id.clone();

    view! {
        <article
            class="group p-6 rounded-xl bg-card border border-border cursor-pointer hover:border-primary/50 transition-colors"
            on:click=move |_| dispatch.run(Action::OpenPost(id.clone()))
        >
            <Badge text=post.category tone=BadgeTone::Neutral />
            <h3 class="text-lg font-semibold mt-3 mb-2 group-hover:text-primary transition-colors">
                {post.title}
            </h3>
            <p class="text-muted-foreground text-sm mb-4">{post.excerpt}</p>
            <p class="text-xs text-muted-foreground">
                {post.author} " · " {post.date} " · " {post.read_time} " read"
            </p>
        </article>
    }
}
