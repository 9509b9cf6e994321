use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::{Badge, BadgeTone, Button, ButtonVariant};
use crate::models::{PageId, PostStatus, catalog};

#[component]
pub fn DashboardPage(dispatch: Callback<Action>) -> impl IntoView {
    let posts = catalog::posts();
    let published = posts.iter().filter(|p| p.is_published()).count();
    let views: u32 = posts.iter().filter_map(|p| p.stats.views).sum();
    let comments: u32 = posts.iter().map(|p| p.stats.comments).sum();
    let likes: u32 = posts.iter().map(|p| p.stats.likes).sum();

    let stats = [
        ("Total Views", views.to_string()),
        ("Published Posts", published.to_string()),
        ("Total Comments", comments.to_string()),
        ("Total Likes", likes.to_string()),
    ];

    let go = move |page: PageId| Callback::new(move |()| dispatch.run(Action::navigate(page)));

    view! {
        <div class="max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold mb-2">"Dashboard"</h1>
            <p class="text-muted-foreground mb-8">"Welcome back! Here's how your content is doing."</p>

            <div class="grid md:grid-cols-4 gap-6 mb-12">
                {stats
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="p-6 rounded-xl bg-card border border-border">
                            <p class="text-sm text-muted-foreground mb-1">{label}</p>
                            <p class="text-2xl font-bold">{value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-bold">"Recent Posts"</h2>
                <Button variant=ButtonVariant::Ghost on_click=go(PageId::MyPosts)>"View All"</Button>
            </div>
            <ul class="space-y-3 mb-12">
                {posts
                    .into_iter()
                    .take(3)
                    .map(|post| {
                        let tone = if post.status == PostStatus::Published {
                            BadgeTone::Success
                        } else {
                            BadgeTone::Muted
                        };
                        view! {
                            <li class="flex items-center justify-between p-4 rounded-lg bg-card border border-border">
                                <span>{post.title}</span>
                                <Badge text=post.status.to_string() tone=tone />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="flex gap-3">
                <Button on_click=go(PageId::Editor)>"New Post"</Button>
                <Button variant=ButtonVariant::Outline on_click=go(PageId::MyPosts)>"Manage Posts"</Button>
                <Button variant=ButtonVariant::Outline on_click=go(PageId::Settings)>"Settings"</Button>
            </div>
        </div>
    }
}
