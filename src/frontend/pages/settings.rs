use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::{Button, ButtonVariant};
use crate::models::PageId;

const NOTIFICATIONS: [(&str, bool); 5] = [
    ("Email me when someone comments on my posts", true),
    ("Email me when someone follows me", true),
    ("Weekly digest of my post performance", true),
    ("Product updates and announcements", false),
    ("Marketing emails", false),
];

#[component]
pub fn SettingsPage(dispatch: Callback<Action>) -> impl IntoView {
    let (tab, set_tab) = signal("profile");

    view! {
        <div class="max-w-5xl mx-auto px-4 py-12">
            <Button
                variant=ButtonVariant::Ghost
                on_click=Callback::new(move |_| dispatch.run(Action::navigate(PageId::Dashboard)))
            >
                "← Back to Dashboard"
            </Button>
            <h1 class="text-3xl font-bold mt-4 mb-2">"Settings"</h1>
            <p class="text-muted-foreground mb-8">"Manage your account settings and preferences"</p>

            <div class="grid grid-cols-4 gap-2 mb-6">
                {["profile", "account", "notifications", "security"]
                    .into_iter()
                    .map(|name| view! {
                        <button
                            class=move || if tab.get() == name { "py-2 rounded-lg bg-card font-medium" } else { "py-2 rounded-lg text-muted-foreground" }
                            on:click=move |_| set_tab.set(name)
                        >
                            {name}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="p-6 rounded-xl bg-card border border-border">
                {move || match tab.get() {
                    "notifications" => NOTIFICATIONS
                        .into_iter()
                        .map(|(label, on)| view! {
                            <label class="flex items-center justify-between py-3">
                                <span>{label}</span>
                                <input type="checkbox" checked=on />
                            </label>
                        })
                        .collect_view()
                        .into_any(),
                    "security" => view! {
                        <p class="text-muted-foreground">"Change your password and manage active sessions."</p>
                    }
                    .into_any(),
                    "account" => view! {
                        <p class="text-muted-foreground">"Update your email address and account preferences."</p>
                    }
                    .into_any(),
                    _ => view! {
                        <p class="text-muted-foreground">"Update your profile picture, display name and bio."</p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
