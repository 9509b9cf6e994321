use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border bg-card">
            <div class="max-w-7xl mx-auto px-4 py-12 text-center">
                <p class="text-lg font-semibold mb-2">"BlogPlatform"</p>
                <p class="text-muted-foreground mb-6">"Stories and ideas from writers who build the web."</p>
                <p class="text-xs text-muted-foreground">"© 2025 BlogPlatform. All rights reserved."</p>
            </div>
        </footer>
    }
}
