use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Muted,
}

/// Small pill used for categories, tags and post status.
#[component]
pub fn Badge(
    #[prop(into)] text: String,
    #[prop(optional)] tone: BadgeTone,
    #[prop(optional)] on_remove: Option<Callback<()>>,
) -> impl IntoView {
    let classes = match tone {
        BadgeTone::Neutral => "bg-secondary text-secondary-foreground",
        BadgeTone::Success => "bg-emerald-500/10 text-emerald-600",
        BadgeTone::Muted => "bg-muted text-muted-foreground",
    };

    view! {
        <span class=format!("inline-flex items-center gap-1 px-2 py-0.5 rounded-md text-xs font-medium {}", classes)>
            {text}
            {on_remove.map(|on_remove| view! {
                <button type="button" class="hover:text-destructive" on:click=move |_| on_remove.run(())>
                    "×"
                </button>
            })}
        </span>
    }
}

/// Inline status line, e.g. the editor's save timestamp.
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <span class="text-xs text-muted-foreground">{msg}</span>
        })}
    }
}
