use leptos::prelude::*;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional, into)] hint: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();
    let message = move || error.and_then(|e| e.get());

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=move || {
                    if message().is_some() {
                        "w-full px-3 py-2 rounded-lg border border-destructive bg-input-background"
                    } else {
                        "w-full px-3 py-2 rounded-lg border border-border bg-input-background"
                    }
                }
            />
            {move || message().map(|msg| view! { <p class="text-sm text-destructive mt-1">{msg}</p> })}
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-muted-foreground">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            value=value
            on_input=on_input
            error=error
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: String,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="••••••••"
            input_type="password"
            hint=hint
            value=value
            on_input=on_input
            error=error
        />
    }
}
