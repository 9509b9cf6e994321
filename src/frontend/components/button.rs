use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] button_type: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium rounded-lg transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-primary text-white hover:bg-primary/90 focus:ring-primary",
        ButtonVariant::Outline => "border border-border hover:bg-accent focus:ring-border",
        ButtonVariant::Ghost => "text-muted-foreground hover:text-foreground hover:bg-accent",
    };

    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    let button_type_val = if button_type.is_empty() {
        "button".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type_val
            class=classes
            disabled=disabled
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
