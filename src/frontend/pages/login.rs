use leptos::prelude::*;

use crate::app::Action;
use crate::frontend::components::{Button, ButtonVariant, EmailInput, PasswordInput, TextInput};
use crate::services::auth::{AuthMode, LoginForm};

/// Sign-in and create-account form. `on_submit` receives the form after a
/// submit attempt; the caller validates and reports back through the form.
#[component]
pub fn LoginPage(
    dispatch: Callback<Action>,
    on_submit: Callback<LoginForm, LoginForm>,
) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let is_sign_in = move || form.with(|f| f.mode() == AuthMode::SignIn);

    let email = Signal::derive(move || form.with(|f| f.email().to_string()));
    let password = Signal::derive(move || form.with(|f| f.password().to_string()));
    let name = Signal::derive(move || form.with(|f| f.name().to_string()));
    let email_error = Signal::derive(move || form.with(|f| f.errors().email.clone()));
    let password_error = Signal::derive(move || form.with(|f| f.errors().password.clone()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let checked = on_submit.run(form.get_untracked());
        // A successful sign-in navigates away and may dispose the form.
        let _ = form.try_set(checked);
    };

    view! {
        <div class="min-h-screen flex items-center justify-center py-12 px-4 bg-muted/30">
            <div class="w-full max-w-md p-8 rounded-2xl bg-card border border-border">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold mb-2">
                        {move || if is_sign_in() { "Welcome back" } else { "Create an account" }}
                    </h1>
                    <p class="text-muted-foreground">
                        {move || {
                            if is_sign_in() {
                                "Sign in to your account to continue"
                            } else {
                                "Join our community of writers and readers"
                            }
                        }}
                    </p>
                </div>

                <div class="space-y-3 mb-6">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| dispatch.run(Action::SocialLogin("google".into())))
                    >
                        "Continue with Google"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| dispatch.run(Action::SocialLogin("github".into())))
                    >
                        "Continue with GitHub"
                    </Button>
                </div>

                <form class="space-y-4" on:submit=submit>
                    <Show when=move || !is_sign_in()>
                        <TextInput
                            label="Full Name"
                            name="name"
                            placeholder="Jane Doe"
                            input_type="text"
                            value=name
                            on_input=Callback::new(move |v: String| form.update(|f| f.set_name(v)))
                        />
                    </Show>
                    <EmailInput
                        label="Email"
                        value=email
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_email(v)))
                        error=email_error
                    />
                    <PasswordInput
                        label="Password"
                        hint="At least 6 characters"
                        value=password
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_password(v)))
                        error=password_error
                    />
                    <Button button_type="submit">
                        {move || if is_sign_in() { "Sign In" } else { "Create Account" }}
                    </Button>
                </form>

                <p class="text-center text-sm text-muted-foreground mt-6">
                    {move || if is_sign_in() { "Don't have an account? " } else { "Already have an account? " }}
                    <button class="text-primary font-medium" on:click=move |_| form.update(LoginForm::toggle_mode)>
                        {move || if is_sign_in() { "Sign up" } else { "Sign in" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
