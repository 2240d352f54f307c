use super::forms::{self, Field, SubmitButton};
use crate::auth::AuthContext;
use click::views::credentials::{self, CredentialForm, RegisterForm};
use click::{Page, ViewRouter};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage(auth: AuthContext, router: RwSignal<ViewRouter>) -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(snapshot) = forms::begin(form) else {
            return;
        };
        spawn_local(async move {
            let result = credentials::register(&auth.api(), &snapshot).await;
            forms::settle(auth, form, result);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Join Click"</h1>
                    <p class="text-base-content/70">"Create an account to start sharing videos."</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Field
                            id="username"
                            label="Username"
                            placeholder="Choose a username"
                            value=Signal::derive(move || form.with(|f| f.username.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.username = v))
                        />
                        <Field
                            id="email"
                            label="Email"
                            kind="email"
                            placeholder="you@example.com"
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        />
                        <Field
                            id="password"
                            label="Password"
                            kind="password"
                            placeholder="••••••••"
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        />
                        <SubmitButton
                            busy=Signal::derive(move || form.with(|f| f.is_submitting()))
                            label=Signal::derive(move || form.with(|f| f.submit_label()))
                        />
                        <p class="text-center text-sm mt-2">
                            "Already have an account? "
                            <a
                                class="link link-primary cursor-pointer"
                                on:click=move |_| {
                                    router.update(|r| {
                                        r.navigate(Page::Login);
                                    })
                                }
                            >
                                "Login here"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
