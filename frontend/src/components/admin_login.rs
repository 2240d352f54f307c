use super::forms::{self, Field, SubmitButton};
use crate::auth::AuthContext;
use click::views::credentials::{self, AdminLoginForm, CredentialForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 管理员登录，成功后路由自动切换到管理后台
#[component]
pub fn AdminLoginPage(auth: AuthContext) -> impl IntoView {
    let form = RwSignal::new(AdminLoginForm::default());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(snapshot) = forms::begin(form) else {
            return;
        };
        spawn_local(async move {
            let result = credentials::admin_login(&auth.api(), &snapshot).await;
            forms::settle(auth, form, result);
        });
    };

    view! {
        <div class="hero min-h-screen bg-gradient-to-br from-gray-900 to-gray-700">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4 text-white">
                    <h1 class="text-3xl font-bold">"🛡️ Click Admin"</h1>
                    <p class="opacity-70">"Content moderation dashboard"</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Field
                            id="admin-username"
                            label="Username"
                            placeholder="admin"
                            value=Signal::derive(move || form.with(|f| f.username.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.username = v))
                        />
                        <Field
                            id="admin-password"
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
                    </form>
                </div>
            </div>
        </div>
    }
}
