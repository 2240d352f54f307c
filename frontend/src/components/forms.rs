//! 凭据表单的共用提交流程

use crate::auth::AuthContext;
use crate::web::dialog;
use click::AuthGrant;
use click::views::Alert;
use click::views::credentials::CredentialForm;
use leptos::prelude::*;

/// 进入提交中状态并返回表单快照；正在提交时返回 `None`
pub(crate) fn begin<F>(form: RwSignal<F>) -> Option<F>
where
    F: CredentialForm + Clone + Send + Sync + 'static,
{
    form.try_update(|f| {
        if f.is_submitting() {
            return None;
        }
        f.set_submitting(true);
        Some(f.clone())
    })
    .flatten()
}

/// 安装凭据，失败时弹出提示，最后恢复提交按钮
pub(crate) fn settle<F>(auth: AuthContext, form: RwSignal<F>, result: Result<AuthGrant, Alert>)
where
    F: CredentialForm + Send + Sync + 'static,
{
    let outcome = result.and_then(|grant| {
        auth.accept(grant)
            .map_err(|e| Alert::from_error(&e, F::FAILURE))
    });
    if let Err(alert) = outcome {
        dialog::alert(alert.message());
    }
    form.update(|f| f.set_submitting(false));
}

/// 带标签的输入框
#[component]
pub(crate) fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                class="input input-bordered"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// 提交按钮，提交中显示加载动画
#[component]
pub(crate) fn SubmitButton(busy: Signal<bool>, label: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class="form-control mt-6">
            <button class="btn btn-primary" disabled=move || busy.get()>
                <Show when=move || busy.get()>
                    <span class="loading loading-spinner"></span>
                </Show>
                {move || label.get()}
            </button>
        </div>
    }
}
