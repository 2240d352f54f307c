use crate::auth::AuthContext;
use crate::web::{dialog, file};
use click::views::upload::{self, UploadForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadPage(auth: AuthContext) -> impl IntoView {
    let form = RwSignal::new(UploadForm::new());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(picked) = picked else {
            form.update(|f| f.file = None);
            return;
        };

        spawn_local(async move {
            match file::read_file(picked).await {
                Ok(blob) => form.update(|f| f.file = Some(blob)),
                Err(e) => {
                    tracing::error!("Failed to read file: {:?}", e);
                    form.update(|f| f.file = None);
                }
            }
        });
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.is_uploading()) {
            return;
        }

        let parts = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(parts)) => parts,
            Some(Err(alert)) => {
                dialog::alert(alert.message());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = auth.api().upload_video(parts).await;
            let uploaded = result.is_ok();
            if let Some(alert) = form.try_update(|f| f.finish(result)) {
                dialog::alert(alert.message());
            }
            // 文件输入框不受信号控制，需要手动清空
            if uploaded {
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    let uploading = move || form.with(|f| f.is_uploading());

    view! {
        <div class="min-h-screen bg-base-200 p-4">
            <div class="max-w-2xl mx-auto">
                <Show
                    when=move || upload::gate_message(auth.is_user()).is_none()
                    fallback=|| {
                        view! {
                            <div class="card bg-base-100 shadow-md">
                                <div class="card-body items-center text-center">
                                    <h2 class="card-title">{upload::LOGIN_TO_UPLOAD}</h2>
                                </div>
                            </div>
                        }
                    }
                >
                    <div class="card bg-base-100 shadow-2xl">
                        <form class="card-body gap-4" on:submit=on_submit>
                            <h1 class="text-3xl font-bold text-center">"Upload Video"</h1>

                            <div class="form-control">
                                <label class="label" for="title">
                                    <span class="label-text">"Title"</span>
                                </label>
                                <input
                                    id="title"
                                    type="text"
                                    placeholder="Enter video title"
                                    class="input input-bordered"
                                    prop:value=move || form.with(|f| f.title.clone())
                                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                                />
                            </div>

                            <div class="form-control">
                                <label class="label" for="description">
                                    <span class="label-text">"Description"</span>
                                </label>
                                <textarea
                                    id="description"
                                    rows="4"
                                    placeholder="Describe your video"
                                    class="textarea textarea-bordered resize-none"
                                    prop:value=move || form.with(|f| f.description.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.description = event_target_value(&ev))
                                    }
                                ></textarea>
                            </div>

                            <div class="form-control">
                                <label class="label" for="file">
                                    <span class="label-text">"Video File"</span>
                                </label>
                                <input
                                    id="file"
                                    type="file"
                                    accept="video/*"
                                    class="file-input file-input-bordered w-full"
                                    node_ref=file_input
                                    on:change=on_file
                                />
                            </div>

                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=uploading>
                                    <Show when=uploading>
                                        <span class="loading loading-spinner"></span>
                                    </Show>
                                    {move || form.with(|f| f.submit_label())}
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>
            </div>
        </div>
    }
}
