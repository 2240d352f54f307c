use crate::auth::AuthContext;
use crate::web::{BrowserShare, dialog};
use click::views::home::{self, HomeState, NO_COMMENTS, ShareOutcome};
use click_shared::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage(auth: AuthContext) -> impl IntoView {
    let state = RwSignal::new(HomeState::default());
    let draft = RwSignal::new(String::new());

    // 初始加载；登录状态变化时重新获取点赞状态
    Effect::new(move |_| {
        let signed_in = auth.is_user();
        spawn_local(async move {
            let feed = home::load_feed(&auth.api(), signed_in).await;
            state.update(|s| s.apply_feed(feed));
        });
    });

    let open_video = move |video: Video| {
        let id = video.id.clone();
        state.update(|s| s.open(video));
        spawn_local(async move {
            let comments = home::load_comments(&auth.api(), &id).await;
            state.update(|s| {
                if s.selected_id() == Some(id.as_str()) {
                    s.apply_comments(comments);
                }
            });
        });
    };

    let like = move |id: String| {
        spawn_local(async move {
            match home::toggle_like(&auth.api(), &id, auth.is_user_untracked()).await {
                Ok(liked) => state.update(|s| s.apply_like(&id, liked)),
                Err(alert) => dialog::alert(alert.message()),
            }
        });
    };

    let share = move |video: Video| {
        if let ShareOutcome::Copied(alert) = home::share_video(&BrowserShare, &video) {
            dialog::alert(alert.message());
        }
    };

    let post_comment = move |_: ()| {
        let Some(id) = state.with_untracked(|s| s.selected_id().map(str::to_string)) else {
            return;
        };
        let content = draft.get_untracked();
        spawn_local(async move {
            match home::post_comment(&auth.api(), &id, &content, auth.is_user_untracked()).await {
                Ok(Some(comments)) => {
                    draft.set(String::new());
                    state.update(|s| s.apply_comments(comments));
                }
                Ok(None) => {}
                Err(alert) => dialog::alert(alert.message()),
            }
        });
    };

    let selected = Memo::new(move |_| state.with(|s| s.selected_id().map(str::to_string)));

    move || match selected.get() {
        Some(id) => view! {
            <VideoDetail
                auth=auth
                state=state
                id=id
                draft=draft
                on_like=Callback::new(like)
                on_share=Callback::new(share)
                on_post=Callback::new(post_comment)
            />
        }
        .into_any(),
        None => view! {
            <VideoGrid
                state=state
                on_open=Callback::new(open_video)
                on_like=Callback::new(like)
                on_share=Callback::new(share)
            />
        }
        .into_any(),
    }
}

/// 读取列表中某个视频的字段
fn video_field<T>(state: RwSignal<HomeState>, id: &str, f: impl Fn(&Video) -> T) -> Option<T> {
    state.with(|s| s.videos.iter().find(|v| v.id == id).map(&f))
}

#[component]
fn VideoGrid(
    state: RwSignal<HomeState>,
    on_open: Callback<Video>,
    on_like: Callback<String>,
    on_share: Callback<Video>,
) -> impl IntoView {
    let ids = move || state.with(|s| s.videos.iter().map(|v| v.id.clone()).collect::<Vec<_>>());

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="hero bg-gradient-to-r from-purple-600 to-blue-600 text-white py-16">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-5xl font-bold">"Welcome to Click"</h1>
                    <p class="text-xl">
                        "The next generation video sharing platform with advanced content moderation"
                    </p>
                </div>
            </div>

            <div class="max-w-7xl mx-auto p-6">
                <h2 class="text-3xl font-bold mb-8 text-center">"Latest Videos"</h2>
                {move || {
                    state
                        .with(|s| s.empty_message())
                        .map(|msg| {
                            view! {
                                <div class="text-center py-20">
                                    <p class="text-base-content/60 text-lg">{msg}</p>
                                </div>
                            }
                        })
                }}
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=ids
                        key=|id| id.clone()
                        children=move |id: String| {
                            let Some(video) = state
                                .with_untracked(|s| s.videos.iter().find(|v| v.id == id).cloned())
                            else {
                                return ().into_any();
                            };
                            let likes = {
                                let id = id.clone();
                                move || video_field(state, &id, |v| v.likes).unwrap_or(0)
                            };
                            let liked = {
                                let id = id.clone();
                                move || state.with(|s| s.is_liked(&id))
                            };
                            let liked_icon = liked.clone();
                            let open = {
                                let video = video.clone();
                                move |_| {
                                    if let Some(current) = state
                                        .with_untracked(|s| s.videos.iter().find(|v| v.id == video.id).cloned())
                                    {
                                        on_open.run(current);
                                    }
                                }
                            };
                            let share = {
                                let video = video.clone();
                                move |_| on_share.run(video.clone())
                            };
                            let like_id = id.clone();
                            view! {
                                <div class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow">
                                    <figure class="aspect-video bg-black cursor-pointer" on:click=open>
                                        <video class="w-full h-full object-cover" src=video.media_src() muted=true>
                                            "Your browser does not support video playback."
                                        </video>
                                    </figure>
                                    <div class="card-body p-4">
                                        <h3 class="card-title text-lg line-clamp-2">{video.title.clone()}</h3>
                                        <p class="text-sm text-base-content/70 line-clamp-2">
                                            {video.description.clone()}
                                        </p>
                                        <div class="flex justify-between text-sm text-base-content/60">
                                            <span>"By " {video.username.clone()}</span>
                                            <span>{video.views} " views"</span>
                                        </div>
                                        <div class="card-actions justify-between border-t pt-3">
                                            <button
                                                class=move || {
                                                    if liked() { "btn btn-sm btn-error btn-outline" } else { "btn btn-sm" }
                                                }
                                                on:click=move |_| on_like.run(like_id.clone())
                                            >
                                                {move || if liked_icon() { "❤️" } else { "🤍" }}
                                                {likes}
                                            </button>
                                            <button class="btn btn-sm btn-info btn-outline" on:click=share>
                                                "📤 Share"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                            .into_any()
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn VideoDetail(
    auth: AuthContext,
    state: RwSignal<HomeState>,
    id: String,
    draft: RwSignal<String>,
    on_like: Callback<String>,
    on_share: Callback<Video>,
    on_post: Callback<()>,
) -> impl IntoView {
    // 播放器只在打开时创建一次，点赞或评论不会重置播放进度
    let Some(video) = state.with_untracked(|s| s.selected.clone()) else {
        return ().into_any();
    };

    let likes = move || state.with(|s| s.selected.as_ref().map(|v| v.likes).unwrap_or(0));
    let liked = {
        let id = id.clone();
        move || state.with(|s| s.is_liked(&id))
    };
    let liked_icon = liked.clone();
    let comment_count = move || state.with(|s| s.comments.len());
    let share = {
        let video = video.clone();
        move |_| on_share.run(video.clone())
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4">
            <div class="max-w-4xl mx-auto">
                <button class="btn btn-primary mb-4" on:click=move |_| state.update(|s| s.close())>
                    "← Back to Videos"
                </button>
                <div class="card bg-base-100 shadow-md overflow-hidden">
                    <figure class="aspect-video bg-black">
                        <video controls=true class="w-full h-full" src=video.media_src()>
                            "Your browser does not support video playback."
                        </video>
                    </figure>
                    <div class="card-body">
                        <h2 class="card-title text-2xl">{video.title.clone()}</h2>
                        <p class="text-base-content/70">{video.description.clone()}</p>
                        <div class="flex items-center justify-between">
                            <div class="text-sm text-base-content/60">
                                "By " {video.username.clone()} " • " {video.views} " views • "
                                {video.created_at.short_date()}
                            </div>
                            <div class="flex gap-4">
                                <button
                                    class=move || if liked() { "btn btn-error" } else { "btn" }
                                    on:click=move |_| on_like.run(id.clone())
                                >
                                    {move || if liked_icon() { "❤️" } else { "🤍" }}
                                    {likes}
                                </button>
                                <button class="btn btn-info" on:click=share>
                                    "📤 Share"
                                </button>
                            </div>
                        </div>

                        <div class="divider"></div>
                        <h3 class="text-lg font-semibold">"Comments (" {comment_count} ")"</h3>
                        <Show when=move || auth.is_user()>
                            <div class="flex gap-3 mb-4">
                                <textarea
                                    class="textarea textarea-bordered flex-1 resize-none"
                                    rows="3"
                                    placeholder="Add a comment..."
                                    prop:value=move || draft.get()
                                    on:input=move |ev| draft.set(event_target_value(&ev))
                                ></textarea>
                                <button class="btn btn-primary" on:click=move |_| on_post.run(())>
                                    "Post"
                                </button>
                            </div>
                        </Show>
                        <div class="space-y-4">
                            {move || {
                                state
                                    .with(|s| s.comments.clone())
                                    .into_iter()
                                    .map(|comment| {
                                        view! {
                                            <div class="bg-base-200 p-4 rounded-lg">
                                                <div class="flex justify-between mb-2">
                                                    <span class="font-medium text-primary">{comment.username}</span>
                                                    <span class="text-sm text-base-content/60">
                                                        {comment.created_at.short_date()}
                                                    </span>
                                                </div>
                                                <p>{comment.content}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                            <Show when=move || comment_count() == 0>
                                <p class="text-base-content/60 text-center py-8">{NO_COMMENTS}</p>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
    .into_any()
}
