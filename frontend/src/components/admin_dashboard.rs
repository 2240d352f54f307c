//! 管理后台页面
//!
//! 三个标签页：统计、视频审核、用户管理。
//! 写操作完成后用接口重新拉取的列表替换本地数据。

use crate::auth::AuthContext;
use crate::web::dialog;
use click::views::Alert;
use click::views::admin::{self, AdminTab, DashboardState, Moderation, Refreshed};
use click_shared::{AdminUser, ModerationStatus, Video};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 弹出结果消息；`Ok(None)` 表示用户取消，不做任何事
fn report<T>(outcome: Result<Option<Refreshed<T>>, Alert>, apply: impl FnOnce(Vec<T>)) {
    match outcome {
        Ok(Some(refreshed)) => {
            apply(refreshed.items);
            dialog::alert(refreshed.message.message());
        }
        Ok(None) => {}
        Err(alert) => dialog::alert(alert.message()),
    }
}

#[component]
pub fn AdminDashboardPage(auth: AuthContext) -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    // 挂载时并发拉取三组数据
    spawn_local(async move {
        let loaded = admin::load_dashboard(&auth.api()).await;
        state.update(|s| {
            let tab = s.tab;
            *s = DashboardState { tab, ..loaded };
        });
    });

    let set_videos = move |videos: Vec<Video>| state.update(|s| s.videos = videos);
    let set_users = move |users: Vec<AdminUser>| state.update(|s| s.users = users);

    let approve = move |id: String| {
        spawn_local(async move {
            let outcome = admin::moderate_video(&auth.api(), &id, Moderation::Approve).await;
            report(outcome, set_videos);
        });
    };

    let reject = move |id: String| {
        // 取消输入框时不发请求
        let Some(reason) = dialog::prompt(admin::REJECTION_PROMPT) else {
            return;
        };
        spawn_local(async move {
            let outcome = admin::moderate_video(&auth.api(), &id, Moderation::Reject { reason }).await;
            report(outcome, set_videos);
        });
    };

    let delete = move |id: String| {
        spawn_local(async move {
            let outcome = admin::delete_video(&auth.api(), &id, dialog::confirm).await;
            report(outcome, set_videos);
        });
    };

    let ban = move |id: String| {
        let Some(reason) = dialog::prompt(admin::BAN_PROMPT) else {
            return;
        };
        spawn_local(async move {
            let outcome = admin::ban_user(&auth.api(), &id, &reason).await.map(Some);
            report(outcome, set_users);
        });
    };

    let unban = move |id: String| {
        spawn_local(async move {
            let outcome = admin::unban_user(&auth.api(), &id).await.map(Some);
            report(outcome, set_users);
        });
    };

    let tab = move || state.with(|s| s.tab);

    view! {
        <div class="min-h-screen bg-base-200">
            <nav class="navbar bg-gradient-to-r from-gray-900 to-gray-700 text-white shadow-lg px-4">
                <div class="flex-1">
                    <span class="text-2xl font-bold">"🛡️ Click Admin"</span>
                </div>
                <div class="flex-none">
                    <button class="btn btn-error btn-sm" on:click=move |_| auth.logout()>
                        "Logout"
                    </button>
                </div>
            </nav>

            <div class="max-w-7xl mx-auto p-6">
                <div role="tablist" class="tabs tabs-boxed mb-6 bg-base-100">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <a
                                    role="tab"
                                    class=move || if tab() == t { "tab tab-active" } else { "tab" }
                                    on:click=move |_| state.update(|s| s.tab = t)
                                >
                                    {t.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                {move || match tab() {
                    AdminTab::Stats => view! { <StatsPanel state=state /> }.into_any(),
                    AdminTab::Videos => view! {
                        <VideosPanel
                            state=state
                            on_approve=Callback::new(approve)
                            on_reject=Callback::new(reject)
                            on_delete=Callback::new(delete)
                        />
                    }
                    .into_any(),
                    AdminTab::Users => view! {
                        <UsersPanel
                            state=state
                            on_ban=Callback::new(ban)
                            on_unban=Callback::new(unban)
                        />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, value: Signal<u64>, #[prop(default = "")] tone: &'static str) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 rounded-box shadow">
            <div class="stat-title">{title}</div>
            <div class={format!("stat-value {tone}")}>{move || value.get()}</div>
        </div>
    }
}

#[component]
fn StatsPanel(state: RwSignal<DashboardState>) -> impl IntoView {
    let stat = move |f: fn(&DashboardState) -> u64| Signal::derive(move || state.with(f));

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <StatCard title="Total Users" value=stat(|s| s.stats.total_users) />
            <StatCard title="Banned Users" value=stat(|s| s.stats.banned_users) tone="text-error" />
            <StatCard title="Total Videos" value=stat(|s| s.stats.total_videos) />
            <StatCard title="Pending Videos" value=stat(|s| s.stats.pending_videos) tone="text-warning" />
            <StatCard title="Flagged Videos" value=stat(|s| s.stats.flagged_videos) tone="text-error" />
            <StatCard title="Total Comments" value=stat(|s| s.stats.total_comments) />
        </div>
    }
}

fn status_badge(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Pending => "badge badge-warning",
        ModerationStatus::Approved => "badge badge-success",
        ModerationStatus::Rejected => "badge badge-error",
    }
}

#[component]
fn VideosPanel(
    state: RwSignal<DashboardState>,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let rows = move || {
        state
            .with(|s| s.videos.clone())
            .into_iter()
            .map(|video| {
                let pending = video.can_moderate();
                let (approve_id, reject_id, delete_id) =
                    (video.id.clone(), video.id.clone(), video.id.clone());
                view! {
                    <tr>
                        <td>
                            <div class="font-bold">{video.title}</div>
                            <div class="text-sm opacity-60 line-clamp-1">{video.description}</div>
                        </td>
                        <td>{video.username}</td>
                        <td>
                            <span class={status_badge(video.moderation_status)}>
                                {video.moderation_status.as_str()}
                            </span>
                            {video.is_flagged.then(|| view! { <span class="badge badge-error ml-1">"Flagged"</span> })}
                            {video.rejection_reason.map(|r| view! { <div class="text-xs opacity-60">{r}</div> })}
                        </td>
                        <td>{video.created_at.short_date()}</td>
                        <td class="flex gap-2">
                            <Show when=move || pending>
                                <button
                                    class="btn btn-success btn-xs"
                                    on:click={
                                        let id = approve_id.clone();
                                        move |_| on_approve.run(id.clone())
                                    }
                                >
                                    "Approve"
                                </button>
                                <button
                                    class="btn btn-warning btn-xs"
                                    on:click={
                                        let id = reject_id.clone();
                                        move |_| on_reject.run(id.clone())
                                    }
                                >
                                    "Reject"
                                </button>
                            </Show>
                            <button class="btn btn-error btn-xs" on:click=move |_| on_delete.run(delete_id.clone())>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="card bg-base-100 shadow overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Video"</th>
                        <th>"Uploader"</th>
                        <th>"Status"</th>
                        <th>"Uploaded"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn UsersPanel(
    state: RwSignal<DashboardState>,
    on_ban: Callback<String>,
    on_unban: Callback<String>,
) -> impl IntoView {
    let rows = move || {
        state
            .with(|s| s.users.clone())
            .into_iter()
            .map(|user| {
                let id = user.id.clone();
                let banned = user.is_banned;
                let action = move |_| {
                    if banned {
                        on_unban.run(id.clone());
                    } else {
                        on_ban.run(id.clone());
                    }
                };
                view! {
                    <tr>
                        <td class="font-bold">{user.username.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td>
                            <span class={if banned { "badge badge-error" } else { "badge badge-success" }}>
                                {user.status_label()}
                            </span>
                            {user.ban_reason.clone().map(|r| view! { <div class="text-xs opacity-60">{r}</div> })}
                        </td>
                        <td>{user.created_at.short_date()}</td>
                        <td>
                            <button
                                class={if banned { "btn btn-success btn-xs" } else { "btn btn-error btn-xs" }}
                                on:click=action
                            >
                                {if banned { "Unban" } else { "Ban" }}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="card bg-base-100 shadow overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Status"</th>
                        <th>"Joined"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
