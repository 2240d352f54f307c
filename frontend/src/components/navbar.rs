use crate::auth::AuthContext;
use click::{Page, ViewRouter};
use leptos::prelude::*;

/// 公共区域的导航栏
#[component]
pub fn Navbar(auth: AuthContext, router: RwSignal<ViewRouter>) -> impl IntoView {
    let current = move || router.get().current(auth.is_admin());
    let go = move |page: Page| {
        router.update(|r| {
            r.navigate(page);
        });
    };

    let nav_items = move || ViewRouter::nav_items(auth.is_user(), auth.is_admin());

    let account = move || {
        if auth.session().is_authenticated() {
            let greeting = auth.profile().map(|p| format!("Welcome, {}!", p.username));
            view! {
                <div class="flex items-center gap-4">
                    {greeting.map(|g| view! { <span class="text-sm">{g}</span> })}
                    <Show when=move || auth.is_admin()>
                        <span class="badge badge-error">"Admin Panel"</span>
                    </Show>
                    <button class="btn btn-error btn-sm" on:click=move |_| auth.logout()>
                        "Logout"
                    </button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="flex gap-2">
                    <button
                        class="btn btn-sm bg-white text-purple-600 border-none"
                        on:click=move |_| go(Page::Login)
                    >
                        "Login"
                    </button>
                    <button class="btn btn-sm btn-outline text-white" on:click=move |_| go(Page::Register)>
                        "Register"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <nav class="navbar bg-gradient-to-r from-purple-600 to-blue-600 text-white shadow-lg px-4">
            <div class="flex-1 gap-4">
                <a class="text-2xl font-bold cursor-pointer" on:click=move |_| go(Page::Home)>
                    "🎬 Click"
                </a>
                <For
                    each=nav_items
                    key=|page| *page
                    children=move |page: Page| {
                        view! {
                            <button
                                class=move || {
                                    if current() == page {
                                        "btn btn-sm bg-white text-purple-600 border-none"
                                    } else {
                                        "btn btn-sm btn-ghost"
                                    }
                                }
                                on:click=move |_| go(page)
                            >
                                {page.title()}
                            </button>
                        }
                    }
                />
            </div>
            <div class="flex-none">{account}</div>
        </nav>
    }
}
