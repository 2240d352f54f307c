//! Click 前端应用
//!
//! 视图行为和接口调用都在核心库 `click` 中，这里只负责渲染：
//! - `web`: 浏览器 API 的轻量封装（fetch、LocalStorage、弹窗、分享）
//! - `auth`: 会话信号和认证网关
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod admin_dashboard;
    pub mod admin_login;
    mod forms;
    pub mod home;
    pub mod login;
    pub mod navbar;
    pub mod register;
    pub mod upload;
}

use crate::auth::AuthContext;
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::admin_login::AdminLoginPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::components::upload::UploadPage;

use click::router::Area;
use click::{ClientConfig, Page, ViewRouter};
use leptos::prelude::*;

pub mod web;

/// 页面匹配函数
///
/// 根据 Page 枚举返回对应的视图组件。
fn page_view(page: Page, auth: AuthContext, router: RwSignal<ViewRouter>) -> AnyView {
    match page {
        Page::Home => view! { <HomePage auth=auth /> }.into_any(),
        Page::Upload => view! { <UploadPage auth=auth /> }.into_any(),
        Page::Login => view! { <LoginPage auth=auth router=router /> }.into_any(),
        Page::Register => view! { <RegisterPage auth=auth router=router /> }.into_any(),
        Page::AdminLogin => view! { <AdminLoginPage auth=auth /> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboardPage auth=auth /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 恢复会话（无效令牌会被清除）
    let auth = AuthContext::init(ClientConfig::from_build_env());

    // 2. 区域由首次加载的路径决定
    let router = RwSignal::new(ViewRouter::from_path(&web::location::current_path()));

    // 3. 管理区域随管理员状态自动切换登录页和后台
    let page = Memo::new(move |_| router.get().current(auth.is_admin()));
    let public = move || router.with(|r| r.area() == Area::Public);

    view! {
        <Show when=public>
            <Navbar auth=auth router=router />
        </Show>
        {move || page_view(page.get(), auth, router)}
    }
}
