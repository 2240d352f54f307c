//! 认证模块
//!
//! 把核心库的 [`AuthGateway`] 包装成可在组件间复制传递的上下文。
//! 会话快照放在信号里驱动界面更新，网关和 API 客户端放在本地存储的
//! `StoredValue` 中（它们持有 `Rc`，不是 `Send`）。

use crate::web::{BrowserStorage, FetchClient};
use click::{AuthGateway, AuthGrant, ClickApi, ClickResult, ClientConfig, Session};
use click_shared::UserProfile;
use leptos::prelude::*;

/// 认证上下文
///
/// 实现了 `Copy`，作为 Props 显式传给每个页面组件。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    gateway: StoredValue<AuthGateway<BrowserStorage>, LocalStorage>,
    api: StoredValue<ClickApi<FetchClient>, LocalStorage>,
}

impl AuthContext {
    /// 从 LocalStorage 恢复会话，令牌无效时会被清除
    pub fn init(config: ClientConfig) -> Self {
        let (api, gateway) = click::connect(config, FetchClient, BrowserStorage);
        let session = RwSignal::new(gateway.session().clone());
        Self {
            session,
            gateway: StoredValue::new_local(gateway),
            api: StoredValue::new_local(api),
        }
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.session.with(|s| s.profile().cloned())
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(|s| s.is_admin())
    }

    /// 普通用户（有资料）才能点赞、评论和上传
    pub fn is_user(&self) -> bool {
        self.session.with(|s| s.is_user())
    }

    /// 异步任务中读取，不建立响应式依赖
    pub fn is_user_untracked(&self) -> bool {
        self.session.with_untracked(|s| s.is_user())
    }

    pub fn api(&self) -> ClickApi<FetchClient> {
        self.api.get_value()
    }

    /// 安装登录接口返回的凭据
    pub fn accept(&self, grant: AuthGrant) -> ClickResult<()> {
        let mut outcome = None;
        self.gateway
            .update_value(|gateway| outcome = Some(gateway.accept(grant).cloned()));

        match outcome {
            Some(Ok(session)) => {
                self.session.set(session);
                Ok(())
            }
            Some(Err(e)) => {
                self.session.set(Session::anonymous());
                Err(e)
            }
            None => Err(click::ClickError::Network("session store disposed".into())),
        }
    }

    /// 注销：立即停止在请求中附带令牌
    pub fn logout(&self) {
        self.gateway.update_value(|gateway| gateway.logout());
        self.session.set(Session::anonymous());
    }
}
