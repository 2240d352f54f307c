//! 浏览器阻塞弹窗

/// 显示提示框，浏览器环境不可用时只记录日志
pub fn alert(message: &str) {
    let shown = web_sys::window()
        .and_then(|w| w.alert_with_message(message).ok())
        .is_some();
    if !shown {
        tracing::warn!("Alert not shown: {}", message);
    }
}

/// 确认框，无法弹出时按取消处理
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// 输入框，取消时返回 `None`
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok()?
}
