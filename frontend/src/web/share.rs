//! 系统分享与剪贴板
//!
//! `navigator.share` 和 `navigator.clipboard` 不是所有浏览器都有，
//! 这里通过 `Reflect` 动态探测后调用。

use click::views::home::{ShareRequest, ShareTarget};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn navigator() -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("navigator")).ok()
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn share_data(request: &ShareRequest) -> Result<Object, JsValue> {
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &request.title.as_str().into())?;
    Reflect::set(&data, &"text".into(), &request.text.as_str().into())?;
    Reflect::set(&data, &"url".into(), &request.url.as_str().into())?;
    Ok(data)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserShare;

impl ShareTarget for BrowserShare {
    fn native_share(&self, request: &ShareRequest) -> bool {
        let Some(navigator) = navigator() else {
            return false;
        };
        let Some(share) = method(&navigator, "share") else {
            return false;
        };
        let called = share_data(request)
            .and_then(|data| share.apply(&navigator, &Array::of1(&data)));
        if let Err(e) = called {
            tracing::warn!("navigator.share failed: {:?}", e);
        }
        // 用户取消分享时 Promise 会 reject，这里不关心结果
        true
    }

    fn copy_link(&self, url: &str) {
        let clipboard = navigator().and_then(|n| Reflect::get(&n, &"clipboard".into()).ok());
        let write = clipboard
            .as_ref()
            .and_then(|c| method(c, "writeText").map(|f| (c, f)));
        match write {
            Some((clipboard, write_text)) => {
                if let Err(e) = write_text.call1(clipboard, &JsValue::from_str(url)) {
                    tracing::warn!("Clipboard write failed: {:?}", e);
                }
            }
            None => tracing::warn!("Clipboard is not available"),
        }
    }

    fn page_url(&self) -> String {
        super::location::href()
    }
}
