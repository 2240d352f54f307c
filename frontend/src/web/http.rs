//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`]。

use click::error::{ClickError, ClickResult};
use click::request::{FormPart, FormValue, HttpClient, HttpRequest, HttpResponse, RequestBody};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// 把 multipart 字段转换为浏览器的 FormData，boundary 由浏览器生成
fn build_form(parts: &[FormPart]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for part in parts {
        match &part.value {
            FormValue::Text(text) => form.append_with_str(&part.name, text)?,
            FormValue::File(file) => {
                let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                let chunks = js_sys::Array::of1(&bytes);
                let options = BlobPropertyBag::new();
                options.set_type(&file.content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &options)?;
                form.append_with_blob_and_filename(&part.name, &blob, &file.file_name)?;
            }
        }
    }
    Ok(form)
}

/// 基于 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ClickResult<HttpResponse> {
        let headers = Headers::new()
            .map_err(|e| ClickError::Network(format!("创建 Headers 失败: {}", js_error(e))))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ClickError::Network(format!("设置 Header 失败: {}", js_error(e))))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        match &req.body {
            Some(RequestBody::Json(body)) => opts.set_body(&JsValue::from_str(body)),
            Some(RequestBody::Multipart(parts)) => {
                let form = build_form(parts)
                    .map_err(|e| ClickError::Network(format!("构建表单失败: {}", js_error(e))))?;
                opts.set_body(&form);
            }
            None => {}
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ClickError::Network(js_error(e)))?;

        let window = web_sys::window()
            .ok_or_else(|| ClickError::Network("无法获取 window 对象".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClickError::Network(js_error(e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ClickError::Decode(format!("Response 类型转换失败: {}", js_error(e))))?;

        let promise = response
            .text()
            .map_err(|e| ClickError::Decode(js_error(e)))?;
        let body = JsFuture::from(promise)
            .await
            .map_err(|e| ClickError::Decode(js_error(e)))?
            .as_string()
            .ok_or_else(|| ClickError::Decode("无法转换为字符串".to_string()))?;

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
