//! 读取用户选择的本地文件

use click::request::FileBlob;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// 读取文件内容，保留文件名和 MIME 类型
pub async fn read_file(file: web_sys::File) -> Result<FileBlob, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileBlob {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}
