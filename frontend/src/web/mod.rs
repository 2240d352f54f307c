//! 原生 Web API 封装模块
//!
//! 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
//! 以减小 WASM 二进制体积。

pub mod console;
pub mod dialog;
pub mod file;
mod http;
pub mod location;
mod share;
mod storage;

pub use http::FetchClient;
pub use share::BrowserShare;
pub use storage::BrowserStorage;
