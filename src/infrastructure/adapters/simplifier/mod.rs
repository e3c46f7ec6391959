//! Simplifier Adapter - 语言模型 HTTP 客户端实现

mod http_simplifier_client;

pub use http_simplifier_client::*;
