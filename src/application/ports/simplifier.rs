//! Simplifier Port - 文本简化服务抽象
//!
//! 定义语言模型简化接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 简化服务错误
#[derive(Debug, Error)]
pub enum SimplifierError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid API key. Please check your key.")]
    InvalidApiKey,

    #[error("Model not found: {0}. Select a different model or provider.")]
    ModelNotFound(String),

    #[error("Rate limit exceeded. Please wait a moment.")]
    RateLimited,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 简化请求
#[derive(Debug, Clone)]
pub struct SimplifyRequest {
    /// 完整提示词（含原文）
    pub prompt: String,
    /// API key（由调用方提供，不落盘）
    pub api_key: String,
}

/// Simplifier Port
///
/// 外部语言模型服务的抽象接口
#[async_trait]
pub trait SimplifierPort: Send + Sync {
    /// 发送提示词，返回简化后的文本
    async fn simplify(&self, request: SimplifyRequest) -> Result<String, SimplifierError>;

    /// 服务名称（用于日志和错误提示）
    fn provider_name(&self) -> &str;

    /// 检查服务是否可达
    async fn health_check(&self) -> bool {
        true
    }
}
