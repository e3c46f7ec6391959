//! HTTP Simplifier Client - 调用外部语言模型 HTTP 服务
//!
//! 实现 SimplifierPort trait，支持两种服务：
//!
//! Groq (OpenAI 兼容):
//! POST https://api.groq.com/openai/v1/chat/completions
//! Request: {"model": "...", "messages": [{"role": "user", "content": "..."}]}
//! Response: {"choices": [{"message": {"content": "..."}}]}
//!
//! Gemini:
//! POST https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent?key=...
//! Request: {"contents": [{"parts": [{"text": "..."}]}]}
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{SimplifierError, SimplifierPort, SimplifyRequest};

/// 服务未返回任何内容时的占位文本
pub const EMPTY_RESPONSE_TEXT: &str = "No response generated.";

/// 语言模型服务提供方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplifierProvider {
    Groq,
    Gemini,
}

impl SimplifierProvider {
    /// 从配置名解析（大小写不敏感）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "groq" => Some(Self::Groq),
            "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Groq => "Groq",
            Self::Gemini => "Gemini",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Groq => "llama-3.3-70b-versatile",
            Self::Gemini => "gemini-1.5-flash",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com",
            Self::Gemini => "https://generativelanguage.googleapis.com",
        }
    }
}

/// HTTP Simplifier 客户端配置
#[derive(Debug, Clone)]
pub struct HttpSimplifierClientConfig {
    pub provider: SimplifierProvider,
    /// 服务基础 URL
    pub base_url: String,
    /// 模型名称
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpSimplifierClientConfig {
    fn default() -> Self {
        Self::new(SimplifierProvider::Gemini)
    }
}

impl HttpSimplifierClientConfig {
    pub fn new(provider: SimplifierProvider) -> Self {
        Self {
            provider,
            base_url: provider.default_base_url().to_string(),
            model: provider.default_model().to_string(),
            timeout_secs: 60,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

/// 错误响应体中的 message（两种服务格式相同）
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP Simplifier 客户端
pub struct HttpSimplifierClient {
    client: Client,
    config: HttpSimplifierClientConfig,
}

impl HttpSimplifierClient {
    pub fn new(config: HttpSimplifierClientConfig) -> Result<Self, SimplifierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SimplifierError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint_url(&self) -> String {
        match self.config.provider {
            SimplifierProvider::Groq => {
                format!("{}/openai/v1/chat/completions", self.config.base_url)
            }
            SimplifierProvider::Gemini => format!(
                "{}/v1beta/models/{}:generateContent",
                self.config.base_url, self.config.model
            ),
        }
    }

    fn build_request(&self, request: &SimplifyRequest) -> reqwest::RequestBuilder {
        let url = self.endpoint_url();
        match self.config.provider {
            SimplifierProvider::Groq => self
                .client
                .post(url)
                .bearer_auth(&request.api_key)
                .json(&ChatCompletionRequest {
                    model: &self.config.model,
                    messages: vec![ChatMessage {
                        role: "user",
                        content: &request.prompt,
                    }],
                }),
            SimplifierProvider::Gemini => self
                .client
                .post(url)
                .query(&[("key", request.api_key.as_str())])
                .json(&GenerateContentRequest {
                    contents: vec![GeminiContent {
                        parts: vec![GeminiPart {
                            text: &request.prompt,
                        }],
                    }],
                }),
        }
    }
}

/// 把非 2xx 状态码映射为领域错误
fn map_status_error(status: StatusCode, body: &str, model: &str) -> SimplifierError {
    match status.as_u16() {
        401 | 403 => SimplifierError::InvalidApiKey,
        404 => SimplifierError::ModelNotFound(model.to_string()),
        429 => SimplifierError::RateLimited,
        _ => {
            let message = serde_json::from_str::<ErrorEnvelope>(body)
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            SimplifierError::ServiceError(format!("HTTP {}: {}", status.as_u16(), message))
        }
    }
}

/// 从成功响应体中提取文本
fn extract_text(provider: SimplifierProvider, body: &str) -> Result<String, SimplifierError> {
    let text = match provider {
        SimplifierProvider::Groq => {
            let response: ChatCompletionResponse = serde_json::from_str(body)
                .map_err(|e| SimplifierError::InvalidResponse(e.to_string()))?;
            response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message)
                .and_then(|message| message.content)
        }
        SimplifierProvider::Gemini => {
            let response: GenerateContentResponse = serde_json::from_str(body)
                .map_err(|e| SimplifierError::InvalidResponse(e.to_string()))?;
            response
                .candidates
                .into_iter()
                .next()
                .and_then(|candidate| candidate.content)
                .map(|content| {
                    content
                        .parts
                        .into_iter()
                        .filter_map(|part| part.text)
                        .collect::<String>()
                })
        }
    };

    Ok(text
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| EMPTY_RESPONSE_TEXT.to_string()))
}

#[async_trait]
impl SimplifierPort for HttpSimplifierClient {
    async fn simplify(&self, request: SimplifyRequest) -> Result<String, SimplifierError> {
        tracing::debug!(
            provider = self.provider_name(),
            model = %self.config.model,
            prompt_len = request.prompt.len(),
            "Sending simplify request"
        );

        let response = self.build_request(&request).send().await.map_err(|e| {
            if e.is_timeout() {
                SimplifierError::Timeout
            } else if e.is_connect() {
                SimplifierError::NetworkError(format!(
                    "Cannot connect to {}: {}",
                    self.provider_name(),
                    e
                ))
            } else {
                SimplifierError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SimplifierError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(
                provider = self.provider_name(),
                status = status.as_u16(),
                "Simplify request rejected"
            );
            return Err(map_status_error(status, &body, &self.config.model));
        }

        let text = extract_text(self.config.provider, &body)?;

        tracing::info!(
            provider = self.provider_name(),
            model = %self.config.model,
            output_len = text.len(),
            "Simplify request completed"
        );

        Ok(text)
    }

    fn provider_name(&self) -> &str {
        self.config.provider.display_name()
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.config.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => !response.status().is_server_error(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_per_provider() {
        let groq = HttpSimplifierClientConfig::new(SimplifierProvider::Groq);
        assert_eq!(groq.base_url, "https://api.groq.com");
        assert_eq!(groq.model, "llama-3.3-70b-versatile");

        let gemini = HttpSimplifierClientConfig::default();
        assert_eq!(gemini.provider, SimplifierProvider::Gemini);
        assert_eq!(gemini.model, "gemini-1.5-flash");
        assert_eq!(gemini.timeout_secs, 60);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpSimplifierClientConfig::new(SimplifierProvider::Groq)
            .with_base_url("http://localhost:9000/")
            .with_model("llama-3.1-8b-instant")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_provider_from_name() {
        assert_eq!(SimplifierProvider::from_name("GROQ"), Some(SimplifierProvider::Groq));
        assert_eq!(SimplifierProvider::from_name(" gemini "), Some(SimplifierProvider::Gemini));
        assert_eq!(SimplifierProvider::from_name("openai"), None);
    }

    #[test]
    fn test_endpoint_urls() {
        let groq = HttpSimplifierClient::new(HttpSimplifierClientConfig::new(SimplifierProvider::Groq))
            .unwrap();
        assert_eq!(
            groq.endpoint_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );

        let gemini = HttpSimplifierClient::new(HttpSimplifierClientConfig::default()).unwrap();
        assert_eq!(
            gemini.endpoint_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(gemini.provider_name(), "Gemini");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            map_status_error(StatusCode::UNAUTHORIZED, "", "m"),
            SimplifierError::InvalidApiKey
        ));
        assert!(matches!(
            map_status_error(StatusCode::FORBIDDEN, "", "m"),
            SimplifierError::InvalidApiKey
        ));
        assert!(matches!(
            map_status_error(StatusCode::NOT_FOUND, "", "m"),
            SimplifierError::ModelNotFound(model) if model == "m"
        ));
        assert!(matches!(
            map_status_error(StatusCode::TOO_MANY_REQUESTS, "", "m"),
            SimplifierError::RateLimited
        ));
    }

    #[test]
    fn test_service_error_uses_body_message() {
        let body = r#"{"error": {"message": "context length exceeded"}}"#;
        match map_status_error(StatusCode::BAD_REQUEST, body, "m") {
            SimplifierError::ServiceError(msg) => {
                assert_eq!(msg, "HTTP 400: context length exceeded")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match map_status_error(StatusCode::BAD_GATEWAY, "not json", "m") {
            SimplifierError::ServiceError(msg) => assert_eq!(msg, "HTTP 502: Bad Gateway"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_groq_text() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "Short text."}}]}"#;
        assert_eq!(
            extract_text(SimplifierProvider::Groq, body).unwrap(),
            "Short text."
        );
    }

    #[test]
    fn test_extract_gemini_text_joins_parts() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "One. "}, {"text": "Two."}]}}]}"#;
        assert_eq!(
            extract_text(SimplifierProvider::Gemini, body).unwrap(),
            "One. Two."
        );
    }

    #[test]
    fn test_empty_answer_falls_back() {
        assert_eq!(
            extract_text(SimplifierProvider::Groq, r#"{"choices": []}"#).unwrap(),
            EMPTY_RESPONSE_TEXT
        );
        assert_eq!(
            extract_text(SimplifierProvider::Gemini, r#"{"candidates": [{"content": {"parts": []}}]}"#)
                .unwrap(),
            EMPTY_RESPONSE_TEXT
        );
    }

    #[test]
    fn test_malformed_body_is_invalid_response() {
        assert!(matches!(
            extract_text(SimplifierProvider::Groq, "<html>"),
            Err(SimplifierError::InvalidResponse(_))
        ));
    }
}
