//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语言模型服务配置
    #[serde(default)]
    pub simplifier: SimplifierConfig,

    /// 朗读配置
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 语言模型服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SimplifierConfig {
    /// 服务提供方: groq | gemini
    #[serde(default = "default_provider")]
    pub provider: String,

    /// 默认 API key，可被请求中的 key 覆盖
    #[serde(default)]
    pub api_key: Option<String>,

    /// 模型名称，未设置时使用提供方默认模型
    #[serde(default)]
    pub model: Option<String>,

    /// 服务基础 URL，未设置时使用提供方官方地址
    #[serde(default)]
    pub base_url: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_simplifier_timeout")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_simplifier_timeout() -> u64 {
    60
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_simplifier_timeout(),
        }
    }
}

/// 朗读配置
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackConfig {
    /// 初始语速倍率
    #[serde(default = "default_rate")]
    pub default_rate: f64,

    /// WebSocket 事件广播缓冲
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

fn default_rate() -> f64 {
    1.0
}

fn default_event_buffer() -> usize {
    100
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_rate: default_rate(),
            event_buffer: default_event_buffer(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
