//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::playback::SpeechRate;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 支持的语言模型服务
const KNOWN_PROVIDERS: &[&str] = &["groq", "gemini"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `EASYREAD_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `EASYREAD_SERVER__PORT=8080`
/// - `EASYREAD_SIMPLIFIER__PROVIDER=groq`
/// - `EASYREAD_SIMPLIFIER__API_KEY=...`
/// - `EASYREAD_PLAYBACK__DEFAULT_RATE=1.25`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("simplifier.provider", "gemini")?
        .set_default("simplifier.timeout_secs", 60)?
        .set_default("playback.default_rate", 1.0)?
        .set_default("playback.event_buffer", 100)?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("EASYREAD")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let provider = config.simplifier.provider.trim().to_ascii_lowercase();
    if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown simplifier provider '{}', expected one of: {}",
            config.simplifier.provider,
            KNOWN_PROVIDERS.join(", ")
        )));
    }

    if config.simplifier.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Simplifier timeout cannot be 0".to_string(),
        ));
    }

    let rate = config.playback.default_rate;
    if !(SpeechRate::MIN..=SpeechRate::MAX).contains(&rate) {
        return Err(ConfigError::ValidationError(format!(
            "Default speech rate {} must be within [{}, {}]",
            rate,
            SpeechRate::MIN,
            SpeechRate::MAX
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Simplifier Provider: {}", config.simplifier.provider);
    tracing::info!(
        "Simplifier Model: {}",
        config.simplifier.model.as_deref().unwrap_or("(provider default)")
    );
    tracing::info!(
        "Simplifier API Key: {}",
        if config.simplifier.api_key.is_some() { "configured" } else { "per request" }
    );
    tracing::info!("Simplifier Timeout: {}s", config.simplifier.timeout_secs);
    tracing::info!("Default Speech Rate: {}", config.playback.default_rate);
    tracing::info!("Event Buffer: {}", config.playback.event_buffer);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unknown_provider() {
        let mut config = AppConfig::default();
        config.simplifier.provider = "openai".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("openai"));
    }

    #[test]
    fn test_provider_is_case_insensitive() {
        let mut config = AppConfig::default();
        config.simplifier.provider = "Groq".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_rate_out_of_range() {
        let mut config = AppConfig::default();
        config.playback.default_rate = 3.0;
        assert!(validate_config(&config).is_err());
        config.playback.default_rate = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
[server]
port = 7000

[simplifier]
provider = "groq"
api_key = "gsk-test"

[playback]
default_rate = 1.5
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.simplifier.provider, "groq");
        assert_eq!(config.simplifier.api_key.as_deref(), Some("gsk-test"));
        assert_eq!(config.simplifier.timeout_secs, 60);
        assert_eq!(config.playback.default_rate, 1.5);
        assert_eq!(config.playback.event_buffer, 100);
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let file = write_config("[playback]\ndefault_rate = 9.0\n");
        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(load_config_from_path(Some(&missing)).is_err());
    }
}
