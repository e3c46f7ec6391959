//! EasyRead - 文本简化与逐句朗读服务
//!
//! - Domain: 分句、可读性、统计、Bionic、简化提示词、播放状态
//! - Application: commands, queries, ports, playback controller
//! - Infrastructure: http, worker, adapters, events

use std::sync::Arc;

use easyread::config::{load_config, print_config};
use easyread::application::SimplifierPort;
use easyread::domain::playback::SpeechRate;
use easyread::infrastructure::adapters::{
    HttpSimplifierClient, HttpSimplifierClientConfig, RemoteSpeechClient, SimplifierProvider,
};
use easyread::infrastructure::events::EventPublisher;
use easyread::infrastructure::http::{AppState, HttpServer, ServerConfig};
use easyread::infrastructure::worker::{PlaybackWorker, PlaybackWorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},easyread={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("EasyRead - text simplification and read-aloud service");
    print_config(&config);

    // 创建语言模型客户端
    let provider = SimplifierProvider::from_name(&config.simplifier.provider).ok_or_else(|| {
        anyhow::anyhow!("Unknown simplifier provider: {}", config.simplifier.provider)
    })?;
    let mut simplifier_config =
        HttpSimplifierClientConfig::new(provider).with_timeout(config.simplifier.timeout_secs);
    if let Some(model) = &config.simplifier.model {
        simplifier_config = simplifier_config.with_model(model.clone());
    }
    if let Some(base_url) = &config.simplifier.base_url {
        simplifier_config = simplifier_config.with_base_url(base_url.clone());
    }
    let simplifier = Arc::new(HttpSimplifierClient::new(simplifier_config)?);
    if !simplifier.health_check().await {
        tracing::warn!(
            provider = simplifier.provider_name(),
            "Simplifier service is not reachable, simplify requests may fail"
        );
    }

    // 创建事件发布器
    let event_publisher = EventPublisher::with_capacity(config.playback.event_buffer).arc();

    // 创建并启动 PlaybackWorker
    let worker_config = PlaybackWorkerConfig {
        default_rate: SpeechRate::new(config.playback.default_rate),
        ..Default::default()
    };
    let (worker, playback) = PlaybackWorker::new(
        worker_config,
        RemoteSpeechClient::new(event_publisher.clone()),
        event_publisher.clone(),
    );
    tokio::spawn(worker.run());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        simplifier,
        config.simplifier.api_key.clone(),
        playback,
        event_publisher,
    );
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
