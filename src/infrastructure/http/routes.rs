//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping               GET   健康检查
//! - /api/text/analyze       POST  分句、统计、Bionic 拆分
//! - /api/text/simplify      POST  调用语言模型简化文本
//! - /api/playback/load      POST  载入朗读文本
//! - /api/playback/start     POST  开始朗读
//! - /api/playback/pause     POST  暂停
//! - /api/playback/resume    POST  继续
//! - /api/playback/stop      POST  停止
//! - /api/playback/rate      POST  调整语速
//! - /api/playback/state     GET   当前播放视图
//! - /ws/playback            WS    朗读指令下发与结果回报

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::error::ApiError;
use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws/playback", get(handlers::playback_websocket_handler))
        .fallback(not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/text", text_routes())
        .nest("/playback", playback_routes())
}

/// Text 路由
fn text_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(handlers::analyze_text))
        .route("/simplify", post(handlers::simplify_text))
}

/// Playback 路由
fn playback_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/load", post(handlers::load_text))
        .route("/start", post(handlers::start_playback))
        .route("/pause", post(handlers::pause_playback))
        .route("/resume", post(handlers::resume_playback))
        .route("/stop", post(handlers::stop_playback))
        .route("/rate", post(handlers::set_rate))
        .route("/state", get(handlers::playback_state))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
