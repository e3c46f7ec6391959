//! Application State
//!
//! 包含所有 Command/Query Handlers 以及播放 Worker 句柄

use std::sync::Arc;

use crate::application::{AnalyzeTextHandler, SimplifierPort, SimplifyTextHandler};
use crate::infrastructure::events::EventPublisher;
use crate::infrastructure::worker::PlaybackWorkerHandle;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub simplifier: Arc<dyn SimplifierPort>,
    pub event_publisher: Arc<EventPublisher>,

    // ========== Playback ==========
    pub playback: PlaybackWorkerHandle,

    // ========== Handlers ==========
    pub simplify_handler: SimplifyTextHandler,
    pub analyze_handler: AnalyzeTextHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        simplifier: Arc<dyn SimplifierPort>,
        default_api_key: Option<String>,
        playback: PlaybackWorkerHandle,
        event_publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            simplifier: simplifier.clone(),
            event_publisher,
            playback,
            simplify_handler: SimplifyTextHandler::new(simplifier, default_api_key),
            analyze_handler: AnalyzeTextHandler::new(),
        }
    }
}
