//! Event Publisher Implementation
//!
//! WebSocket 事件推送实现：朗读指令与播放状态都通过同一个广播通道发送给浏览器

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::application::{PlaybackNotice, PlaybackView};
use crate::domain::playback::UtteranceHandle;

/// 默认广播缓冲大小
pub const DEFAULT_EVENT_BUFFER: usize = 100;

/// WebSocket 事件类型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum WsEvent {
    /// 请求客户端朗读一句话
    Speak {
        handle: UtteranceHandle,
        text: String,
        rate: f64,
    },
    /// 暂停当前朗读
    PauseSpeech,
    /// 继续当前朗读
    ResumeSpeech,
    /// 取消所有排队和进行中的朗读
    CancelSpeech,
    /// 播放状态变更
    StateChanged(PlaybackView),
    /// 会话因语音错误中止
    PlaybackFailed(PlaybackNotice),
}

impl WsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Speak { .. } => "Speak",
            Self::PauseSpeech => "PauseSpeech",
            Self::ResumeSpeech => "ResumeSpeech",
            Self::CancelSpeech => "CancelSpeech",
            Self::StateChanged(_) => "StateChanged",
            Self::PlaybackFailed(_) => "PlaybackFailed",
        }
    }
}

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<WsEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_BUFFER)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { channel: tx }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅事件流
    pub fn subscribe(&self) -> broadcast::Receiver<WsEvent> {
        self.channel.subscribe()
    }

    /// 当前连接的订阅者数量
    pub fn receiver_count(&self) -> usize {
        self.channel.receiver_count()
    }

    /// 发布朗读请求
    pub fn publish_speak(&self, handle: UtteranceHandle, text: &str, rate: f64) {
        self.publish(WsEvent::Speak {
            handle,
            text: text.to_string(),
            rate,
        });
    }

    /// 发布播放状态
    pub fn publish_state(&self, view: PlaybackView) {
        self.publish(WsEvent::StateChanged(view));
    }

    /// 发布会话中止通知
    pub fn publish_failure(&self, notice: PlaybackNotice) {
        self.publish(WsEvent::PlaybackFailed(notice));
    }

    pub fn publish(&self, event: WsEvent) {
        let name = event.name();
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(
                event = name,
                error = %e,
                "Failed to publish event (no receivers)"
            );
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}
