//! 播放错误与通知

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::playback::SessionId;

/// 一次播放会话被中止时给调用方的非致命通知
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackNotice {
    pub session_id: SessionId,
    pub sentence_index: usize,
    pub cause: String,
    pub occurred_at: DateTime<Utc>,
}

/// 播放错误
///
/// 控制器在返回错误前已经把状态恢复为 Idle，调用方只需决定是否提示用户。
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaybackError {
    #[error("Nothing to play: the text contains no sentences")]
    NothingToPlay,

    #[error("Playback aborted at sentence {}: {}", .0.sentence_index, .0.cause)]
    Aborted(PlaybackNotice),
}
