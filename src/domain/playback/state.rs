//! Playback Context - 播放状态

use serde::Serialize;

use super::value_objects::SpeechRate;

/// 播放阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Playing,
    Paused,
}

impl PlaybackPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackPhase::Idle => "idle",
            PlaybackPhase::Playing => "playing",
            PlaybackPhase::Paused => "paused",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, PlaybackPhase::Idle)
    }
}

/// 播放状态快照
///
/// `current_sentence_index` 仅在 Idle 时为 None，否则总是句子序列中的有效下标。
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlaybackState {
    pub phase: PlaybackPhase,
    pub current_sentence_index: Option<usize>,
    pub elapsed_seconds: u64,
    pub speech_rate: SpeechRate,
}

impl PlaybackState {
    pub fn new(speech_rate: SpeechRate) -> Self {
        Self {
            speech_rate,
            ..Default::default()
        }
    }

    /// 回到 Idle，清零计时（保留语速）
    pub fn reset(&mut self) {
        self.phase = PlaybackPhase::Idle;
        self.current_sentence_index = None;
        self.elapsed_seconds = 0;
    }
}
