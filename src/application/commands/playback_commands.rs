//! Playback Commands - 朗读播放相关命令

use serde::Serialize;

use crate::application::playback::PlaybackNotice;
use crate::domain::playback::{PlaybackState, SessionId, TickHandle, UtteranceHandle};
use crate::domain::ReadingInsights;

/// 用户发起的播放命令
#[derive(Debug, Clone)]
pub enum PlaybackCommand {
    /// 替换朗读文本（简化后的输出），附带展示用难度标签
    LoadText {
        text: String,
        difficulty: Option<String>,
    },
    Start,
    Pause,
    Resume,
    Stop,
    SetRate {
        rate: f64,
    },
    /// 只读取当前状态
    Snapshot,
}

impl PlaybackCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackCommand::LoadText { .. } => "load_text",
            PlaybackCommand::Start => "start",
            PlaybackCommand::Pause => "pause",
            PlaybackCommand::Resume => "resume",
            PlaybackCommand::Stop => "stop",
            PlaybackCommand::SetRate { .. } => "set_rate",
            PlaybackCommand::Snapshot => "snapshot",
        }
    }
}

/// 语音服务回送的事件
#[derive(Debug, Clone)]
pub enum SpeechEvent {
    Completed {
        handle: UtteranceHandle,
    },
    Failed {
        handle: UtteranceHandle,
        cause: String,
    },
}

/// 计时器回送的事件
#[derive(Debug, Clone, Copy)]
pub struct TickEvent {
    pub handle: TickHandle,
}

/// 播放视图：渲染所需的全部状态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackView {
    pub state: PlaybackState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    pub sentences: Vec<String>,
    pub insights: ReadingInsights,
}

/// 命令执行结果
#[derive(Debug, Clone)]
pub struct PlaybackOutcome {
    pub view: PlaybackView,
    /// 本次命令导致会话中止时的通知
    pub notice: Option<PlaybackNotice>,
}
