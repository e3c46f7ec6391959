//! Playback Context - 朗读播放限界上下文
//!
//! 职责:
//! - 播放阶段与状态快照
//! - 语速、会话、朗读句柄等值对象

mod state;
mod value_objects;

pub use state::{PlaybackPhase, PlaybackState};
pub use value_objects::{SessionId, SpeechRate, TickHandle, UtteranceHandle};
