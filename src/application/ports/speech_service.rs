//! Speech Service Port - 语音朗读服务抽象
//!
//! 真正发声的服务（浏览器 speechSynthesis、本地 TTS 等）由 infrastructure 层适配。
//! 朗读完成/出错通过 `PlaybackController::on_utterance_complete` /
//! `on_utterance_error` 异步回送。

use thiserror::Error;

use crate::domain::playback::{SpeechRate, UtteranceHandle};

/// 语音服务错误
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpeechError {
    #[error("Speech service unavailable: {0}")]
    Unavailable(String),

    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),
}

/// Speech Service Port
///
/// 同一时刻只允许一个未完成的 utterance，调用方负责在重叠前先 `cancel_all`。
pub trait SpeechServicePort: Send {
    /// 提交一句话朗读，返回本次 utterance 的句柄
    fn speak(&mut self, text: &str, rate: SpeechRate) -> Result<UtteranceHandle, SpeechError>;

    /// 暂停当前 utterance
    fn pause(&mut self);

    /// 继续当前 utterance
    fn resume(&mut self);

    /// 取消当前及排队中的所有 utterance
    fn cancel_all(&mut self);
}
