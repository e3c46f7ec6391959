//! 应用层 - 朗读播放
//!
//! PlaybackController 通过 SpeechServicePort / TickSchedulerPort 驱动外部语音服务

mod controller;
mod error;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::PlaybackController;
pub use error::{PlaybackError, PlaybackNotice};
