//! Worker Layer - 播放 Actor 与计时器
//!
//! PlaybackWorker 独占播放状态机，TokioTickScheduler 为其提供会话计时

mod playback_worker;
mod tick_scheduler;

pub use playback_worker::{PlaybackMessage, PlaybackWorker, PlaybackWorkerConfig, PlaybackWorkerHandle};
pub use tick_scheduler::TokioTickScheduler;
