//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechService、TickScheduler、Simplifier）
//! - playback: 逐句朗读状态机
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod playback;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Playback commands
    PlaybackCommand,
    PlaybackOutcome,
    PlaybackView,
    SpeechEvent,
    TickEvent,
    // Simplify commands
    SimplifyTextCommand,
    SimplifyTextResponse,
    // Handlers
    handlers::{PlaybackHandler, SimplifyTextHandler},
};

pub use error::ApplicationError;

pub use playback::{PlaybackController, PlaybackError, PlaybackNotice};

pub use ports::{
    // Simplifier
    SimplifierError,
    SimplifierPort,
    SimplifyRequest,
    // Speech service
    SpeechError,
    SpeechServicePort,
    // Tick scheduler
    TickSchedulerPort,
};

pub use queries::{
    AnalyzeText,
    handlers::{AnalyzeTextHandler, TextAnalysis},
};
