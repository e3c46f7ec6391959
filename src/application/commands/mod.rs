//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：播放控制与文本简化

mod playback_commands;
mod simplify_commands;

pub mod handlers;

pub use playback_commands::*;
pub use simplify_commands::*;
