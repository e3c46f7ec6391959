//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod playback_handlers;
mod simplify_handlers;

pub use playback_handlers::*;
pub use simplify_handlers::*;
