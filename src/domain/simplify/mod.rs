//! Simplify Context - 文本简化指令
//!
//! 职责:
//! - 难度档位与简化模式
//! - 构造发送给语言模型的提示词

mod prompt;
mod value_objects;

pub use prompt::build_prompt;
pub use value_objects::{Difficulty, SimplificationMode};
