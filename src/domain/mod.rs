//! Domain Layer - 领域层
//!
//! 纯函数文本分析与播放相关的领域类型:
//! - 分句、可读性评分、统计汇总、Bionic 渲染、朗读洞察
//! - Playback Context: 播放状态与值对象
//! - Simplify Context: 简化指令与提示词

pub mod bionic;
pub mod insights;
pub mod playback;
pub mod readability;
pub mod simplify;
pub mod stats;
pub mod text_segmenter;

pub use bionic::{emphasize, emphasize_text, EmphasizedWord};
pub use insights::ReadingInsights;
pub use readability::ReadabilityResult;
pub use stats::{summarize, StatsSnapshot};
pub use text_segmenter::segment_sentences;
