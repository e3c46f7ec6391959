//! 朗读洞察 - 会话时长、语速换算与难度标签

use serde::Serialize;

use crate::domain::stats::WORDS_PER_MINUTE;

/// 未指定难度时展示的标签
pub const DEFAULT_DIFFICULTY_LABEL: &str = "Medium";

/// 朗读洞察视图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingInsights {
    /// 会话时长，格式 "{m}m {s}s"
    pub session_time: String,
    pub words_per_minute: u32,
    pub difficulty: String,
}

impl ReadingInsights {
    pub fn new(elapsed_seconds: u64, speech_rate: f64, difficulty: Option<&str>) -> Self {
        Self {
            session_time: format_session_time(elapsed_seconds),
            words_per_minute: words_per_minute(speech_rate),
            difficulty: difficulty
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(DEFAULT_DIFFICULTY_LABEL)
                .to_string(),
        }
    }
}

/// 格式化会话时长
pub fn format_session_time(seconds: u64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// 语速倍率对应的每分钟词数
pub fn words_per_minute(speech_rate: f64) -> u32 {
    (WORDS_PER_MINUTE as f64 * speech_rate).round() as u32
}
