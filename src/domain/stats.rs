//! 文本统计汇总
//!
//! 词数、句数、预计阅读时长和可读性，以及简化前后的年级差值

use serde::Serialize;

use crate::domain::readability::{self, round_one_decimal, ReadabilityResult};
use crate::domain::text_segmenter::{count_sentences, count_words};

/// 默认阅读速度（词/分钟）
pub const WORDS_PER_MINUTE: usize = 150;

/// 文本统计快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub word_count: usize,
    pub sentence_count: usize,
    pub estimated_minutes: usize,
    pub readability: ReadabilityResult,
    /// 对照文本年级分数 - 当前文本年级分数（正数表示当前文本更易读）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_delta: Option<f64>,
}

impl StatsSnapshot {
    /// 是否应展示“年级下降”提示
    pub fn shows_improvement(&self) -> bool {
        self.improvement_delta.is_some_and(|d| d > 0.0)
    }
}

/// 汇总文本统计信息
///
/// `is_input` 为 true 表示当前文本就是原文一侧，此时不计算差值。
pub fn summarize(text: &str, is_input: bool, comparison: Option<&str>) -> StatsSnapshot {
    let word_count = count_words(text);
    let sentence_count = count_sentences(text);
    let readability = readability::score(text);

    let improvement_delta = match comparison {
        Some(original) if !is_input => {
            let before = readability::score(original);
            Some(improvement_delta(before.score, readability.score))
        }
        _ => None,
    };

    StatsSnapshot {
        word_count,
        sentence_count,
        estimated_minutes: estimated_minutes(word_count),
        readability,
        improvement_delta,
    }
}

/// 年级差值：原文分数 - 简化后分数，保留一位小数
pub fn improvement_delta(original_score: f64, simplified_score: f64) -> f64 {
    round_one_decimal(original_score - simplified_score)
}

/// 预计阅读分钟数（向上取整）
pub fn estimated_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}
