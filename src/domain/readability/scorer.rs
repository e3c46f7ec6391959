//! Flesch–Kincaid 年级水平评分

use serde::Serialize;

use super::syllables::count_syllables;
use crate::domain::text_segmenter::{count_sentences, count_words};

/// 年级分数下限
pub const MIN_GRADE: f64 = 0.0;
/// 年级分数上限
pub const MAX_GRADE: f64 = 18.0;

/// 空文本的年级标签
pub const NOT_APPLICABLE: &str = "N/A";

/// 可读性评分结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityResult {
    /// 年级分数，限制在 [0, 18]，保留一位小数
    pub score: f64,
    /// 年级标签
    pub grade: String,
}

impl ReadabilityResult {
    fn not_applicable() -> Self {
        Self {
            score: 0.0,
            grade: NOT_APPLICABLE.to_string(),
        }
    }
}

/// 计算文本的 Flesch–Kincaid 年级水平
///
/// 空文本或纯空白文本直接返回 `{0, "N/A"}`。
pub fn score(text: &str) -> ReadabilityResult {
    if text.trim().is_empty() {
        return ReadabilityResult::not_applicable();
    }

    let grade = raw_grade(text).clamp(MIN_GRADE, MAX_GRADE);

    ReadabilityResult {
        score: round_one_decimal(grade),
        grade: grade_label(grade),
    }
}

/// 未限幅的年级分数
fn raw_grade(text: &str) -> f64 {
    let sentences = count_sentences(text).max(1) as f64;
    let words = count_words(text).max(1) as f64;
    let syllables = text
        .split_whitespace()
        .map(count_syllables)
        .sum::<usize>()
        .max(1) as f64;

    0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
}

/// 年级分数对应的标签
pub fn grade_label(grade: f64) -> String {
    let level = grade.floor() as i64;
    if grade < 1.0 {
        "Kindergarten".to_string()
    } else if grade < 6.0 {
        format!("Grade {} (Easy)", level)
    } else if grade < 9.0 {
        format!("Grade {} (Average)", level)
    } else if grade < 13.0 {
        format!("Grade {} (High School)", level)
    } else {
        format!("Grade {} (College+)", level)
    }
}

/// 四舍五入到一位小数
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
