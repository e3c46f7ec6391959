//! Readability - 可读性评分
//!
//! 基于音节启发式的 Flesch–Kincaid 年级水平估算

mod scorer;
mod syllables;

pub use scorer::{grade_label, round_one_decimal, score, ReadabilityResult, MAX_GRADE, MIN_GRADE};
pub use syllables::count_syllables;
