//! Bionic 阅读渲染
//!
//! 把每个单词拆成加粗前半段和普通后半段，引导视线

use serde::Serialize;

/// 拆分后的单词
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmphasizedWord {
    pub bold_prefix: String,
    pub remainder: String,
}

/// 拆分单个单词：前 ceil(len / 2) 个字符加粗
pub fn emphasize(word: &str) -> EmphasizedWord {
    let char_count = word.chars().count();
    let split_at = char_count.div_ceil(2);

    let byte_index = word
        .char_indices()
        .nth(split_at)
        .map(|(i, _)| i)
        .unwrap_or(word.len());

    let (prefix, remainder) = word.split_at(byte_index);
    EmphasizedWord {
        bold_prefix: prefix.to_string(),
        remainder: remainder.to_string(),
    }
}

/// 对一句话中的每个单词做 Bionic 拆分
pub fn emphasize_text(text: &str) -> Vec<EmphasizedWord> {
    text.split_whitespace().map(emphasize).collect()
}
