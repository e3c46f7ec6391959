//! 句子分割器
//!
//! 按句末标点把文本切成朗读/高亮用的句子序列。
//! 这是启发式分割：缩写（"Dr. Smith"）和小数（"3.5"）会被错误切开，属于已知限制。

/// 检查是否为句末标点
#[inline]
pub fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// 片段是否只由句末标点和空白组成
#[inline]
fn is_trivial_segment(s: &str) -> bool {
    s.chars().all(|ch| is_terminator(ch) || ch.is_whitespace())
}

/// 对文本进行分句
///
/// 分割策略：
/// 1. 非句末字符的最长连续段 + 其后的一个或多个句末标点构成一句
/// 2. 结尾处没有句末标点的剩余内容单独成句
/// 3. 每句去除首尾空白，丢弃空句和只含句末标点的片段
pub fn segment_sentences(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_terminator_run = false;

    for ch in text.chars() {
        if is_terminator(ch) {
            // 句首的孤立标点不构成句子
            if current.is_empty() {
                continue;
            }
            in_terminator_run = true;
            current.push(ch);
            continue;
        }

        if in_terminator_run {
            push_sentence(&mut sentences, &current);
            current.clear();
            in_terminator_run = false;
        }
        current.push(ch);
    }

    // 剩余内容
    push_sentence(&mut sentences, &current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_trivial_segment(trimmed) {
        return;
    }
    sentences.push(trimmed.to_string());
}

/// 按句末标点串切分后的非空片段数（不做 max(1) 处理）
pub fn count_sentences(text: &str) -> usize {
    text.split(is_terminator)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// 按空白切分的词数
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminator_runs() {
        let segments = segment_sentences("Hello there. How are you?! I am fine...");
        assert_eq!(segments, vec!["Hello there.", "How are you?!", "I am fine..."]);
    }

    #[test]
    fn test_trailing_fragment_without_terminator() {
        let segments = segment_sentences("First one. And then the rest");
        assert_eq!(segments, vec!["First one.", "And then the rest"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(segment_sentences("").is_empty());
        assert!(segment_sentences("   ").is_empty());
        assert!(segment_sentences("\n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_only_input() {
        assert!(segment_sentences("...").is_empty());
        assert!(segment_sentences(" !! ?? ").is_empty());
    }

    #[test]
    fn test_symbol_fragments_are_kept() {
        let segments = segment_sentences("Hello. 😀! Bye.");
        assert_eq!(segments, vec!["Hello.", "😀!", "Bye."]);

        let segments = segment_sentences("Wait... -- ok");
        assert_eq!(segments, vec!["Wait...", "-- ok"]);
    }

    #[test]
    fn test_stray_terminators_between_sentences_are_dropped() {
        let segments = segment_sentences("Hello. ! Bye.");
        assert_eq!(segments, vec!["Hello.", "Bye."]);
    }

    #[test]
    fn test_leading_terminators_are_skipped() {
        let segments = segment_sentences("...Wait. Go!");
        assert_eq!(segments, vec!["Wait.", "Go!"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "One. Two! Three? Four";
        assert_eq!(segment_sentences(text), segment_sentences(text));
    }

    #[test]
    fn test_abbreviation_and_decimal_are_split() {
        // 已知限制：不做缩写/小数特殊处理
        let segments = segment_sentences("Dr. Smith paid 3.5 dollars.");
        assert_eq!(segments, vec!["Dr.", "Smith paid 3.", "5 dollars."]);
    }

    #[test]
    fn test_multiline_text() {
        let segments = segment_sentences("Line one.\nLine two.\n\nLine three");
        assert_eq!(segments, vec!["Line one.", "Line two.", "Line three"]);
    }

    #[test]
    fn test_unicode_content() {
        let segments = segment_sentences("Café au lait. Très bien!");
        assert_eq!(segments, vec!["Café au lait.", "Très bien!"]);
    }

    #[test]
    fn test_count_sentences_and_words() {
        assert_eq!(count_sentences("One. Two!! Three"), 3);
        assert_eq!(count_sentences("..."), 0);
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_words("  the quick   brown fox "), 4);
        assert_eq!(count_words("   "), 0);
    }
}
