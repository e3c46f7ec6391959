//! Analysis Query Handlers

use serde::Serialize;

use crate::application::queries::AnalyzeText;
use crate::domain::{emphasize_text, segment_sentences, summarize, EmphasizedWord, StatsSnapshot};

/// 文本分析结果
#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysis {
    pub sentences: Vec<String>,
    pub stats: StatsSnapshot,
    /// 每句的 Bionic 拆分（与 sentences 一一对应）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bionic: Option<Vec<Vec<EmphasizedWord>>>,
}

/// AnalyzeText Handler
#[derive(Debug, Default, Clone)]
pub struct AnalyzeTextHandler;

impl AnalyzeTextHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: AnalyzeText) -> TextAnalysis {
        let sentences = segment_sentences(&query.text);
        let stats = summarize(
            &query.text,
            query.is_input,
            query.comparison_text.as_deref(),
        );

        let bionic = query
            .bionic
            .then(|| sentences.iter().map(|s| emphasize_text(s)).collect());

        tracing::debug!(
            sentences = sentences.len(),
            words = stats.word_count,
            grade = %stats.readability.grade,
            "Text analyzed"
        );

        TextAnalysis {
            sentences,
            stats,
            bionic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_with_bionic() {
        let analysis = AnalyzeTextHandler::new().handle(AnalyzeText {
            text: "The cat sat. It purred".to_string(),
            bionic: true,
            ..Default::default()
        });

        assert_eq!(analysis.sentences, vec!["The cat sat.", "It purred"]);
        assert_eq!(analysis.stats.word_count, 5);
        let bionic = analysis.bionic.unwrap();
        assert_eq!(bionic.len(), 2);
        assert_eq!(bionic[0][1].bold_prefix, "ca");
        assert_eq!(bionic[0][1].remainder, "t");
    }

    #[test]
    fn test_analyze_without_bionic_or_comparison() {
        let analysis = AnalyzeTextHandler::new().handle(AnalyzeText {
            text: "Hello.".to_string(),
            ..Default::default()
        });
        assert!(analysis.bionic.is_none());
        assert!(analysis.stats.improvement_delta.is_none());
    }

    #[test]
    fn test_input_side_has_no_delta() {
        let analysis = AnalyzeTextHandler::new().handle(AnalyzeText {
            text: "Original words here.".to_string(),
            comparison_text: Some("Other.".to_string()),
            is_input: true,
            bionic: false,
        });
        assert!(analysis.stats.improvement_delta.is_none());
    }

    #[test]
    fn test_empty_text() {
        let analysis = AnalyzeTextHandler::new().handle(AnalyzeText::default());
        assert!(analysis.sentences.is_empty());
        assert_eq!(analysis.stats.word_count, 0);
        assert_eq!(analysis.stats.readability.grade, "N/A");
    }
}
