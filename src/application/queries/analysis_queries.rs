//! Analysis Queries - 文本分析查询

/// 分析文本：分句、统计、可选 Bionic 拆分
#[derive(Debug, Clone, Default)]
pub struct AnalyzeText {
    pub text: String,
    /// 对照文本（通常是简化前的原文）
    pub comparison_text: Option<String>,
    /// 当前文本是否为原文一侧
    pub is_input: bool,
    pub bionic: bool,
}
