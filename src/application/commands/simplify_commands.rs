//! Simplify Commands - 文本简化命令

use crate::domain::simplify::{Difficulty, SimplificationMode};
use crate::domain::StatsSnapshot;

/// 简化文本命令
#[derive(Debug, Clone)]
pub struct SimplifyTextCommand {
    pub text: String,
    pub mode: SimplificationMode,
    pub difficulty: Difficulty,
    /// 覆盖配置中的 API key
    pub api_key: Option<String>,
}

/// 简化文本响应
#[derive(Debug, Clone)]
pub struct SimplifyTextResponse {
    pub text: String,
    pub difficulty: Difficulty,
    /// 简化结果的统计，`improvement_delta` 以原文为对照
    pub stats: StatsSnapshot,
}
