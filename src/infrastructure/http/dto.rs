//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::simplify::{Difficulty, SimplificationMode};
use crate::domain::StatsSnapshot;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Text DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
    #[serde(default)]
    pub comparison_text: Option<String>,
    #[serde(default)]
    pub is_input: bool,
    #[serde(default)]
    pub bionic: bool,
}

#[derive(Debug, Deserialize)]
pub struct SimplifyTextRequest {
    pub text: String,
    #[serde(default)]
    pub mode: SimplificationMode,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// 不传时使用服务端配置的 key
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SimplifyTextResponseDto {
    pub text: String,
    pub difficulty: Difficulty,
    pub stats: StatsSnapshot,
}

// ============================================================================
// Playback DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoadTextRequest {
    pub text: String,
    /// 仅用于阅读洞察展示，原样透传
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetRateRequest {
    pub rate: f64,
}
