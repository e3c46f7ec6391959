//! Text Handlers - 分析与简化

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{AnalyzeText, SimplifyTextCommand, TextAnalysis};
use crate::infrastructure::http::dto::{
    AnalyzeTextRequest, ApiResponse, SimplifyTextRequest, SimplifyTextResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Analyze
// ============================================================================

pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Json<ApiResponse<TextAnalysis>> {
    let query = AnalyzeText {
        text: req.text,
        comparison_text: req.comparison_text,
        is_input: req.is_input,
        bionic: req.bionic,
    };

    Json(ApiResponse::success(state.analyze_handler.handle(query)))
}

// ============================================================================
// Simplify
// ============================================================================

pub async fn simplify_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimplifyTextRequest>,
) -> Result<Json<ApiResponse<SimplifyTextResponseDto>>, ApiError> {
    let cmd = SimplifyTextCommand {
        text: req.text,
        mode: req.mode,
        difficulty: req.difficulty,
        api_key: req.api_key,
    };

    let result = state.simplify_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(SimplifyTextResponseDto {
        text: result.text,
        difficulty: result.difficulty,
        stats: result.stats,
    })))
}
