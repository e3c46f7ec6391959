//! Playback Handlers
//!
//! 所有端点都把命令交给 PlaybackWorker，并返回执行后的播放视图

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{PlaybackCommand, PlaybackView};
use crate::infrastructure::http::dto::{ApiResponse, LoadTextRequest, SetRateRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

type PlaybackResult = Result<Json<ApiResponse<PlaybackView>>, ApiError>;

async fn execute(state: &AppState, command: PlaybackCommand) -> PlaybackResult {
    let view = state.playback.execute(command).await?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn load_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoadTextRequest>,
) -> PlaybackResult {
    let command = PlaybackCommand::LoadText {
        text: req.text,
        difficulty: req.difficulty,
    };
    execute(&state, command).await
}

pub async fn start_playback(State(state): State<Arc<AppState>>) -> PlaybackResult {
    execute(&state, PlaybackCommand::Start).await
}

pub async fn pause_playback(State(state): State<Arc<AppState>>) -> PlaybackResult {
    execute(&state, PlaybackCommand::Pause).await
}

pub async fn resume_playback(State(state): State<Arc<AppState>>) -> PlaybackResult {
    execute(&state, PlaybackCommand::Resume).await
}

pub async fn stop_playback(State(state): State<Arc<AppState>>) -> PlaybackResult {
    execute(&state, PlaybackCommand::Stop).await
}

pub async fn set_rate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetRateRequest>,
) -> PlaybackResult {
    execute(&state, PlaybackCommand::SetRate { rate: req.rate }).await
}

pub async fn playback_state(State(state): State<Arc<AppState>>) -> PlaybackResult {
    execute(&state, PlaybackCommand::Snapshot).await
}
