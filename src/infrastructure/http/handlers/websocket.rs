//! WebSocket Handler
//!
//! 浏览器在这条连接上接收朗读指令和状态推送，并回报每句话的朗读结果

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use crate::application::{PlaybackCommand, SpeechEvent};
use crate::domain::playback::UtteranceHandle;
use crate::infrastructure::http::state::AppState;

/// 客户端上行消息
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// 一句话朗读完毕
    UtteranceEnded { handle: UtteranceHandle },
    /// 一句话朗读失败
    UtteranceFailed {
        handle: UtteranceHandle,
        #[serde(default = "default_failure_cause")]
        cause: String,
    },
}

fn default_failure_cause() -> String {
    "speech synthesis error".to_string()
}

impl From<ClientMessage> for SpeechEvent {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::UtteranceEnded { handle } => SpeechEvent::Completed { handle },
            ClientMessage::UtteranceFailed { handle, cause } => {
                SpeechEvent::Failed { handle, cause }
            }
        }
    }
}

/// Playback WebSocket 连接处理
pub async fn playback_websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_playback_socket(socket, state))
}

async fn handle_playback_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let mut event_rx = state.event_publisher.subscribe();

    tracing::info!(
        clients = state.event_publisher.receiver_count(),
        "Playback WebSocket connected"
    );

    // 事件转发任务
    let mut forward_task = tokio::spawn(async move {
        loop {
            let event = match event_rx.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "WebSocket client lagging, events dropped");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let msg = match serde_json::to_string(&event) {
                Ok(json) => Message::Text(json),
                Err(e) => {
                    tracing::error!(error = %e, event = event.name(), "Failed to serialize event");
                    continue;
                }
            };

            if let Err(e) = sender.send(msg).await {
                tracing::debug!(error = %e, "Failed to send WebSocket message");
                break;
            }
        }
    });

    // 接收客户端的朗读回报
    let playback = state.playback.clone();
    let mut receive_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        if let Err(e) = playback.notify_speech(client_msg.into()).await {
                            tracing::error!(error = %e, "Failed to deliver speech event");
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Ignoring malformed client message");
                    }
                },
                Ok(Message::Close(_)) => {
                    tracing::info!("Playback WebSocket closed by client");
                    break;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Playback WebSocket error");
                    break;
                }
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut forward_task => receive_task.abort(),
        _ = &mut receive_task => {
            forward_task.abort();
            let _ = forward_task.await;
        }
    }

    // 最后一个朗读客户端离开后，在途 utterance 不会再有回报
    if state.event_publisher.receiver_count() == 0 {
        if let Err(e) = state.playback.execute(PlaybackCommand::Stop).await {
            tracing::warn!(error = %e, "Failed to stop playback after disconnect");
        }
    }

    tracing::info!("Playback WebSocket disconnected");
}
