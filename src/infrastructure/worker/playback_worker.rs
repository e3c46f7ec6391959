//! Playback Worker - 单线程播放 Actor
//!
//! 独占 PlaybackController；用户命令、语音回调和计时 tick 经同一个 mpsc 队列
//! 按到达顺序逐条处理，每次状态变化后通过 EventPublisher 推送给客户端。

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::application::ports::SpeechServicePort;
use crate::application::{
    ApplicationError, PlaybackCommand, PlaybackHandler, PlaybackView, SpeechEvent, TickEvent,
};
use crate::domain::playback::SpeechRate;
use crate::infrastructure::events::EventPublisher;

use super::tick_scheduler::{TokioTickScheduler, TICK_PERIOD};

/// Worker 队列中的消息
#[derive(Debug)]
pub enum PlaybackMessage {
    Command {
        command: PlaybackCommand,
        reply: oneshot::Sender<Result<PlaybackView, ApplicationError>>,
    },
    Speech(SpeechEvent),
    Tick(TickEvent),
}

/// Worker 配置
#[derive(Debug, Clone)]
pub struct PlaybackWorkerConfig {
    /// 初始语速
    pub default_rate: SpeechRate,
    /// 队列容量
    pub queue_capacity: usize,
}

impl Default for PlaybackWorkerConfig {
    fn default() -> Self {
        Self {
            default_rate: SpeechRate::default(),
            queue_capacity: 64,
        }
    }
}

/// 播放 Worker
pub struct PlaybackWorker<S> {
    receiver: mpsc::Receiver<PlaybackMessage>,
    handler: PlaybackHandler<S, TokioTickScheduler>,
    event_publisher: Arc<EventPublisher>,
}

/// 向 Worker 投递消息的句柄
#[derive(Clone)]
pub struct PlaybackWorkerHandle {
    sender: mpsc::Sender<PlaybackMessage>,
}

impl<S> PlaybackWorker<S>
where
    S: SpeechServicePort,
{
    pub fn new(
        config: PlaybackWorkerConfig,
        speech: S,
        event_publisher: Arc<EventPublisher>,
    ) -> (Self, PlaybackWorkerHandle) {
        Self::with_tick_period(config, speech, event_publisher, TICK_PERIOD)
    }

    fn with_tick_period(
        config: PlaybackWorkerConfig,
        speech: S,
        event_publisher: Arc<EventPublisher>,
        tick_period: Duration,
    ) -> (Self, PlaybackWorkerHandle) {
        let (sender, receiver) = mpsc::channel(config.queue_capacity.max(1));
        let ticker = TokioTickScheduler::with_period(sender.downgrade(), tick_period);

        let worker = Self {
            receiver,
            handler: PlaybackHandler::new(speech, ticker, config.default_rate),
            event_publisher,
        };
        (worker, PlaybackWorkerHandle { sender })
    }

    /// 启动 Worker，直到所有句柄被释放
    pub async fn run(mut self) {
        tracing::info!("PlaybackWorker started");

        while let Some(message) = self.receiver.recv().await {
            self.dispatch(message);
        }

        tracing::info!("PlaybackWorker stopped");
    }

    fn dispatch(&mut self, message: PlaybackMessage) {
        match message {
            PlaybackMessage::Command { command, reply } => {
                let read_only = matches!(command, PlaybackCommand::Snapshot);
                let result = self.handler.handle(command).map(|outcome| {
                    if let Some(notice) = outcome.notice {
                        self.event_publisher.publish_failure(notice);
                    }
                    if !read_only {
                        self.event_publisher.publish_state(outcome.view.clone());
                    }
                    outcome.view
                });

                if reply.send(result).is_err() {
                    tracing::debug!("Playback command caller went away before reply");
                }
            }
            PlaybackMessage::Speech(event) => {
                if let Some(notice) = self.handler.on_speech_event(event) {
                    self.event_publisher.publish_failure(notice);
                }
                self.event_publisher.publish_state(self.handler.view());
            }
            PlaybackMessage::Tick(event) => {
                let before = self.handler.view().state.elapsed_seconds;
                self.handler.on_tick(event);
                let view = self.handler.view();
                if view.state.elapsed_seconds != before {
                    self.event_publisher.publish_state(view);
                }
            }
        }
    }
}

impl PlaybackWorkerHandle {
    /// 执行命令并等待 Worker 返回播放视图
    pub async fn execute(&self, command: PlaybackCommand) -> Result<PlaybackView, ApplicationError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(PlaybackMessage::Command { command, reply })
            .await
            .map_err(|_| ApplicationError::internal("Playback worker is not running"))?;

        response
            .await
            .map_err(|_| ApplicationError::internal("Playback worker dropped the request"))?
    }

    /// 投递语音服务回调
    pub async fn notify_speech(&self, event: SpeechEvent) -> Result<(), ApplicationError> {
        self.sender
            .send(PlaybackMessage::Speech(event))
            .await
            .map_err(|_| ApplicationError::internal("Playback worker is not running"))
    }
}
