//! Playback Command Handlers
//!
//! 把用户命令、语音服务回调和计时 tick 统一应用到同一个 PlaybackController 上

use crate::application::commands::playback_commands::*;
use crate::application::error::ApplicationError;
use crate::application::playback::{PlaybackController, PlaybackError, PlaybackNotice};
use crate::application::ports::{SpeechServicePort, TickSchedulerPort};
use crate::domain::playback::SpeechRate;
use crate::domain::ReadingInsights;

/// Playback Handler - 持有控制器和展示用难度标签
pub struct PlaybackHandler<S, T> {
    controller: PlaybackController<S, T>,
    difficulty: Option<String>,
}

impl<S, T> PlaybackHandler<S, T>
where
    S: SpeechServicePort,
    T: TickSchedulerPort,
{
    pub fn new(speech: S, ticker: T, default_rate: SpeechRate) -> Self {
        Self {
            controller: PlaybackController::new(speech, ticker, default_rate),
            difficulty: None,
        }
    }

    pub fn handle(&mut self, cmd: PlaybackCommand) -> Result<PlaybackOutcome, ApplicationError> {
        tracing::debug!(command = cmd.name(), "Handling playback command");

        let result = match cmd {
            PlaybackCommand::LoadText { text, difficulty } => {
                self.difficulty = difficulty;
                self.controller.load_text(&text);
                Ok(())
            }
            PlaybackCommand::Start => self.controller.start(),
            PlaybackCommand::Pause => {
                self.controller.pause();
                Ok(())
            }
            PlaybackCommand::Resume => self.controller.resume(),
            PlaybackCommand::Stop => {
                self.controller.stop();
                Ok(())
            }
            PlaybackCommand::SetRate { rate } => {
                self.controller.set_rate(rate);
                Ok(())
            }
            PlaybackCommand::Snapshot => Ok(()),
        };

        let notice = match result {
            Ok(()) => None,
            Err(PlaybackError::Aborted(notice)) => Some(notice),
            Err(e @ PlaybackError::NothingToPlay) => return Err(e.into()),
        };

        Ok(PlaybackOutcome {
            view: self.view(),
            notice,
        })
    }

    /// 应用语音服务回调，返回会话中止通知（如有）
    pub fn on_speech_event(&mut self, event: SpeechEvent) -> Option<PlaybackNotice> {
        match event {
            SpeechEvent::Completed { handle } => match self.controller.on_utterance_complete(handle) {
                Ok(()) => None,
                Err(PlaybackError::Aborted(notice)) => Some(notice),
                Err(PlaybackError::NothingToPlay) => None,
            },
            SpeechEvent::Failed { handle, cause } => {
                self.controller.on_utterance_error(handle, &cause)
            }
        }
    }

    pub fn on_tick(&mut self, event: TickEvent) {
        self.controller.on_tick(event.handle);
    }

    /// 当前播放视图
    pub fn view(&self) -> PlaybackView {
        let state = self.controller.snapshot();
        let insights = ReadingInsights::new(
            state.elapsed_seconds,
            state.speech_rate.value(),
            self.difficulty.as_deref(),
        );

        PlaybackView {
            session_id: self.controller.session_id(),
            sentences: self.controller.sentences().to_vec(),
            insights,
            state,
        }
    }
}
