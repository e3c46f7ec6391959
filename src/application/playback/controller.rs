//! Playback Controller - 逐句朗读状态机
//!
//! 状态转换:
//! - Idle --start--> Playing（朗读第 0 句）
//! - Playing --utterance 完成--> Playing（下一句）/ Idle（最后一句）
//! - Playing --pause--> Paused --resume--> Playing
//! - Playing|Paused --stop--> Idle
//! - Playing --utterance 出错--> Idle
//!
//! 同一时刻最多一个 utterance 在途；句柄不匹配的完成/出错回调一律视为过期并忽略。

use chrono::Utc;

use super::error::{PlaybackError, PlaybackNotice};
use crate::application::ports::{SpeechServicePort, TickSchedulerPort};
use crate::domain::playback::{
    PlaybackPhase, PlaybackState, SessionId, SpeechRate, TickHandle, UtteranceHandle,
};
use crate::domain::text_segmenter::segment_sentences;

/// 在途 utterance
#[derive(Debug, Clone, Copy)]
struct InFlight {
    handle: UtteranceHandle,
    index: usize,
}

/// 播放控制器
pub struct PlaybackController<S, T> {
    speech: S,
    ticker: T,
    sentences: Vec<String>,
    state: PlaybackState,
    session_id: Option<SessionId>,
    in_flight: Option<InFlight>,
    /// 暂停期间当前句已朗读完毕，恢复时直接进入下一句
    advance_on_resume: bool,
    tick: Option<TickHandle>,
}

impl<S, T> PlaybackController<S, T>
where
    S: SpeechServicePort,
    T: TickSchedulerPort,
{
    pub fn new(speech: S, ticker: T, rate: SpeechRate) -> Self {
        Self {
            speech,
            ticker,
            sentences: Vec::new(),
            state: PlaybackState::new(rate),
            session_id: None,
            in_flight: None,
            advance_on_resume: false,
            tick: None,
        }
    }

    /// 当前句子序列
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// 当前状态
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// 可序列化的状态快照
    pub fn snapshot(&self) -> PlaybackState {
        self.state.clone()
    }

    /// 当前会话 ID（Idle 时为 None）
    pub fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// 替换朗读文本
    ///
    /// 播放中会先取消在途 utterance 和计时，再整体重建句子序列并回到 Idle。
    pub fn load_text(&mut self, text: &str) {
        if self.state.phase.is_active() {
            tracing::debug!(
                session_id = ?self.session_id,
                "Text replaced during playback, cancelling stale utterance"
            );
            self.halt();
        }

        self.sentences = segment_sentences(text);
        self.state.reset();
        self.session_id = None;

        tracing::info!(sentences = self.sentences.len(), "Playback text loaded");
    }

    /// 开始播放
    ///
    /// Paused 时等同于 resume，Playing 时为空操作（防止重复点击产生并发请求）。
    pub fn start(&mut self) -> Result<(), PlaybackError> {
        match self.state.phase {
            PlaybackPhase::Playing => {
                tracing::debug!(session_id = ?self.session_id, "Already playing, start ignored");
                Ok(())
            }
            PlaybackPhase::Paused => self.resume(),
            PlaybackPhase::Idle => {
                if self.sentences.is_empty() {
                    return Err(PlaybackError::NothingToPlay);
                }

                let session_id = SessionId::new();
                self.session_id = Some(session_id);
                self.speech.cancel_all();
                self.state.phase = PlaybackPhase::Playing;
                self.start_ticker(session_id);

                tracing::info!(
                    session_id = %session_id,
                    sentences = self.sentences.len(),
                    rate = self.state.speech_rate.value(),
                    "Playback started"
                );

                self.speak_sentence(0)
            }
        }
    }

    /// 暂停（仅 Playing 时有效）
    pub fn pause(&mut self) {
        if self.state.phase != PlaybackPhase::Playing {
            tracing::debug!(phase = self.state.phase.as_str(), "Pause ignored");
            return;
        }

        self.speech.pause();
        self.cancel_ticker();
        self.state.phase = PlaybackPhase::Paused;

        tracing::debug!(
            session_id = ?self.session_id,
            index = ?self.state.current_sentence_index,
            "Playback paused"
        );
    }

    /// 继续（仅 Paused 时有效）
    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        if self.state.phase != PlaybackPhase::Paused {
            tracing::debug!(phase = self.state.phase.as_str(), "Resume ignored");
            return Ok(());
        }
        let (Some(session_id), Some(index)) =
            (self.session_id, self.state.current_sentence_index)
        else {
            self.finish();
            return Ok(());
        };

        self.state.phase = PlaybackPhase::Playing;
        self.start_ticker(session_id);

        tracing::debug!(session_id = %session_id, index = index, "Playback resumed");

        // 语音服务仍处于暂停状态，先解除暂停再请求下一句
        self.speech.resume();

        if self.advance_on_resume {
            self.advance_on_resume = false;
            return self.advance_from(index);
        }
        Ok(())
    }

    /// 停止并清空进度；Idle 时为空操作
    pub fn stop(&mut self) {
        if !self.state.phase.is_active() {
            tracing::debug!("Stop ignored, already idle");
            return;
        }

        let session_id = self.session_id.take();
        self.halt();
        self.state.reset();

        tracing::info!(session_id = ?session_id, "Playback stopped");
    }

    /// 调整语速，从下一句开始生效
    pub fn set_rate(&mut self, rate: f64) -> SpeechRate {
        let rate = SpeechRate::new(rate);
        self.state.speech_rate = rate;
        tracing::debug!(rate = rate.value(), "Speech rate changed");
        rate
    }

    /// 语音服务回调：某个 utterance 朗读完毕
    pub fn on_utterance_complete(&mut self, handle: UtteranceHandle) -> Result<(), PlaybackError> {
        let Some(current) = self.take_in_flight(handle) else {
            tracing::debug!(handle = %handle, "Ignoring stale utterance completion");
            return Ok(());
        };

        match self.state.phase {
            PlaybackPhase::Playing => self.advance_from(current.index),
            PlaybackPhase::Paused => {
                self.advance_on_resume = true;
                Ok(())
            }
            PlaybackPhase::Idle => Ok(()),
        }
    }

    /// 语音服务回调：某个 utterance 出错
    ///
    /// 中止剩余队列并回到 Idle；过期句柄返回 None。
    pub fn on_utterance_error(
        &mut self,
        handle: UtteranceHandle,
        cause: &str,
    ) -> Option<PlaybackNotice> {
        let Some(current) = self.take_in_flight(handle) else {
            tracing::debug!(handle = %handle, cause = %cause, "Ignoring stale utterance error");
            return None;
        };

        Some(self.abort(current.index, cause.to_string()))
    }

    /// 计时回调：每秒一次，仅当前注册的 tick 在 Playing 时计数
    pub fn on_tick(&mut self, handle: TickHandle) {
        if self.state.phase == PlaybackPhase::Playing && self.tick == Some(handle) {
            self.state.elapsed_seconds += 1;
        }
    }

    fn take_in_flight(&mut self, handle: UtteranceHandle) -> Option<InFlight> {
        match self.in_flight {
            Some(current) if current.handle == handle => self.in_flight.take(),
            _ => None,
        }
    }

    fn advance_from(&mut self, index: usize) -> Result<(), PlaybackError> {
        let next = index + 1;
        if next < self.sentences.len() {
            self.speak_sentence(next)
        } else {
            self.finish();
            Ok(())
        }
    }

    fn speak_sentence(&mut self, index: usize) -> Result<(), PlaybackError> {
        self.state.current_sentence_index = Some(index);
        let rate = self.state.speech_rate;

        match self.speech.speak(&self.sentences[index], rate) {
            Ok(handle) => {
                self.in_flight = Some(InFlight { handle, index });
                tracing::debug!(
                    session_id = ?self.session_id,
                    index = index,
                    handle = %handle,
                    rate = rate.value(),
                    "Utterance requested"
                );
                Ok(())
            }
            Err(e) => Err(PlaybackError::Aborted(self.abort(index, e.to_string()))),
        }
    }

    /// 最后一句朗读完毕
    fn finish(&mut self) {
        let session_id = self.session_id.take();
        self.cancel_ticker();
        self.in_flight = None;
        self.advance_on_resume = false;
        self.state.phase = PlaybackPhase::Idle;
        self.state.current_sentence_index = None;

        tracing::info!(
            session_id = ?session_id,
            elapsed_seconds = self.state.elapsed_seconds,
            "Playback finished"
        );
    }

    fn abort(&mut self, index: usize, cause: String) -> PlaybackNotice {
        let session_id = self.session_id.take().unwrap_or_default();
        self.halt();
        self.state.phase = PlaybackPhase::Idle;
        self.state.current_sentence_index = None;

        tracing::warn!(
            session_id = %session_id,
            index = index,
            cause = %cause,
            "Playback aborted by speech error"
        );

        PlaybackNotice {
            session_id,
            sentence_index: index,
            cause,
            occurred_at: Utc::now(),
        }
    }

    /// 取消在途 utterance 和计时
    fn halt(&mut self) {
        self.speech.cancel_all();
        self.cancel_ticker();
        self.in_flight = None;
        self.advance_on_resume = false;
    }

    fn start_ticker(&mut self, session_id: SessionId) {
        self.cancel_ticker();
        self.tick = Some(self.ticker.start(session_id));
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.tick.take() {
            self.ticker.cancel(handle);
        }
    }
}
