//! 测试用语音服务与计时器
//!
//! 同步记录所有调用，测试通过共享句柄检查调用序列并手动推进虚拟时间。

use std::sync::{Arc, Mutex};

use crate::application::ports::{SpeechError, SpeechServicePort, TickSchedulerPort};
use crate::domain::playback::{SessionId, SpeechRate, TickHandle, UtteranceHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCall {
    Speak {
        text: String,
        rate: f64,
        handle: UtteranceHandle,
    },
    Pause,
    Resume,
    CancelAll,
}

#[derive(Default)]
struct SpeechLog {
    calls: Vec<SpeechCall>,
    fail_next: Option<SpeechError>,
}

/// 记录调用的语音服务
#[derive(Clone, Default)]
pub struct RecordingSpeechService {
    inner: Arc<Mutex<SpeechLog>>,
}

impl RecordingSpeechService {
    pub fn calls(&self) -> Vec<SpeechCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SpeechCall::Speak { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SpeechCall::Speak { rate, .. } => Some(rate),
                _ => None,
            })
            .collect()
    }

    pub fn last_handle(&self) -> Option<UtteranceHandle> {
        self.calls().into_iter().rev().find_map(|call| match call {
            SpeechCall::Speak { handle, .. } => Some(handle),
            _ => None,
        })
    }

    pub fn fail_next_speak(&self, error: SpeechError) {
        self.inner.lock().unwrap().fail_next = Some(error);
    }
}

impl SpeechServicePort for RecordingSpeechService {
    fn speak(&mut self, text: &str, rate: SpeechRate) -> Result<UtteranceHandle, SpeechError> {
        let mut log = self.inner.lock().unwrap();
        if let Some(error) = log.fail_next.take() {
            return Err(error);
        }
        let handle = UtteranceHandle::new();
        log.calls.push(SpeechCall::Speak {
            text: text.to_string(),
            rate: rate.value(),
            handle,
        });
        Ok(handle)
    }

    fn pause(&mut self) {
        self.inner.lock().unwrap().calls.push(SpeechCall::Pause);
    }

    fn resume(&mut self) {
        self.inner.lock().unwrap().calls.push(SpeechCall::Resume);
    }

    fn cancel_all(&mut self) {
        self.inner.lock().unwrap().calls.push(SpeechCall::CancelAll);
    }
}

#[derive(Default)]
struct TickRegistry {
    next_id: u64,
    active: Vec<TickHandle>,
}

/// 手动推进的计时器：只登记句柄，由测试调用 `on_tick`
#[derive(Clone, Default)]
pub struct ManualTickScheduler {
    inner: Arc<Mutex<TickRegistry>>,
}

impl ManualTickScheduler {
    pub fn active(&self) -> Vec<TickHandle> {
        self.inner.lock().unwrap().active.clone()
    }
}

impl TickSchedulerPort for ManualTickScheduler {
    fn start(&mut self, _session_id: SessionId) -> TickHandle {
        let mut registry = self.inner.lock().unwrap();
        registry.next_id += 1;
        let handle = TickHandle::new(registry.next_id);
        registry.active.push(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.inner.lock().unwrap().active.retain(|h| *h != handle);
    }
}
