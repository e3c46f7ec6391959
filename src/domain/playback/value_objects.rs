//! Playback Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 朗读语速倍率，始终位于 [0.5, 2.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpeechRate(f64);

impl SpeechRate {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;
    pub const NORMAL: f64 = 1.0;

    /// 越界值被限幅，非有限值回退到 1.0
    pub fn new(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self(Self::NORMAL);
        }
        Self(rate.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        Self(Self::NORMAL)
    }
}

impl<'de> Deserialize<'de> for SpeechRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(SpeechRate::new)
    }
}

/// 播放会话标识：每次从 Idle 开始播放生成一个新的
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 语音服务返回的单次朗读（utterance）句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtteranceHandle(Uuid);

impl UtteranceHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UtteranceHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UtteranceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 周期计时器的注册句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}
