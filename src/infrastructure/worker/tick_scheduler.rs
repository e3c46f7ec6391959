//! Tokio Tick Scheduler
//!
//! 每次注册启动一个 `tokio::time::interval` 任务，每秒向 PlaybackWorker 的
//! 队列投递一次 `Tick`。只持有队列的弱引用，Worker 退出后任务随之结束。

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::application::ports::TickSchedulerPort;
use crate::application::TickEvent;
use crate::domain::playback::{SessionId, TickHandle};

use super::playback_worker::PlaybackMessage;

/// 每个 tick 计为一秒播放时长
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct TokioTickScheduler {
    sender: mpsc::WeakSender<PlaybackMessage>,
    period: Duration,
    next_id: u64,
    tasks: HashMap<TickHandle, JoinHandle<()>>,
}

impl TokioTickScheduler {
    pub fn new(sender: mpsc::WeakSender<PlaybackMessage>) -> Self {
        Self::with_period(sender, TICK_PERIOD)
    }

    /// 以压缩后的周期投递 tick，测试中用来加速时钟
    pub(crate) fn with_period(sender: mpsc::WeakSender<PlaybackMessage>, period: Duration) -> Self {
        Self {
            sender,
            period,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    /// 当前运行中的计时任务数
    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

impl TickSchedulerPort for TokioTickScheduler {
    fn start(&mut self, session_id: SessionId) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::new(self.next_id);
        let sender = self.sender.clone();
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let Some(tx) = sender.upgrade() else {
                    break;
                };
                if tx.send(PlaybackMessage::Tick(TickEvent { handle })).await.is_err() {
                    break;
                }
            }
        });

        tracing::debug!(session_id = %session_id, tick = handle.id(), "Tick started");
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
            tracing::debug!(tick = handle.id(), "Tick cancelled");
        }
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
