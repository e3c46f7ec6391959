//! Tick Scheduler Port - 周期计时抽象
//!
//! 播放计时每秒一次 tick；测试中可用手动推进的实现代替真实时钟。

use crate::domain::playback::{SessionId, TickHandle};

/// Tick Scheduler Port
pub trait TickSchedulerPort: Send {
    /// 注册一个每秒触发一次的周期 tick，返回注册句柄
    ///
    /// tick 以 `PlaybackController::on_tick(handle)` 的形式回送。
    fn start(&mut self, session_id: SessionId) -> TickHandle;

    /// 取消周期 tick（对已取消的句柄调用应无副作用）
    fn cancel(&mut self, handle: TickHandle);
}
