//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod simplifier;
mod speech_service;
mod tick_scheduler;

pub use simplifier::{SimplifierError, SimplifierPort, SimplifyRequest};
pub use speech_service::{SpeechError, SpeechServicePort};
pub use tick_scheduler::TickSchedulerPort;
