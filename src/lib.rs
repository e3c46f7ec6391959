//! EasyRead - 面向阅读障碍者的文本简化与逐句朗读服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 分句、可读性评分、文本统计、Bionic 拆分、阅读洞察
//! - Simplify Context: 难度档位与提示词构建
//! - Playback Context: 播放状态与值对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechService, TickScheduler, Simplifier）
//! - Playback: 逐句朗读状态机
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + WebSocket
//! - Worker: PlaybackWorker 单线程播放 Actor 与计时器
//! - Adapters: 远程语音客户端、语言模型 HTTP 客户端
//! - Events: WebSocket 事件发布

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
