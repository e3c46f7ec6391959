//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：文本分析

mod analysis_queries;

pub mod handlers;

pub use analysis_queries::*;
