//! Query Handlers 实现

mod analysis_handlers;

pub use analysis_handlers::*;
