//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod simplifier;
pub mod speech;

pub use simplifier::*;
pub use speech::*;
