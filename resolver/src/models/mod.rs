//! 数据模型

mod asset;
mod rule;

pub use asset::*;
pub use rule::*;
