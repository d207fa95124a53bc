//! 核心模块
//!
//! 包含库的基础功能：
//! - `error` - 错误类型定义
//! - `macros` - 共享宏定义

pub mod error;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{AssetError, AssetResult, ParticleError, ParticleResult};
