//! 统一错误处理模块
//!
//! 提供库范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - **配置层错误** (`config::ConfigError`): 配置解析和验证错误
//! - **资源层错误** (`AssetError`): 图像读取和解码错误
//!
//! 注意：粒子场构建本身没有错误路径——退化输入（图像缺失、全透明、
//! 解码失败）静默降级为球面分布，而不是返回错误。

use thiserror::Error;

/// 库顶层错误类型
#[derive(Error, Debug)]
pub enum ParticleError {
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 图像资源错误
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Image not found: {path}")]
    NotFound { path: String },

    #[error("Failed to load image: {path}, reason: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Invalid image dimensions: {width}x{height} does not match buffer of {len} bytes")]
    InvalidDimensions { width: u32, height: u32, len: usize },
}

pub type ParticleResult<T> = Result<T, ParticleError>;
pub type AssetResult<T> = Result<T, AssetError>;
