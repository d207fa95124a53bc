/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量和运行时动态调整
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod field;
pub mod view;

pub use field::FieldConfig;
pub use view::ViewConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 应用主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 粒子场配置
    #[serde(default)]
    pub field: FieldConfig,

    /// 视图配置
    #[serde(default)]
    pub view: ViewConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            view: ViewConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        // 粒子场配置
        if let Ok(val) = env::var("PARTICLE_FIELD_COUNT") {
            if let Ok(count) = val.parse() {
                self.field.particle_count = count;
            }
        }
        if let Ok(val) = env::var("PARTICLE_FIELD_OPACITY_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.field.opacity_threshold = threshold;
            }
        }
        if let Ok(val) = env::var("PARTICLE_FIELD_SHAPE_SCALE") {
            if let Ok(scale) = val.parse() {
                self.field.shape_scale = scale;
            }
        }

        // 视图配置
        if let Ok(val) = env::var("PARTICLE_VIEW_AUTO_ROTATE") {
            self.view.auto_rotate = val.parse().unwrap_or(self.view.auto_rotate);
        }
        if let Ok(val) = env::var("PARTICLE_VIEW_MAX_DISTANCE") {
            if let Ok(distance) = val.parse() {
                self.view.max_distance = distance;
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.field.validate()?;
        self.view.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./config.toml
    /// 2. ./config.json
    /// 3. ~/.config/particle_field/config.toml
    /// 4. 使用默认配置
    pub fn load_or_default() -> Self {
        // 尝试当前目录的TOML
        if let Ok(config) = Self::from_toml_file("config.toml") {
            tracing::info!(target: "config", "Loaded config from config.toml");
            return config;
        }

        // 尝试当前目录的JSON
        if let Ok(config) = Self::from_json_file("config.json") {
            tracing::info!(target: "config", "Loaded config from config.json");
            return config;
        }

        // 尝试用户配置目录
        if let Some(home) = env::var_os("HOME") {
            let config_path = PathBuf::from(home)
                .join(".config")
                .join("particle_field")
                .join("config.toml");

            if let Ok(config) = Self::from_toml_file(&config_path) {
                tracing::info!(target: "config", "Loaded config from {:?}", config_path);
                return config;
            }
        }

        // 使用默认配置
        tracing::info!(target: "config", "Using default configuration");
        Self::default()
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

use crate::impl_default;

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_console: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// 转换为tracing的过滤指令
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field.particle_count, 10000);
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.field.particle_count, parsed.field.particle_count);
    }

    #[test]
    fn test_json_serialization() {
        let config = AppConfig::default();
        let json_str = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json_str).unwrap();
        assert_eq!(config.view.max_distance, parsed.view.max_distance);
    }

    #[test]
    fn test_partial_toml() {
        // 缺省的节回落到默认值
        let parsed = AppConfig::from_toml_str("[field]\nparticle_count = 500\n").unwrap();
        assert_eq!(parsed.field.particle_count, 500);
        assert_eq!(parsed.view.max_distance, 8.0);
    }

    #[test]
    fn test_log_level_filter_str() {
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        std::env::set_var("PARTICLE_FIELD_COUNT", "2500");
        config.apply_env_overrides();
        std::env::remove_var("PARTICLE_FIELD_COUNT");
        assert_eq!(config.field.particle_count, 2500);
    }
}
