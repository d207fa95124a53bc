use super::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 视图配置
///
/// 渲染层持有的轨道相机和自转参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// 相机最小距离
    pub min_distance: f32,

    /// 相机最大距离
    pub max_distance: f32,

    /// 是否自动旋转相机
    pub auto_rotate: bool,

    /// 自动旋转速度
    pub auto_rotate_speed: f32,

    /// 粒子场绕X轴旋转速度（弧度/秒）
    pub rotation_speed_x: f32,

    /// 粒子场绕Y轴旋转速度（弧度/秒）
    pub rotation_speed_y: f32,

    /// 合成降级图像的边长（像素）
    pub fallback_image_size: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_distance: 3.0,
            max_distance: 8.0,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
            rotation_speed_x: 0.1,
            rotation_speed_y: 0.15,
            fallback_image_size: 512,
        }
    }
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(ConfigError::ValidationError(
                "min_distance must be finite and positive".to_string(),
            ));
        }
        if !self.max_distance.is_finite() || self.max_distance < self.min_distance {
            return Err(ConfigError::ValidationError(
                "max_distance must be finite and >= min_distance".to_string(),
            ));
        }
        if self.fallback_image_size == 0 {
            return Err(ConfigError::ValidationError(
                "fallback_image_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
