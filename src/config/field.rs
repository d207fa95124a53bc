use super::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 粒子场配置
///
/// 控制轮廓投影和球面降级的全部常量。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// 粒子数量（固定，与图像内容无关）
    pub particle_count: usize,

    /// 不透明度阈值（alpha严格大于该值的像素才参与轮廓）
    pub opacity_threshold: u8,

    /// 投影平面缩放（世界单位，较长轴的最大范围）
    pub shape_scale: f32,

    /// 深度缩放（亮度驱动的伪3D起伏幅度）
    pub depth_scale: f32,

    /// 球面降级半径
    pub sphere_radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 10000,
            opacity_threshold: 10,
            shape_scale: 3.0,
            depth_scale: 0.1,
            sphere_radius: 2.0,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置粒子数量
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// 设置不透明度阈值
    pub fn with_opacity_threshold(mut self, threshold: u8) -> Self {
        self.opacity_threshold = threshold;
        self
    }

    /// 设置投影缩放
    pub fn with_shape_scale(mut self, scale: f32) -> Self {
        self.shape_scale = scale;
        self
    }

    /// 设置深度缩放
    pub fn with_depth_scale(mut self, scale: f32) -> Self {
        self.depth_scale = scale;
        self
    }

    /// 设置球面降级半径
    pub fn with_sphere_radius(mut self, radius: f32) -> Self {
        self.sphere_radius = radius;
        self
    }

    /// 验证配置
    ///
    /// 非法的粒子数量在配置阶段被拒绝，构建阶段不再有失败路径。
    pub fn validate(&self) -> ConfigResult<()> {
        if self.particle_count == 0 {
            return Err(ConfigError::ValidationError(
                "particle_count must be positive".to_string(),
            ));
        }
        if !self.shape_scale.is_finite() || self.shape_scale <= 0.0 {
            return Err(ConfigError::ValidationError(
                "shape_scale must be finite and positive".to_string(),
            ));
        }
        if !self.depth_scale.is_finite() || self.depth_scale <= 0.0 {
            return Err(ConfigError::ValidationError(
                "depth_scale must be finite and positive".to_string(),
            ));
        }
        if !self.sphere_radius.is_finite() || self.sphere_radius <= 0.0 {
            return Err(ConfigError::ValidationError(
                "sphere_radius must be finite and positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_particle_count_rejected() {
        let config = FieldConfig::default().with_particle_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        let config = FieldConfig::default().with_shape_scale(f32::NAN);
        assert!(config.validate().is_err());

        let config = FieldConfig::default().with_depth_scale(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = FieldConfig::new()
            .with_particle_count(5000)
            .with_opacity_threshold(32)
            .with_sphere_radius(1.5);
        assert_eq!(config.particle_count, 5000);
        assert_eq!(config.opacity_threshold, 32);
        assert_eq!(config.sphere_radius, 1.5);
    }
}
