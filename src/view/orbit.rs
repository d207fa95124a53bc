//! 轨道相机
//!
//! 围绕原点的球坐标相机：拖拽旋转、滚轮缩放、可选自转。
//! 不支持平移——目标点固定在原点。

use crate::config::ViewConfig;
use glam::{Mat4, Vec3};

/// 相机初始距离
const INITIAL_RADIUS: f32 = 5.0;

/// 极角钳制边距，避免越过极点翻转
const POLAR_MARGIN: f32 = 0.1;

/// 轨道相机状态
///
/// 球坐标采用y-up约定：`phi`是与+Y轴的夹角，`theta`是绕Y轴的方位角。
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// 与原点的距离
    radius: f32,
    /// 方位角（弧度）
    theta: f32,
    /// 极角（弧度，0 = 顶部）
    phi: f32,
    /// 最小距离
    pub min_distance: f32,
    /// 最大距离
    pub max_distance: f32,
    /// 是否自动旋转
    pub auto_rotate: bool,
    /// 自动旋转速度
    pub auto_rotate_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl OrbitCamera {
    /// 按视图配置创建相机
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            radius: INITIAL_RADIUS.clamp(config.min_distance, config.max_distance),
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            auto_rotate: config.auto_rotate,
            auto_rotate_speed: config.auto_rotate_speed,
        }
    }

    /// 按像素增量旋转相机（拖拽输入）
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.theta -= delta_x * 0.01;
        self.phi += delta_y * 0.01;
        self.phi = self
            .phi
            .clamp(POLAR_MARGIN, std::f32::consts::PI - POLAR_MARGIN);
    }

    /// 按滚轮增量缩放，距离钳制在配置范围内
    pub fn zoom(&mut self, wheel_delta: f32) {
        self.radius = (self.radius + wheel_delta * 0.01).clamp(self.min_distance, self.max_distance);
    }

    /// 每帧tick推进自动旋转
    pub fn update(&mut self) {
        if self.auto_rotate {
            self.theta += self.auto_rotate_speed * 0.01;
        }
    }

    /// 当前相机位置
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        )
    }

    /// 当前距离
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// 注视原点的视图矩阵
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let camera = OrbitCamera::default();
        let position = camera.position();
        // 初始在+Z轴上，距离5
        assert!(position.x.abs() < 1e-5);
        assert!(position.y.abs() < 1e-5);
        assert!((position.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_zoom_clamps_to_range() {
        let mut camera = OrbitCamera::default();
        camera.zoom(10000.0);
        assert_eq!(camera.radius(), 8.0);
        camera.zoom(-10000.0);
        assert_eq!(camera.radius(), 3.0);
    }

    #[test]
    fn test_polar_angle_clamped() {
        let mut camera = OrbitCamera::default();
        camera.rotate(0.0, 10000.0);
        let position = camera.position();
        // 没有翻过底部极点
        assert!(position.y > -camera.radius());

        camera.rotate(0.0, -100000.0);
        let position = camera.position();
        assert!(position.y < camera.radius());
    }

    #[test]
    fn test_auto_rotate_advances_theta() {
        let mut camera = OrbitCamera::default();
        let before = camera.position();
        camera.update();
        let after = camera.position();
        assert!((before - after).length() > 0.0);
        // 距离不受自转影响
        assert!((after.length() - before.length()).abs() < 1e-5);
    }

    #[test]
    fn test_auto_rotate_disabled() {
        let config = ViewConfig {
            auto_rotate: false,
            ..ViewConfig::default()
        };
        let mut camera = OrbitCamera::from_config(&config);
        let before = camera.position();
        camera.update();
        assert_eq!(before, camera.position());
    }

    #[test]
    fn test_view_matrix_looks_at_origin() {
        let camera = OrbitCamera::default();
        let v = camera.view_matrix().transform_point3(glam::Vec3::ZERO);
        // 原点落在相机前方-Z，距离等于radius
        assert!((v.z + camera.radius()).abs() < 1e-5);
    }
}
