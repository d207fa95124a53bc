//! 粒子场自转状态
//!
//! 缓慢的双轴旋转，角度随时间累积。

use crate::config::ViewConfig;
use glam::Mat4;

/// 粒子场旋转状态
#[derive(Debug, Clone, Copy)]
pub struct FieldRotation {
    /// 绕X轴累积角度（弧度）
    pub x: f32,
    /// 绕Y轴累积角度（弧度）
    pub y: f32,
    /// X轴角速度（弧度/秒）
    speed_x: f32,
    /// Y轴角速度（弧度/秒）
    speed_y: f32,
}

impl Default for FieldRotation {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            speed_x: 0.1,
            speed_y: 0.15,
        }
    }
}

impl FieldRotation {
    pub fn new(speed_x: f32, speed_y: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            speed_x,
            speed_y,
        }
    }

    /// 按视图配置创建
    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.rotation_speed_x, config.rotation_speed_y)
    }

    /// 每帧推进旋转角度
    pub fn update(&mut self, delta_time: f32) {
        self.x += self.speed_x * delta_time;
        self.y += self.speed_y * delta_time;
    }

    /// 当前旋转的模型矩阵
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.y) * Mat4::from_rotation_x(self.x)
    }

    /// 重置累积角度
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }
}
