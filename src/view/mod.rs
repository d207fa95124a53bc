//! 视图状态模块
//!
//! 渲染层持有的每帧可变状态：粒子场自转和轨道相机。
//! 这些是显式传递的状态对象，每帧tick更新一次，不使用
//! 共享可变全局状态。粒子场本身保持不可变，旋转只发生在
//! 变换矩阵层面。

pub mod orbit;
pub mod rotation;

pub use orbit::OrbitCamera;
pub use rotation::FieldRotation;
