//! 粒子场模块
//!
//! 将解码后的光栅图像转换为固定大小的3D点云（位置 + 颜色）。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Particle Field Pipeline                  │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Silhouette Scan                                      │
//! │     - 逐行扫描源图像像素                                   │
//! │     - alpha > 阈值的像素进入有效像素集                      │
//! │                                                          │
//! │  2. Sample Distribution                                  │
//! │     - 粒子在有效像素间近似均匀复制                          │
//! │     - 末尾像素吸收整除余数，保证粒子数精确                   │
//! │                                                          │
//! │  3. Planar Projection                                    │
//! │     - 像素坐标归一化到 [-1, 1]，按宽高比钳制缩放             │
//! │     - 亮度驱动的小幅深度偏移（伪3D起伏）                     │
//! │                                                          │
//! │  降级路径：无图像 / 零有效像素 → 均匀球面分布                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```ignore
//! let builder = ParticleFieldBuilder::new(FieldConfig::default())?;
//! let field = builder.build(Some(&image));
//! renderer.upload(field.position_bytes(), field.color_bytes());
//! ```

pub mod builder;
pub mod image;

#[cfg(test)]
mod property_tests;

pub use builder::{ParticleField, ParticleFieldBuilder};
pub use self::image::{SourceImage, ValidPixel};
