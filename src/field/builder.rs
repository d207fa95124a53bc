//! 粒子场构建器
//!
//! 对输入确定的变换：解码图像（或无图像）→ 固定大小的点云。
//! 构建阶段没有错误路径：所有退化输入静默降级为球面分布，
//! 永远不会抛出错误或产出部分填充的缓冲。

use crate::config::{ConfigError, FieldConfig};
use crate::field::image::{SourceImage, ValidPixel};
use rand::Rng;

/// 球面降级时使用的中性灰
const SPHERE_FALLBACK_COLOR: [f32; 3] = [0.3, 0.3, 0.3];

// ============================================================================
// 粒子场输出
// ============================================================================

/// 粒子场：构建器的输出缓冲对
///
/// 两个缓冲长度恒等于 `3 * particle_count`，与图像内容无关。
/// 构建完成后不可变，下次构建整体替换，渲染层可以把它当作
/// 无需同步的原子快照。
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    /// 交错的 (x, y, z) 位置三元组
    positions: Vec<f32>,
    /// 交错的 (r, g, b) 颜色三元组，通道归一化到 [0, 1]
    colors: Vec<f32>,
}

impl ParticleField {
    fn zeroed(particle_count: usize) -> Self {
        Self {
            positions: vec![0.0; particle_count * 3],
            colors: vec![0.0; particle_count * 3],
        }
    }

    /// 写入单个粒子的位置和颜色
    fn set(&mut self, index: usize, position: [f32; 3], color: [f32; 3]) {
        self.positions[index * 3..index * 3 + 3].copy_from_slice(&position);
        self.colors[index * 3..index * 3 + 3].copy_from_slice(&color);
    }

    /// 粒子数量
    pub fn particle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// 位置缓冲（交错xyz）
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// 颜色缓冲（交错rgb，[0, 1]）
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// 位置缓冲的字节视图，用于顶点缓冲上传
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// 颜色缓冲的字节视图，用于顶点缓冲上传
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

// ============================================================================
// 构建器
// ============================================================================

/// 粒子场构建器
///
/// 持有经过验证的[`FieldConfig`]。同一配置可以对不同图像重复构建。
#[derive(Debug, Clone)]
pub struct ParticleFieldBuilder {
    config: FieldConfig,
}

impl ParticleFieldBuilder {
    /// 创建构建器
    ///
    /// # 错误
    ///
    /// 配置非法（如 `particle_count == 0`）时返回验证错误，
    /// 之后的构建不再有失败路径。
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 当前配置
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// 构建粒子场（使用线程本地RNG）
    pub fn build(&self, image: Option<&SourceImage>) -> ParticleField {
        self.build_with_rng(image, &mut rand::thread_rng())
    }

    /// 构建粒子场（注入RNG，用于可复现的测试）
    pub fn build_with_rng<R: Rng>(
        &self,
        image: Option<&SourceImage>,
        rng: &mut R,
    ) -> ParticleField {
        let mut field = ParticleField::zeroed(self.config.particle_count);

        match image {
            Some(img) => {
                let valid = img.valid_pixels(self.config.opacity_threshold);
                if valid.is_empty() {
                    tracing::debug!(
                        target: "field",
                        width = img.width(),
                        height = img.height(),
                        "source image has no opaque pixels, using sphere fallback"
                    );
                    self.fill_sphere(&mut field, rng);
                } else {
                    self.fill_silhouette(img, &valid, &mut field, rng);
                }
            }
            None => {
                tracing::debug!(target: "field", "no source image, using sphere fallback");
                self.fill_sphere(&mut field, rng);
            }
        }

        field
    }

    /// 球面降级：在固定半径的球面上均匀撒点
    ///
    /// `phi = acos(2u - 1)` 避免极点聚集。
    fn fill_sphere<R: Rng>(&self, field: &mut ParticleField, rng: &mut R) {
        let radius = self.config.sphere_radius;

        for i in 0..self.config.particle_count {
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();

            let position = [
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ];
            field.set(i, position, SPHERE_FALLBACK_COLOR);
        }
    }

    /// 轮廓投影：把粒子近似均匀地分配到有效像素上
    ///
    /// 扫描序最后一个像素吸收整除余数，保证输出粒子数精确等于
    /// `particle_count`。取整仍留下缺口时（仅可能由舍入造成），
    /// 从有效像素集中随机有放回地补齐。
    fn fill_silhouette<R: Rng>(
        &self,
        image: &SourceImage,
        valid: &[ValidPixel],
        field: &mut ParticleField,
        rng: &mut R,
    ) {
        let count = self.config.particle_count;
        let samples_per_pixel = (count / valid.len()).max(1);
        let mut emitted = 0;

        for (i, pixel) in valid.iter().enumerate() {
            if emitted >= count {
                break;
            }

            let samples = if i + 1 < valid.len() {
                samples_per_pixel
            } else {
                count - emitted
            };

            for _ in 0..samples {
                if emitted >= count {
                    break;
                }
                let (position, color) = self.project(pixel, image);
                field.set(emitted, position, color);
                emitted += 1;
            }
        }

        // 舍入缺口的安全网
        while emitted < count {
            let pixel = &valid[rng.gen_range(0..valid.len())];
            let (position, color) = self.project(pixel, image);
            field.set(emitted, position, color);
            emitted += 1;
        }

        tracing::trace!(
            target: "field",
            valid_pixels = valid.len(),
            samples_per_pixel,
            emitted,
            "silhouette projection complete"
        );
    }

    /// 单像素到3D的平面投影
    fn project(&self, pixel: &ValidPixel, image: &SourceImage) -> ([f32; 3], [f32; 3]) {
        let aspect = image.aspect();

        // 归一化到以中心为原点的 [-1, 1]，Y轴翻转使图像空间的
        // “下”映射到渲染空间的“下”
        let u = (pixel.x as f32 / image.width() as f32) * 2.0 - 1.0;
        let v = 1.0 - (pixel.y as f32 / image.height() as f32) * 2.0;

        // 亮度驱动的深度偏移：亮的像素向观察者凸起，暗的后退
        let brightness =
            (pixel.r as f32 + pixel.g as f32 + pixel.b as f32) / (3.0 * 255.0);
        let depth = (brightness - 0.5) * self.config.depth_scale;

        // min(1, ·)钳制保证投影形状在较长轴上不超过shape_scale，
        // 较短轴按宽高比收缩
        let position = [
            u * self.config.shape_scale * aspect.min(1.0),
            v * self.config.shape_scale * (1.0 / aspect).min(1.0),
            depth,
        ];
        let color = [
            pixel.r as f32 / 255.0,
            pixel.g as f32 / 255.0,
            pixel.b as f32 / 255.0,
        ];
        (position, color)
    }
}

// ============================================================================
// 测试
// ============================================================================
