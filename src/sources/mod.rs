//! 图像源模块
//!
//! 把图像获取建模为多态接口：真实的文件/内存解码，
//! 以及解码失败时替换用的合成径向渐变。构建器的测试因此
//! 不依赖真实解码。

pub mod loader;

use crate::core::error::{AssetError, AssetResult};
use crate::field::image::SourceImage;
use std::path::{Path, PathBuf};

pub use loader::ImageLoader;

/// 图像源接口
///
/// 实现者产出解码后的[`SourceImage`]或资源错误。
pub trait ImageSource {
    /// 加载并解码图像
    fn load(&self) -> AssetResult<SourceImage>;
}

// ============================================================================
// 文件图像源
// ============================================================================

/// 从磁盘路径解码图像（png/jpeg）
#[derive(Debug, Clone)]
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 图像路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileImageSource {
    fn load(&self) -> AssetResult<SourceImage> {
        if !self.path.exists() {
            return Err(AssetError::NotFound {
                path: self.path.display().to_string(),
            });
        }
        let img = image::open(&self.path).map_err(|e| AssetError::LoadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(SourceImage::from(img.to_rgba8()))
    }
}

// ============================================================================
// 内存图像源
// ============================================================================

/// 从内存中的编码字节解码图像
#[derive(Debug, Clone)]
pub struct BytesImageSource {
    bytes: Vec<u8>,
}

impl BytesImageSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl ImageSource for BytesImageSource {
    fn load(&self) -> AssetResult<SourceImage> {
        let img = image::load_from_memory(&self.bytes)
            .map_err(|e| AssetError::Decode(e.to_string()))?;
        Ok(SourceImage::from(img.to_rgba8()))
    }
}

// ============================================================================
// 合成渐变图像源
// ============================================================================

/// 渐变停止点
#[derive(Debug, Clone, Copy)]
pub struct GradientStop {
    /// 归一化半径（0 = 中心，1 = 边缘）
    pub time: f32,
    /// RGB颜色（0-255）
    pub color: [u8; 3],
}

/// 合成径向渐变图像源
///
/// 解码失败时的替代输入：一张正方形、完全不透明的径向渐变图。
/// 生成是同步且不会失败的。
#[derive(Debug, Clone)]
pub struct GradientImageSource {
    size: u32,
    stops: Vec<GradientStop>,
}

impl Default for GradientImageSource {
    fn default() -> Self {
        Self {
            size: 512,
            stops: vec![
                GradientStop {
                    time: 0.0,
                    color: [0x4a, 0x90, 0xe2],
                },
                GradientStop {
                    time: 0.5,
                    color: [0x7b, 0x68, 0xee],
                },
                GradientStop {
                    time: 1.0,
                    color: [0x2d, 0x1b, 0x4e],
                },
            ],
        }
    }
}

impl GradientImageSource {
    pub fn new(size: u32) -> Self {
        Self {
            size: size.max(1),
            ..Self::default()
        }
    }

    /// 替换渐变停止点（按时间排序）
    pub fn with_stops(mut self, mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));
        self.stops = stops;
        self
    }

    /// 采样归一化半径处的颜色
    fn sample(&self, t: f32) -> [u8; 3] {
        if self.stops.is_empty() {
            return [0, 0, 0];
        }
        if self.stops.len() == 1 {
            return self.stops[0].color;
        }

        let t = t.clamp(0.0, 1.0);

        // 找到两个相邻的停止点并线性插值
        for i in 0..self.stops.len() - 1 {
            let a = &self.stops[i];
            let b = &self.stops[i + 1];
            if t >= a.time && t <= b.time {
                let local_t = if b.time > a.time {
                    (t - a.time) / (b.time - a.time)
                } else {
                    0.0
                };
                let mut color = [0u8; 3];
                for c in 0..3 {
                    let va = a.color[c] as f32;
                    let vb = b.color[c] as f32;
                    color[c] = (va + (vb - va) * local_t).round() as u8;
                }
                return color;
            }
        }

        self.stops[self.stops.len() - 1].color
    }

    /// 生成渐变图像（不会失败）
    pub fn generate(&self) -> SourceImage {
        let size = self.size;
        let center = size as f32 * 0.5;
        let max_radius = center.max(1.0);

        let mut pixels = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                let t = (dx * dx + dy * dy).sqrt() / max_radius;
                let [r, g, b] = self.sample(t);
                pixels.extend_from_slice(&[r, g, b, 255]);
            }
        }

        // size >= 1 且缓冲长度按定义匹配
        SourceImage::from_rgba8(size, size, pixels)
            .expect("gradient buffer length is size*size*4")
    }
}

impl ImageSource for GradientImageSource {
    fn load(&self) -> AssetResult<SourceImage> {
        Ok(self.generate())
    }
}

// ============================================================================
// 测试
// ============================================================================
