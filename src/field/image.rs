//! 源图像和有效像素
//!
//! `SourceImage`是构建器的只读输入：宽、高和行主序的RGBA像素缓冲。
//! 由调用方持有，图像URL变化时重新解码。

use crate::core::error::{AssetError, AssetResult};

/// 解码后的源图像（RGBA8，行主序）
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// 有效像素：alpha超过不透明度阈值的源像素
///
/// 每次构建临时派生，粒子生成后即丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidPixel {
    /// 像素列
    pub x: u32,
    /// 像素行
    pub y: u32,
    /// 红色通道（0-255）
    pub r: u8,
    /// 绿色通道（0-255）
    pub g: u8,
    /// 蓝色通道（0-255）
    pub b: u8,
}

impl SourceImage {
    /// 从RGBA8缓冲创建源图像
    ///
    /// # 错误
    ///
    /// 缓冲长度与 `width * height * 4` 不符时返回
    /// [`AssetError::InvalidDimensions`]。
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> AssetResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected || width == 0 || height == 0 {
            return Err(AssetError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// 图像宽度（像素）
    pub fn width(&self) -> u32 {
        self.width
    }

    /// 图像高度（像素）
    pub fn height(&self) -> u32 {
        self.height
    }

    /// 宽高比（width / height）
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// 原始RGBA缓冲
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// 读取单个像素的RGBA值
    ///
    /// 调用方保证坐标在图像范围内。
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let index = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
            self.pixels[index + 3],
        ]
    }

    /// 行主序扫描，收集alpha严格大于阈值的像素
    ///
    /// 这一步把图像的非透明轮廓从背景中分离出来。
    pub fn valid_pixels(&self, threshold: u8) -> Vec<ValidPixel> {
        let mut valid = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let [r, g, b, a] = self.pixel(x, y);
                if a > threshold {
                    valid.push(ValidPixel { x, y, r, g, b });
                }
            }
        }
        valid
    }
}

impl From<image::RgbaImage> for SourceImage {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }
}
