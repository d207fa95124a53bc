//! 异步图像加载器
//!
//! 解码在阻塞线程池中执行，每个不同的图像路径触发一次。
//! 读取或解码失败不会向上传播：加载器记录警告并替换为
//! 合成渐变图像，构建器因此永远拿到可用输入。

use crate::field::image::SourceImage;
use crate::sources::{FileImageSource, GradientImageSource, ImageSource};
use std::path::Path;

/// 异步图像加载器
///
/// 持有降级策略（渐变图像源），对调用方只暴露必定成功的加载。
#[derive(Debug, Clone, Default)]
pub struct ImageLoader {
    fallback: GradientImageSource,
}

impl ImageLoader {
    /// 创建加载器
    pub fn new(fallback: GradientImageSource) -> Self {
        Self { fallback }
    }

    /// 按配置的降级图像边长创建加载器
    pub fn with_fallback_size(size: u32) -> Self {
        Self {
            fallback: GradientImageSource::new(size),
        }
    }

    /// 异步加载图像，失败时替换为渐变降级图像
    pub async fn load_or_fallback<P: AsRef<Path>>(&self, path: P) -> SourceImage {
        let source = FileImageSource::new(path.as_ref());
        let display_path = path.as_ref().display().to_string();

        match tokio::task::spawn_blocking(move || source.load()).await {
            Ok(Ok(image)) => {
                tracing::info!(
                    target: "loader",
                    path = %display_path,
                    width = image.width(),
                    height = image.height(),
                    "image decoded"
                );
                image
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    target: "loader",
                    path = %display_path,
                    error = %e,
                    "image load failed, substituting gradient fallback"
                );
                self.fallback.generate()
            }
            Err(e) => {
                tracing::warn!(
                    target: "loader",
                    path = %display_path,
                    error = %e,
                    "decode task failed, substituting gradient fallback"
                );
                self.fallback.generate()
            }
        }
    }
}
