//! 命令行演示入口
//!
//! 加载命令行指定的图像（缺省时直接使用合成渐变），构建粒子场并
//! 输出统计信息。日志级别可以通过`RUST_LOG`环境变量控制。

use particle_field::config::{AppConfig, LoggingConfig};
use particle_field::field::ParticleFieldBuilder;
use particle_field::sources::{GradientImageSource, ImageLoader, ImageSource};
use particle_field::ParticleError;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("particle_field failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ParticleError> {
    let mut config = AppConfig::load_or_default();
    config.apply_env_overrides();
    config.validate()?;

    initialize_logging(&config.logging);

    let image = match std::env::args().nth(1) {
        Some(path) => {
            let loader = ImageLoader::with_fallback_size(config.view.fallback_image_size);
            loader.load_or_fallback(&path).await
        }
        None => {
            tracing::info!(target: "main", "no image argument, using gradient image");
            GradientImageSource::new(config.view.fallback_image_size).load()?
        }
    };

    let builder = ParticleFieldBuilder::new(config.field.clone())?;
    let field = builder.build(Some(&image));

    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for position in field.positions().chunks_exact(3) {
        for axis in 0..3 {
            min[axis] = min[axis].min(position[axis]);
            max[axis] = max[axis].max(position[axis]);
        }
    }

    tracing::info!(
        target: "main",
        particles = field.particle_count(),
        image_width = image.width(),
        image_height = image.height(),
        bounds_min = ?min,
        bounds_max = ?max,
        "particle field built"
    );
    Ok(())
}

/// 初始化日志系统
///
/// 配置tracing日志框架。`RUST_LOG`环境变量优先，未设置时
/// 回落到配置文件的日志级别。
fn initialize_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.as_filter_str()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
