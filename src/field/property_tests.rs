//! 粒子场属性测试
//!
//! 使用proptest验证构建器的缓冲不变量对任意输入成立

use crate::config::FieldConfig;
use crate::field::builder::ParticleFieldBuilder;
use crate::field::image::SourceImage;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 任意尺寸、任意内容的RGBA图像策略
fn arb_image() -> impl Strategy<Value = SourceImage> {
    (1u32..24, 1u32..24)
        .prop_flat_map(|(width, height)| {
            let len = width as usize * height as usize * 4;
            (
                Just(width),
                Just(height),
                prop::collection::vec(any::<u8>(), len..=len),
            )
        })
        .prop_map(|(width, height, pixels)| {
            SourceImage::from_rgba8(width, height, pixels).unwrap()
        })
}

proptest! {
    #[test]
    fn buffers_always_fully_populated(
        particle_count in 1usize..2000,
        image in arb_image(),
        seed in any::<u64>(),
    ) {
        let builder = ParticleFieldBuilder::new(
            FieldConfig::default().with_particle_count(particle_count),
        ).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let field = builder.build_with_rng(Some(&image), &mut rng);

        prop_assert_eq!(field.positions().len(), particle_count * 3);
        prop_assert_eq!(field.colors().len(), particle_count * 3);
    }

    #[test]
    fn colors_always_normalized(
        particle_count in 1usize..500,
        image in arb_image(),
        seed in any::<u64>(),
    ) {
        let builder = ParticleFieldBuilder::new(
            FieldConfig::default().with_particle_count(particle_count),
        ).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let field = builder.build_with_rng(Some(&image), &mut rng);

        for &channel in field.colors() {
            prop_assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn positions_stay_in_projection_bounds(
        particle_count in 1usize..500,
        image in arb_image(),
        seed in any::<u64>(),
    ) {
        let config = FieldConfig::default().with_particle_count(particle_count);
        let shape_scale = config.shape_scale;
        let depth_half = config.depth_scale * 0.5;
        let sphere_radius = config.sphere_radius;

        let builder = ParticleFieldBuilder::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let field = builder.build_with_rng(Some(&image), &mut rng);

        let silhouette = !image.valid_pixels(10).is_empty();
        for position in field.positions().chunks_exact(3) {
            if silhouette {
                // 投影路径：平面范围受shape_scale钳制，深度受depth_scale钳制
                prop_assert!(position[0].abs() <= shape_scale);
                prop_assert!(position[1].abs() <= shape_scale);
                prop_assert!(position[2].abs() <= depth_half + 1e-6);
            } else {
                // 降级路径：所有点落在球面上
                let length = glam::Vec3::from_slice(position).length();
                prop_assert!((length - sphere_radius).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn sphere_fallback_is_uniform_gray(
        particle_count in 1usize..500,
        seed in any::<u64>(),
    ) {
        let builder = ParticleFieldBuilder::new(
            FieldConfig::default().with_particle_count(particle_count),
        ).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let field = builder.build_with_rng(None, &mut rng);

        for color in field.colors().chunks_exact(3) {
            prop_assert_eq!(color, &[0.3f32, 0.3, 0.3]);
        }
    }
}
