//! # Particle Field
//!
//! An image-driven 3D particle field generator built with Rust.
//!
//! ## Features
//!
//! - **Silhouette Projection**: Samples the opaque pixels of a raster image and
//!   projects them into a fixed-size 3D point cloud (positions + colors)
//! - **Graceful Degradation**: Missing, transparent, or corrupt images degrade to a
//!   uniform sphere distribution instead of failing
//! - **Fallback Image Synthesis**: A radial gradient image source substitutes for
//!   images that cannot be decoded
//! - **View State**: Orbit camera and auto-rotation math for the consuming renderer
//! - **Configuration**: TOML/JSON config files with environment-variable overrides
//!
//! ## Architecture Design
//!
//! The crate separates the pure build step from everything stateful:
//! - **Builder** ([`field`]): pure function of `(image, config, rng)` — no I/O,
//!   no shared state, output immutable once produced
//! - **Sources** ([`sources`]): image acquisition (file, memory, synthetic gradient)
//!   and the async loader that owns the fallback policy
//! - **View** ([`view`]): per-frame mutable state (rotation, orbit camera) owned by
//!   the render layer, updated once per frame tick
//!
//! ### Example
//!
//! ```ignore
//! use particle_field::config::FieldConfig;
//! use particle_field::field::ParticleFieldBuilder;
//! use particle_field::sources::{GradientImageSource, ImageSource};
//!
//! let builder = ParticleFieldBuilder::new(FieldConfig::default())?;
//! let image = GradientImageSource::default().load()?;
//! let field = builder.build(Some(&image));
//! assert_eq!(field.positions().len(), 3 * field.particle_count());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Error types and shared macros
//! - [`config`]: Configuration system
//! - [`field`]: Particle field builder and output buffers
//! - [`sources`]: Image sources and async loading
//! - [`view`]: Renderer-owned view state (rotation, orbit camera)

/// Core functionality: error types and shared macros
pub mod core;
/// Configuration system
pub mod config;
/// Particle field builder: image to point cloud
pub mod field;
/// Image sources: file, memory, synthetic gradient, async loader
pub mod sources;
/// View-layer state: field rotation and orbit camera
pub mod view;

pub use config::{AppConfig, FieldConfig, ViewConfig};
pub use crate::core::{AssetError, ParticleError, ParticleResult};
pub use field::{ParticleField, ParticleFieldBuilder, SourceImage};
pub use sources::{GradientImageSource, ImageLoader, ImageSource};
