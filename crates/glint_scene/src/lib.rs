//! Glint scene model.
//!
//! This crate provides the data the renderer reads:
//!
//! - **Materials**: [`Material`] with a 4-channel albedo weighting
//!   controlling diffuse, specular, reflected and refracted light
//! - **Geometry**: [`Sphere`] primitives and the procedural
//!   [`Checkerboard`] ground plane
//! - **Lights**: [`Light`] point lights (unit intensity)
//! - **[`Scene`]**: ordered sphere and light lists plus the reference
//!   scene used for regression renders

pub mod material;
pub mod scene;

// Re-export commonly used types
pub use material::{Color, Material, GLASS, IVORY, MIRROR, RED_RUBBER};
pub use scene::{Checkerboard, Light, Scene, Sphere};
