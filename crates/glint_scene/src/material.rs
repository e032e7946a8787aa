//! Material definitions for Whitted shading.

use glint_math::Vec3;

/// Color type alias (RGB, components unbounded until tone mapping)
pub type Color = Vec3;

/// A surface material for the Whitted illumination model.
///
/// The four albedo channels are independent mixing weights, applied in
/// order to the diffuse, specular, reflected and refracted
/// contributions of a shaded point. They carry no sum-to-one
/// constraint and may exceed 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,
    /// Mixing weights: [diffuse, specular, reflect, refract]
    pub albedo: [f32; 4],
    /// Base diffuse color (RGB, non-negative)
    pub diffuse_color: Color,
    /// Specular exponent, higher = sharper highlight
    pub specular_exponent: f32,
}

impl Material {
    /// Create a new material.
    pub const fn new(
        refractive_index: f32,
        albedo: [f32; 4],
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }
}

impl Default for Material {
    /// A plain diffuse material with no color.
    ///
    /// The diffuse weight of 2 matches the checkerboard shading of the
    /// reference renders; the ground plane uses this material with only
    /// its color replaced.
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: [2.0, 0.0, 0.0, 0.0],
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

/// Matte off-white with a soft highlight.
pub const IVORY: Material = Material::new(
    1.0,
    [0.9, 0.5, 0.1, 0.0],
    Vec3::new(0.4, 0.4, 0.3),
    50.0,
);

/// Transparent, mostly refractive.
pub const GLASS: Material = Material::new(
    1.5,
    [0.0, 0.9, 0.1, 0.8],
    Vec3::new(0.6, 0.7, 0.8),
    125.0,
);

/// Dull red diffuse surface.
pub const RED_RUBBER: Material = Material::new(
    1.0,
    [1.4, 0.3, 0.0, 0.0],
    Vec3::new(0.3, 0.1, 0.1),
    10.0,
);

/// Near-perfect mirror with a very tight highlight.
pub const MIRROR: Material = Material::new(
    1.0,
    [0.0, 16.0, 0.8, 0.0],
    Vec3::new(1.0, 1.0, 1.0),
    1425.0,
);
