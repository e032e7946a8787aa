//! Scene description: primitives, lights and the procedural ground plane.

use glint_math::Vec3;

use crate::material::{Color, Material, GLASS, IVORY, MIRROR, RED_RUBBER};

/// A sphere primitive with its material.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Radius must be positive.
    pub const fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A point light of implicit unit intensity.
///
/// Light contributions are summed over all lights, never averaged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// The procedural checkerboard ground plane.
///
/// An infinite plane at `y = height`, but only occluding inside the
/// band `|x| < half_extent`, `z_min < z < z_max`. The two cell colors
/// alternate on a 2x2 unit grid.
#[derive(Clone, Copy, Debug)]
pub struct Checkerboard {
    pub height: f32,
    pub half_extent: f32,
    pub z_min: f32,
    pub z_max: f32,
    pub colors: [Color; 2],
}

impl Checkerboard {
    /// Cell color at a point on the plane.
    ///
    /// The +1000 offset keeps the floor-truncated parity stable for
    /// negative x over the visible region.
    pub fn color_at(&self, p: Vec3) -> Color {
        let parity = ((0.5 * p.x + 1000.0) as i32 + (0.5 * p.z) as i32) & 1;
        self.colors[parity as usize]
    }

    /// Material at a point on the plane: the default diffuse material
    /// with the cell color substituted in.
    pub fn material_at(&self, p: Vec3) -> Material {
        Material {
            diffuse_color: self.color_at(p),
            ..Material::default()
        }
    }
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            half_extent: 10.0,
            z_min: -30.0,
            z_max: -10.0,
            colors: [Color::new(0.3, 0.2, 0.1), Color::new(0.3, 0.3, 0.3)],
        }
    }
}

/// A complete scene: ordered spheres, ordered lights and an optional
/// checkerboard floor.
///
/// Everything is immutable once built; the renderer only reads it, so
/// it is safe to share across render threads.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub floor: Option<Checkerboard>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed reference scene: four spheres over a checkerboard,
    /// lit by three point lights.
    pub fn reference() -> Self {
        Self {
            spheres: vec![
                Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, IVORY),
                Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, GLASS),
                Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, RED_RUBBER),
                Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, MIRROR),
            ],
            lights: vec![
                Light::new(Vec3::new(-20.0, 20.0, 20.0)),
                Light::new(Vec3::new(30.0, 50.0, -25.0)),
                Light::new(Vec3::new(30.0, 20.0, 30.0)),
            ],
            floor: Some(Checkerboard::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_contents() {
        let scene = Scene::reference();

        assert_eq!(scene.spheres.len(), 4);
        assert_eq!(scene.lights.len(), 3);
        assert!(scene.floor.is_some());

        // Sphere order matters for the reference renders
        assert_eq!(scene.spheres[0].material, IVORY);
        assert_eq!(scene.spheres[1].material, GLASS);
        assert_eq!(scene.spheres[3].radius, 4.0);
    }

    #[test]
    fn test_checkerboard_parity() {
        let floor = Checkerboard::default();

        // (0.5*0 + 1000) + (0.5*-16) = 1000 - 8 = 992, even
        let tan = floor.color_at(Vec3::new(0.0, -4.0, -16.0));
        assert_eq!(tan, Color::new(0.3, 0.2, 0.1));

        // (0.5*2 + 1000) + (0.5*-16) = 1001 - 8 = 993, odd
        let grey = floor.color_at(Vec3::new(2.0, -4.0, -16.0));
        assert_eq!(grey, Color::new(0.3, 0.3, 0.3));
    }

    #[test]
    fn test_checkerboard_material_keeps_diffuse_weights() {
        let floor = Checkerboard::default();
        let mat = floor.material_at(Vec3::new(0.0, -4.0, -16.0));

        assert_eq!(mat.albedo, [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(mat.diffuse_color, Color::new(0.3, 0.2, 0.1));
    }
}
