//! Pin-hole camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// Camera generating one primary ray per pixel.
#[derive(Clone, Debug)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Field of view in radians
    fov: f32,
    /// Eye position
    origin: Vec3,
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 450,
            fov: std::f32::consts::FRAC_PI_2,
            origin: Vec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the eye position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner; the y axis is flipped so
    /// the rendered image comes out right-side-up. The ray direction
    /// is normalized.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let dir = Vec3::new(
            (x as f32 + 0.5) - width / 2.0,
            -(y as f32 + 0.5) + height / 2.0,
            -height / (2.0 * (self.fov / 2.0).tan()),
        );
        Ray::new(self.origin, dir.normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
