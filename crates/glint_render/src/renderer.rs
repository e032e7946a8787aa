//! Framebuffer fill and tone mapping.
//!
//! Every pixel is an independent computation, so the image is filled
//! row by row in parallel with rayon; each row is owned by exactly one
//! worker and nothing reads another pixel's result.

use glint_scene::{Color, Scene};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::whitted::cast_ray;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth for reflection/refraction bounces
    pub max_depth: u32,
    /// Color returned when a ray escapes the scene
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            background: Color::new(0.2, 0.7, 0.8),
        }
    }
}

/// Row-major HDR image buffer, one [`Color`] per pixel.
///
/// Components stay unbounded until [`color_to_rgb`] tone-maps them for
/// output.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// All pixels in row-major order, top row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Tone-map the buffer into packed RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Tone-map one HDR color to 8-bit RGB.
///
/// The pixel is scaled down by its brightest channel when that channel
/// exceeds 1, preserving hue instead of clipping per channel. Negative
/// components clamp to 0 so they cannot wrap around in the byte cast.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let scale = color.max_element().max(1.0);
    let to_byte = |c: f32| (255.0 * c.max(0.0) / scale) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Compute the color of a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.primary_ray(x, y);
    cast_ray(scene, &ray, 0, config)
}

/// Render the scene into a framebuffer, one rayon task per row.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let width = camera.image_width;
    let mut image = Framebuffer::new(width, camera.image_height);

    log::debug!(
        "rendering {}x{} ({} pixels, depth limit {})",
        width,
        camera.image_height,
        width * camera.image_height,
        config.max_depth
    );

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, scene, x as u32, y as u32, config);
            }
        });

    image
}
