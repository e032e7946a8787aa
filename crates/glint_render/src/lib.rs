//! Glint renderer - CPU Whitted ray tracing.
//!
//! A recursive ray tracer in the Whitted style:
//! - Analytic ray/sphere intersection, procedural checkerboard floor
//! - Phong-style direct lighting with shadow rays
//! - Recursive mirror reflection and Snell refraction, depth capped
//! - Parallel per-row framebuffer fill via rayon

mod camera;
mod intersect;
mod output;
mod renderer;
mod whitted;

pub use camera::Camera;
pub use intersect::{scene_intersect, sphere_intersect, Hit, MAX_TRACE_DIST, SELF_INTERSECT_EPS};
pub use output::{save_ppm, write_ppm, OutputError};
pub use renderer::{color_to_rgb, render, render_pixel, Framebuffer, RenderConfig};
pub use whitted::{cast_ray, reflect, refract};

/// Re-export the math and scene types the renderer API speaks in.
pub use glint_math::{Interval, Ray, Vec3};
pub use glint_scene::{Color, Light, Material, Scene, Sphere};
