//! Recursive Whitted shading: direct lighting plus reflection and
//! refraction bounces.

use glint_math::{Ray, Vec3};
use glint_scene::{Color, Scene};

use crate::intersect::scene_intersect;
use crate::renderer::RenderConfig;

/// Mirror-reflect an incoming direction `i` about the unit normal `n`.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - n * 2.0 * i.dot(n)
}

/// Refract an incoming direction through a surface (Snell's law).
///
/// `eta_t` is the refractive index of the medium behind the surface,
/// `eta_i` the index of the medium the ray travels in (1 for air).
/// When the ray is exiting the medium the normal is flipped and the
/// indices swapped.
///
/// Total internal reflection is not modeled: the reference renders
/// return the fixed direction (1,0,0) in that case, and changing it
/// would change their output.
pub fn refract(i: Vec3, n: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -i.dot(n).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        // Exiting the medium
        return refract(i, -n, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::X
    } else {
        i * eta + n * (eta * cosi - k.sqrt())
    }
}

/// Trace a ray into the scene and return its color.
///
/// Recursion stops once `depth` exceeds the configured limit or the
/// ray escapes the scene; both cases return the background color.
/// Reflect and refract bounces are traced unconditionally; materials
/// with a zero weight simply scale that contribution away.
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }
    let Some(hit) = scene_intersect(scene, ray) else {
        return config.background;
    };

    let reflect_dir = reflect(ray.direction, hit.normal).normalize();
    let refract_dir = refract(ray.direction, hit.normal, hit.material.refractive_index, 1.0)
        .normalize();
    let reflect_color = cast_ray(scene, &Ray::new(hit.point, reflect_dir), depth + 1, config);
    let refract_color = cast_ray(scene, &Ray::new(hit.point, refract_dir), depth + 1, config);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;
    for light in &scene.lights {
        let light_dir = (light.position - hit.point).normalize();

        // In shadow when something sits strictly between the point and
        // the light. The intersection epsilon keeps the shadow ray from
        // re-hitting the surface it starts on.
        let shadow_ray = Ray::new(hit.point, light_dir);
        if let Some(obstacle) = scene_intersect(scene, &shadow_ray) {
            if (obstacle.point - hit.point).length() < (light.position - hit.point).length() {
                continue;
            }
        }

        diffuse_intensity += light_dir.dot(hit.normal).max(0.0);
        specular_intensity += (-reflect(-light_dir, hit.normal))
            .dot(ray.direction)
            .max(0.0)
            .powf(hit.material.specular_exponent);
    }

    hit.material.diffuse_color * diffuse_intensity * hit.material.albedo[0]
        + Color::ONE * specular_intensity * hit.material.albedo[1]
        + reflect_color * hit.material.albedo[2]
        + refract_color * hit.material.albedo[3]
}
