//! Ray intersection against the scene geometry.

use glint_math::{Interval, Ray, Vec3};
use glint_scene::{Material, Scene, Sphere};

/// Minimum hit distance, so a bounced ray does not re-hit the surface
/// it just left due to floating-point rounding.
pub const SELF_INTERSECT_EPS: f32 = 1e-3;

/// Hits beyond this distance count as background.
pub const MAX_TRACE_DIST: f32 = 1000.0;

/// The plane test is skipped when the ray is this close to parallel.
const PLANE_PARALLEL_EPS: f32 = 1e-3;

/// Record of a ray/scene intersection.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal at the intersection
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// Analytic ray/sphere intersection.
///
/// Expects a unit ray direction. Returns the distance to the first
/// intersection inside `range`, or `None` when the ray misses or both
/// roots fall outside it.
pub fn sphere_intersect(ray: &Ray, sphere: &Sphere, range: Interval) -> Option<f32> {
    let l = sphere.center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();

    // Nearest root first; the far root covers a ray starting inside
    let t0 = tca - thc;
    if range.surrounds(t0) {
        return Some(t0);
    }
    let t1 = tca + thc;
    if range.surrounds(t1) {
        return Some(t1);
    }
    None
}

/// Find the nearest hit along a ray, testing the checkerboard floor
/// and every sphere in the scene.
///
/// The valid range starts at ([`SELF_INTERSECT_EPS`],
/// [`MAX_TRACE_DIST`]) and its upper bound shrinks to each accepted
/// hit, so only strictly nearer candidates replace it. Ties at exactly
/// equal distance keep whichever candidate was tested first (floor,
/// then spheres in scene order); callers must not rely on that
/// ordering.
pub fn scene_intersect(scene: &Scene, ray: &Ray) -> Option<Hit> {
    let mut closest = Interval::new(SELF_INTERSECT_EPS, MAX_TRACE_DIST);
    let mut hit = None;

    if let Some(floor) = &scene.floor {
        if ray.direction.y.abs() > PLANE_PARALLEL_EPS {
            let d = (floor.height - ray.origin.y) / ray.direction.y;
            let p = ray.at(d);
            if closest.surrounds(d)
                && p.x.abs() < floor.half_extent
                && p.z > floor.z_min
                && p.z < floor.z_max
            {
                closest.max = d;
                hit = Some(Hit {
                    point: p,
                    normal: Vec3::Y,
                    material: floor.material_at(p),
                });
            }
        }
    }

    for sphere in &scene.spheres {
        let Some(d) = sphere_intersect(ray, sphere, closest) else {
            continue;
        };
        closest.max = d;
        let point = ray.at(d);
        hit = Some(Hit {
            point,
            normal: (point - sphere.center).normalize(),
            material: sphere.material,
        });
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_range() -> Interval {
        Interval::new(SELF_INTERSECT_EPS, MAX_TRACE_DIST)
    }

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Material::default())
    }

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let d = sphere_intersect(&ray, &sphere, trace_range())
            .expect("ray aimed at center must hit");
        assert!((d - 4.0).abs() < 1e-4);
        assert!(d > SELF_INTERSECT_EPS);
    }

    #[test]
    fn test_sphere_miss_when_closest_approach_exceeds_radius() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 2.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere_intersect(&ray, &sphere, trace_range()).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let d = sphere_intersect(&ray, &sphere, trace_range())
            .expect("ray from center must exit");
        assert!((d - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere_intersect(&ray, &sphere, trace_range()).is_none());
    }

    #[test]
    fn test_sphere_beyond_range_max_rejected() {
        // A hit at distance 4 is valid with the full range but not
        // once something nearer has shrunk the upper bound
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere_intersect(&ray, &sphere, trace_range()).is_some());
        let shrunk = Interval::new(SELF_INTERSECT_EPS, 3.0);
        assert!(sphere_intersect(&ray, &sphere, shrunk).is_none());
    }

    #[test]
    fn test_scene_intersect_ivory_sphere() {
        let scene = Scene::reference();

        // Straight down -Z at the ivory sphere; every other primitive
        // is clear of this line.
        let ray = Ray::new(Vec3::new(-3.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = scene_intersect(&scene, &ray).expect("must hit the ivory sphere");

        assert_eq!(hit.material, scene.spheres[0].material);
        assert!((hit.normal.length() - 1.0).abs() < 1e-4);
        assert!((hit.point - Vec3::new(-3.0, 0.0, -14.0)).length() < 1e-3);
        assert!((hit.normal - Vec3::Z).length() < 1e-3);
    }

    #[test]
    fn test_scene_intersect_floor() {
        let scene = Scene::reference();

        // Down and forward into the checkerboard band, aimed left of
        // every sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(-8.0, -4.0, -20.0).normalize());
        let hit = scene_intersect(&scene, &ray).expect("must hit the floor");

        assert_eq!(hit.normal, Vec3::Y);
        assert!((hit.point.y - (-4.0)).abs() < 1e-4);
        // Floor material is diffuse only
        assert_eq!(hit.material.albedo, [2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_scene_intersect_nearest_wins() {
        // Two spheres on the same line; the nearer one must be
        // reported even though it is listed second
        let far = Sphere::new(Vec3::new(0.0, 0.0, -20.0), 1.0, glint_scene::IVORY);
        let near = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, glint_scene::RED_RUBBER);
        let scene = Scene {
            spheres: vec![far, near],
            lights: vec![],
            floor: None,
        };

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene_intersect(&scene, &ray).expect("must hit the near sphere");
        assert_eq!(hit.material, glint_scene::RED_RUBBER);
        assert!((hit.point.z - (-9.0)).abs() < 1e-4);
    }

    #[test]
    fn test_scene_intersect_sky_misses() {
        let scene = Scene::reference();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(scene_intersect(&scene, &ray).is_none());
    }

    #[test]
    fn test_floor_outside_band_does_not_occlude() {
        let scene = Scene::reference();

        // Aim at the plane height but far beyond the z band
        let ray = Ray::new(
            Vec3::new(0.0, 0.0, -50.0),
            Vec3::new(0.0, -4.0, -20.0).normalize(),
        );
        let hit = scene_intersect(&scene, &ray);
        assert!(hit.is_none());
    }
}
