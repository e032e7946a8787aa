use anyhow::Result;
use glint_render::{render, save_ppm, Camera, RenderConfig};
use glint_scene::Scene;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = Scene::reference();
    let camera = Camera::new().with_resolution(1024, 768).with_fov(1.05);
    let config = RenderConfig::default();

    log::info!(
        "Rendering {}x{}: {} spheres, {} lights",
        camera.image_width,
        camera.image_height,
        scene.spheres.len(),
        scene.lights.len()
    );

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config);
    log::info!("Rendered in {:?}", start.elapsed());

    let filename = "out.ppm";
    save_ppm(&image, filename)?;
    log::info!("Saved {filename}");

    Ok(())
}
