#[macro_use]
extern crate log;

use clap::Parser;
use rt_core::camera::Camera;
use rt_core::common::Float;
use rt_core::geometry::{Point3f, Vector3f};
use rt_core::light::{AmbientLight, AreaLight};
use rt_core::material::Material;
use rt_core::scene::Scene;
use rt_core::spectrum::Color;
use rt_core::tracer::Tracer;
use rt_integrators::PhongShader;
use rt_samplers::MultiJitteredSampler;
use rt_shapes::{Sphere, Square};
use std::process;
use std::sync::Arc;

/// Command line options.
#[derive(Parser)]
#[command(author, version, about = "Whitted-style ray tracer", long_about = None)]
struct Options {
    /// Image width in pixels.
    #[arg(long, value_name = "NUM", default_value_t = 400)]
    width: usize,

    /// Image height in pixels.
    #[arg(long, value_name = "NUM", default_value_t = 400)]
    height: usize,

    /// Sub-pixel samples per pixel. Must be a perfect square for the
    /// stratified samplers.
    #[arg(long = "spp", value_name = "NUM", default_value_t = 16)]
    samples_per_pixel: usize,

    /// Maximum mirror recursion depth.
    #[arg(long = "depth", value_name = "NUM", default_value_t = 10)]
    max_depth: usize,

    /// Disable ambient occlusion.
    #[arg(long = "no-ao")]
    no_ambient_occlusion: bool,

    /// Ambient occlusion probes per shading point.
    #[arg(long = "ao-samples", value_name = "NUM", default_value_t = 100)]
    ao_samples: usize,

    /// Output image path.
    #[arg(long = "outfile", short = 'o', value_name = "FILE", default_value = "out.png")]
    image_file: String,
}

fn main() {
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = render(&options) {
        error!("{e}");
        process::exit(1);
    }
}

fn render(options: &Options) -> Result<(), String> {
    let scene = Arc::new(many_balls());
    let camera = Camera::new(
        Point3f::new(0.0, 60.0, -110.0),
        Point3f::zero(),
        0.01,
        (170.0 as Float).to_radians(),
        options.width as Float / options.height as Float,
    );

    let shader = Arc::new(
        PhongShader::new(Arc::new(MultiJitteredSampler::new()))
            .with_ao_samples(options.ao_samples)
            .with_ambient_occlusion(!options.no_ambient_occlusion),
    );

    let tracer = Tracer::new(
        scene,
        camera,
        options.width,
        options.height,
        shader,
        options.max_depth,
        Arc::new(MultiJitteredSampler::new()),
        options.samples_per_pixel,
    );

    let mut color_buf = vec![0.0; options.width * options.height * 3];
    tracer
        .trace(&mut color_buf)
        .map_err(|e| format!("rendering failed: {e}"))?;

    save_image(&color_buf, options.width, options.height, &options.image_file)
}

/// Four mirror balls under a square area light on a glossy floor.
fn many_balls() -> Scene {
    let mut scene = Scene::new();

    scene.set_ambient_light(AmbientLight::new(0.7, Color::new(1.0, 1.0, 1.0)));

    // Overhead square emitter, registered both as geometry and as an
    // area light.
    let emitter = Arc::new(
        Square::new(
            Point3f::new(0.0, 30.0, 0.0),
            40.0,
            Vector3f::new(0.0, -1.0, 0.0),
            Some(Arc::new(Material::emissive(10.0, Color::new(1.0, 1.0, 1.0)))),
        )
        .with_epsilon(0.00001),
    );
    scene.add_shape(emitter.clone());
    scene.add_area_light(AreaLight::new(
        emitter,
        Arc::new(MultiJitteredSampler::new()),
        64,
    ));

    let ball_colors = [
        (Point3f::new(-8.1, 0.0, 8.1), Color::new(1.0, 0.0, 0.0)),
        (Point3f::new(8.1, 0.0, 8.1), Color::new(0.0, 1.0, 0.0)),
        (Point3f::new(8.1, 0.0, -8.1), Color::new(0.0, 0.0, 1.0)),
        (Point3f::new(-8.1, 0.0, -8.1), Color::new(1.0, 1.0, 0.0)),
    ];
    for (center, color) in ball_colors {
        scene.add_shape(Arc::new(
            Sphere::new(
                center,
                8.0,
                Some(Arc::new(Material::mirror(
                    0.1,
                    0.5,
                    color,
                    0.3,
                    Color::new(1.0, 1.0, 1.0),
                ))),
            )
            .with_epsilon(0.00001),
        ));
    }

    scene.add_shape(Arc::new(
        Square::new(
            Point3f::new(0.0, -8.0, 0.0),
            400.0,
            Vector3f::new(0.0, 1.0, 0.0),
            Some(Arc::new(Material::glossy(
                0.6,
                0.8,
                Color::new(1.0, 1.0, 1.0),
                0.2,
                Color::new(0.0, 0.0, 1.0),
                1.0,
            ))),
        )
        .with_epsilon(0.00001),
    ));

    scene
}

/// Writes the radiance buffer as an 8-bit PNG, clamping each channel to
/// `[0, 1]` before quantizing.
fn save_image(color_buf: &[Float], width: usize, height: usize, path: &str) -> Result<(), String> {
    let pixels = color_buf
        .iter()
        .map(|&c| (c.clamp(0.0, 1.0) * 255.0) as u8)
        .collect();
    let image = image::RgbImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| String::from("radiance buffer does not match image dimensions"))?;
    image
        .save(path)
        .map_err(|e| format!("failed to write '{path}': {e}"))?;

    info!("wrote {}x{} image to '{}'", width, height, path);
    Ok(())
}
