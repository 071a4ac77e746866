//! Tracer

use crate::camera::Camera;
use crate::common::Float;
use crate::interaction::{ArcShader, ShadeInfo};
use crate::sampler::{ArcSampler, SamplerError};
use crate::scene::Scene;
use crate::spectrum::Color;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::sync::Arc;

/// The top-level render driver: traces jittered primary rays for every
/// pixel and averages the shaded radiance into a flat row-major RGB
/// buffer.
pub struct Tracer {
    /// The scene.
    scene: Arc<Scene>,

    /// The camera.
    camera: Camera,

    /// Image width in pixels.
    width: usize,

    /// Image height in pixels.
    height: usize,

    /// The shader invoked at each hit.
    shader: ArcShader,

    /// Maximum recursion depth for indirect bounces.
    max_depth: usize,

    /// Sub-pixel sample strategy.
    sampler: ArcSampler,

    /// Primary rays per pixel.
    samples_per_pixel: usize,
}

impl Tracer {
    /// Creates a new tracer.
    ///
    /// * `scene`             - The scene.
    /// * `camera`            - The camera.
    /// * `width`             - Image width in pixels.
    /// * `height`            - Image height in pixels.
    /// * `shader`            - The shader invoked at each hit.
    /// * `max_depth`         - Maximum recursion depth.
    /// * `sampler`           - Sub-pixel sample strategy.
    /// * `samples_per_pixel` - Primary rays per pixel.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        scene: Arc<Scene>,
        camera: Camera,
        width: usize,
        height: usize,
        shader: ArcShader,
        max_depth: usize,
        sampler: ArcSampler,
        samples_per_pixel: usize,
    ) -> Self {
        Self {
            scene,
            camera,
            width,
            height,
            shader,
            max_depth,
            sampler,
            samples_per_pixel,
        }
    }

    /// Returns the maximum recursion depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Renders the scene into `color_buf`, a pre-allocated row-major
    /// RGB buffer of `width * height * 3` floats (top row first).
    ///
    /// Scanlines render in parallel; every pixel regenerates a fresh
    /// sub-pixel batch. Fails up front if the configured sample count is
    /// invalid for the chosen sampler.
    ///
    /// * `color_buf` - The output radiance buffer.
    pub fn trace(&self, color_buf: &mut [Float]) -> Result<(), SamplerError> {
        assert_eq!(
            color_buf.len(),
            self.width * self.height * 3,
            "color buffer must hold width * height RGB triples"
        );

        // Surface an invalid sample count before any pixel is traced,
        // for the pixel sampler and for every sampling light.
        self.sampler.generate(self.samples_per_pixel)?;
        for light in self.scene.area_lights() {
            light.sample_points()?;
        }
        if let Some(env) = self.scene.env_light() {
            env.sample_hemisphere()?;
        }

        info!(
            "Rendering {}x{} at {} samples per pixel",
            self.width, self.height, self.samples_per_pixel
        );
        let progress = ProgressBar::new(self.height as u64);

        color_buf
            .par_chunks_mut(self.width * 3)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..self.width {
                    let color = self.trace_pixel(x, y);
                    row[x * 3] = color.r;
                    row[x * 3 + 1] = color.g;
                    row[x * 3 + 2] = color.b;
                }
                progress.inc(1);
            });

        progress.finish_and_clear();
        info!("Rendering finished");
        Ok(())
    }

    /// Traces all sub-pixel samples of one pixel and returns the
    /// averaged radiance.
    ///
    /// * `x` - Pixel x-coordinate.
    /// * `y` - Pixel y-coordinate.
    fn trace_pixel(&self, x: usize, y: usize) -> Color {
        let samples = self
            .sampler
            .generate(self.samples_per_pixel)
            .expect("sample count was validated before rendering started");

        let mut color = Color::BLACK;
        for sample in samples {
            let trace_x = x as Float - 0.5 + sample.x;
            let trace_y = y as Float - 0.5 + sample.y;
            let ray = self
                .camera
                .generate_ray(trace_x, trace_y, self.width, self.height);

            if let Some(hit) = self.scene.intersect(&ray, 0.0) {
                // A hit without a material is a pure blocker; it shades
                // to black.
                if let Some(material) = hit.shape.material() {
                    let info = ShadeInfo::new(
                        hit.point,
                        hit.shape.normal_at(&hit.point),
                        material,
                        hit.shape.epsilon(),
                        0,
                        self.max_depth,
                        ray,
                    );
                    color += self.shader.shade(&info, &self.scene, &self.camera);
                }
            }
        }
        color * (1.0 / self.samples_per_pixel as Float)
    }
}
