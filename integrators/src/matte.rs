//! Matte Integrator

use rt_core::camera::Camera;
use rt_core::interaction::{ShadeInfo, Shader};
use rt_core::scene::Scene;
use rt_core::spectrum::Color;

/// Flat diffuse shading: ambient term plus an unshadowed directional
/// diffuse term. No occlusion tests, no glossy highlights and no
/// recursion; useful for scene layout previews.
#[derive(Default)]
pub struct MatteShader;

impl MatteShader {
    /// Creates a new `MatteShader`.
    pub fn new() -> Self {
        Self
    }
}

impl Shader for MatteShader {
    /// Returns the ambient plus directional diffuse radiance. Absent
    /// lights and absent material components contribute zero.
    ///
    /// * `info`    - The shading context.
    /// * `scene`   - The scene.
    /// * `_camera` - Unused; no view-dependent terms.
    fn shade(&self, info: &ShadeInfo, scene: &Scene, _camera: &Camera) -> Color {
        if let Some(emission) = &info.material.emission {
            return emission.radiance();
        }

        let mut result = Color::BLACK;

        if let (Some(light), Some(ambient)) = (scene.ambient_light(), &info.material.ambient) {
            result += light.color() * ambient.brdf();
        }

        if let (Some(light), Some(diffuse)) = (scene.parallel_light(), &info.material.diffuse) {
            let cos = (-light.direction()).dot(&info.normal);
            if cos > 0.0 {
                result += light.color() * diffuse.brdf() * cos;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use rt_core::common::{Float, INV_PI};
    use rt_core::geometry::{Point3f, Ray, Vector3f};
    use rt_core::light::{AmbientLight, ParallelLight};
    use rt_core::material::Material;
    use std::sync::Arc;

    fn camera() -> Camera {
        Camera::new(
            Point3f::new(0.0, 0.0, -10.0),
            Point3f::zero(),
            1.0,
            (90.0 as Float).to_radians(),
            1.0,
        )
    }

    fn floor_info() -> ShadeInfo {
        ShadeInfo::new(
            Point3f::zero(),
            Vector3f::new(0.0, 1.0, 0.0),
            Arc::new(Material::glossy(
                0.4,
                0.8,
                Color::new(1.0, 1.0, 1.0),
                0.2,
                Color::new(1.0, 1.0, 1.0),
                1.0,
            )),
            0.001,
            0,
            1,
            Ray::new(Point3f::new(0.0, 5.0, 0.0), Vector3f::new(0.0, -1.0, 0.0)),
        )
    }

    #[test]
    fn empty_scene_shades_black() {
        let scene = Scene::new();
        let color = MatteShader::new().shade(&floor_info(), &scene, &camera());
        assert!(color.is_black());
    }

    #[test]
    fn ambient_and_parallel_terms_add_up() {
        let mut scene = Scene::new();
        scene.set_ambient_light(AmbientLight::new(0.5, Color::new(1.0, 1.0, 1.0)));
        scene.set_parallel_light(ParallelLight::new(
            2.0,
            Color::new(1.0, 1.0, 1.0),
            Vector3f::new(0.0, -1.0, 0.0),
        ));

        let color = MatteShader::new().shade(&floor_info(), &scene, &camera());
        // 0.5 * 0.4 ambient plus 2.0 * 0.8 / pi * cos(0) diffuse.
        let expected = 0.5 * 0.4 + 2.0 * 0.8 * INV_PI;
        assert!(approx_eq!(Float, color.r, expected, epsilon = 1e-5));
    }

    #[test]
    fn light_from_below_contributes_nothing_diffuse() {
        let mut scene = Scene::new();
        scene.set_parallel_light(ParallelLight::new(
            2.0,
            Color::new(1.0, 1.0, 1.0),
            Vector3f::new(0.0, 1.0, 0.0),
        ));

        let color = MatteShader::new().shade(&floor_info(), &scene, &camera());
        assert!(color.is_black());
    }
}
