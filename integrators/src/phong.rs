//! Phong Integrator

use crate::{hemisphere_direction, orthonormal_basis};
use rt_core::camera::Camera;
use rt_core::common::{min, Float};
use rt_core::geometry::{Ray, Vector3f};
use rt_core::interaction::{ShadeInfo, Shader};
use rt_core::sampler::{map_to_hemisphere, ArcSampler};
use rt_core::scene::Scene;
use rt_core::spectrum::Color;

/// Phong direct lighting with depth-limited specular reflection:
/// emission terminal case, ambient term with optional ambient
/// occlusion, directional-light diffuse + glossy with a shadow ray,
/// Monte-Carlo area lights, hemisphere-sampled environment light and
/// recursive mirror bounces.
pub struct PhongShader {
    /// Strategy for ambient-occlusion hemisphere probes.
    ao_sampler: ArcSampler,

    /// Number of ambient-occlusion probes.
    ao_samples: usize,

    /// Whether ambient occlusion modulates the ambient term.
    enable_ao: bool,
}

impl PhongShader {
    /// Creates a new `PhongShader` with ambient occlusion disabled and
    /// 256 probes once enabled.
    ///
    /// * `ao_sampler` - Strategy for ambient-occlusion probes.
    pub fn new(ao_sampler: ArcSampler) -> Self {
        Self {
            ao_sampler,
            ao_samples: 256,
            enable_ao: false,
        }
    }

    /// Sets the number of ambient-occlusion probes.
    ///
    /// * `n` - Probe count.
    pub fn with_ao_samples(mut self, n: usize) -> Self {
        self.ao_samples = n;
        self
    }

    /// Enables or disables ambient occlusion.
    ///
    /// * `enable` - The flag value.
    pub fn with_ambient_occlusion(mut self, enable: bool) -> Self {
        self.enable_ao = enable;
        self
    }

    /// Unit direction from the hit point toward the eye.
    fn to_eye(info: &ShadeInfo, camera: &Camera) -> Vector3f {
        (camera.pos() - info.point).normalize()
    }

    /// Environment-light term: casts one ray per hemisphere direction
    /// from the light's batch and averages the unoccluded diffuse +
    /// glossy contributions weighted by `cos/pdf`; occluded directions
    /// still count in the denominator.
    fn env_light(&self, info: &ShadeInfo, scene: &Scene, camera: &Camera) -> Color {
        let Some(env) = scene.env_light() else {
            return Color::BLACK;
        };

        let angles = match env.sample_hemisphere() {
            Ok(angles) => angles,
            Err(e) => {
                warn!("environment light sampling failed: {}", e);
                return Color::BLACK;
            }
        };
        if angles.is_empty() {
            return Color::BLACK;
        }

        let basis = orthonormal_basis(&info.normal);
        let to_eye = Self::to_eye(info, camera);
        let env_color = env.color();

        let mut result = Color::BLACK;
        for a in &angles {
            let direction = hemisphere_direction(&basis, a.x, a.y);
            let ray = Ray::new(info.point, direction);
            if scene.is_intersection(&ray, info.ep) {
                continue;
            }

            let cos = info.normal.dot(&direction);
            let weight = cos / env.pdf(cos);
            if let Some(diffuse) = &info.material.diffuse {
                result += env_color * diffuse.brdf() * weight;
            }
            if let Some(glossy) = &info.material.glossy {
                result += env_color
                    * glossy.brdf(&info.point, &info.normal, &direction, &to_eye)
                    * weight;
            }
        }
        result * (1.0 / angles.len() as Float)
    }

    /// Ambient term: ambient light color × ambient BRDF, scaled by the
    /// ambient-occlusion ratio when occlusion probing is enabled.
    fn ambient_light(&self, info: &ShadeInfo, scene: &Scene) -> Color {
        let Some(light) = scene.ambient_light() else {
            return Color::BLACK;
        };
        let Some(ambient) = &info.material.ambient else {
            return Color::BLACK;
        };
        light.color() * ambient.brdf() * self.ambient_occlusion(info, scene)
    }

    /// Probes the hemisphere above the hit point with cosine-weighted
    /// rays; the ratio starts at 0.1, gains `1/n` per unoccluded probe
    /// and caps at 1.0. Returns 1.0 when occlusion probing is disabled.
    fn ambient_occlusion(&self, info: &ShadeInfo, scene: &Scene) -> Float {
        if !self.enable_ao {
            return 1.0;
        }

        let angles = match self.ao_sampler.generate(self.ao_samples) {
            Ok(samples) => map_to_hemisphere(&samples, 1.0),
            Err(e) => {
                warn!("ambient occlusion sampling failed: {}", e);
                return 1.0;
            }
        };

        let basis = orthonormal_basis(&info.normal);
        let mut ratio = 0.1;
        let step = 1.0 / self.ao_samples as Float;
        for a in &angles {
            let direction = hemisphere_direction(&basis, a.x, a.y);
            let ray = Ray::new(info.point, direction);
            if !scene.is_intersection(&ray, info.ep) {
                ratio += step;
            }
        }
        min(ratio, 1.0)
    }

    /// Directional-light term: skipped when the light is absent, the
    /// surface is in shadow or faces away; otherwise diffuse plus
    /// optional glossy scaled by the incident cosine.
    fn parallel_light(&self, info: &ShadeInfo, scene: &Scene, camera: &Camera) -> Color {
        let Some(light) = scene.parallel_light() else {
            return Color::BLACK;
        };

        let light_dir = -light.direction();
        let shadow_ray = Ray::new(info.point, light_dir);
        if scene.is_intersection(&shadow_ray, info.ep) {
            return Color::BLACK;
        }

        let cos = light_dir.dot(&info.normal);
        if cos < 0.0 {
            return Color::BLACK;
        }

        let light_color = light.color();
        let mut result = Color::BLACK;
        if let Some(diffuse) = &info.material.diffuse {
            result += light_color * diffuse.brdf() * cos;
        }
        if let Some(glossy) = &info.material.glossy {
            let to_eye = Self::to_eye(info, camera);
            result += light_color * glossy.brdf(&info.point, &info.normal, &light_dir, &to_eye) * cos;
        }
        result
    }

    /// Area-light term: averages, over each light's fresh stratified
    /// surface batch, the mutually-visible samples' contribution
    /// `Le · brdf · geoterm / pdf` with the geometric term
    /// `cosθ·cosφ / r²`; both cosines must be positive.
    fn area_lights(&self, info: &ShadeInfo, scene: &Scene, camera: &Camera) -> Color {
        let to_eye = Self::to_eye(info, camera);

        let mut result = Color::BLACK;
        for light in scene.area_lights() {
            let points = match light.sample_points() {
                Ok(points) => points,
                Err(e) => {
                    warn!("area light sampling failed: {}", e);
                    continue;
                }
            };
            if points.is_empty() {
                continue;
            }
            let Some(emission) = light.shape.material().and_then(|m| m.emission) else {
                continue;
            };
            let radiance = emission.radiance();
            let pdf = light.pdf();

            let mut sum = Color::BLACK;
            for point in &points {
                if !scene.is_two_points_visible(&info.point, info.ep, point, light.shape.epsilon())
                {
                    continue;
                }

                let pp = *point - info.point;
                let light_dir = pp.normalize();
                let cos_theta = light_dir.dot(&info.normal);
                let cos_phi = (-light_dir).dot(&light.shape.normal_at(point));
                if cos_theta <= 0.0 || cos_phi <= 0.0 {
                    continue;
                }

                let geoterm = cos_theta * cos_phi / pp.length_squared();
                if let Some(diffuse) = &info.material.diffuse {
                    sum += radiance * diffuse.brdf() * (geoterm / pdf);
                }
                if let Some(glossy) = &info.material.glossy {
                    sum += radiance
                        * glossy.brdf(&info.point, &info.normal, &light_dir, &to_eye)
                        * (geoterm / pdf);
                }
            }
            result += sum * (1.0 / points.len() as Float);
        }
        result
    }

    /// Indirect mirror term: below the depth limit, reflect the
    /// eye-ward direction about the normal, trace the reflection and
    /// recursively shade the new hit attenuated by the mirror BRDF.
    /// Exceeding the limit truncates to zero.
    fn indirect(&self, info: &ShadeInfo, scene: &Scene, camera: &Camera) -> Color {
        let Some(mirror) = &info.material.mirror else {
            return Color::BLACK;
        };
        if info.depth >= info.max_depth {
            return Color::BLACK;
        }

        let reflect_dir = Vector3f::reflect(&info.normal, &-info.ray.d);
        let reflect_ray = Ray::new(info.point, reflect_dir);
        let Some(hit) = scene.intersect(&reflect_ray, info.ep) else {
            return Color::BLACK;
        };
        let Some(material) = hit.shape.material() else {
            return Color::BLACK;
        };

        let next = ShadeInfo::new(
            hit.point,
            hit.shape.normal_at(&hit.point),
            material,
            hit.shape.epsilon(),
            info.depth + 1,
            info.max_depth,
            reflect_ray,
        );
        self.shade(&next, scene, camera) * mirror.brdf()
    }
}

impl Shader for PhongShader {
    /// Returns the outgoing radiance: emitted radiance for emitters,
    /// otherwise direct (environment + ambient + directional + area)
    /// plus indirect mirror lighting.
    ///
    /// * `info`   - The shading context.
    /// * `scene`  - The scene.
    /// * `camera` - The camera.
    fn shade(&self, info: &ShadeInfo, scene: &Scene, camera: &Camera) -> Color {
        if let Some(emission) = &info.material.emission {
            return emission.radiance();
        }

        let direct = self.env_light(info, scene, camera)
            + self.ambient_light(info, scene)
            + self.parallel_light(info, scene, camera)
            + self.area_lights(info, scene, camera);
        direct + self.indirect(info, scene, camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_core::geometry::Point3f;
    use rt_core::light::AreaLight;
    use rt_core::material::Material;
    use rt_core::tracer::Tracer;
    use rt_samplers::{JitteredSampler, MultiJitteredSampler};
    use rt_shapes::{Plane, Sphere, Square};
    use std::sync::Arc;

    fn camera() -> Camera {
        Camera::new(
            Point3f::new(0.0, 20.0, -60.0),
            Point3f::zero(),
            1.0,
            (60.0 as Float).to_radians(),
            1.0,
        )
    }

    fn diffuse_only(kd: Float, cd: Color) -> Material {
        Material {
            diffuse: Some(rt_core::material::DiffuseMaterial::new(kd, cd)),
            ..Default::default()
        }
    }

    /// Emissive square hovering over a diffuse plane.
    fn light_over_plane(with_occluder: bool) -> Scene {
        let mut scene = Scene::new();

        let emitter = Arc::new(
            Square::new(
                Point3f::new(0.0, 30.0, 0.0),
                40.0,
                Vector3f::new(0.0, -1.0, 0.0),
                Some(Arc::new(Material::emissive(10.0, Color::new(1.0, 1.0, 1.0)))),
            )
            .with_epsilon(0.001),
        );
        scene.add_shape(emitter.clone());
        scene.add_area_light(AreaLight::new(
            emitter,
            Arc::new(MultiJitteredSampler::new()),
            16,
        ));

        scene.add_shape(Arc::new(
            Plane::new(
                Point3f::zero(),
                Vector3f::new(0.0, 1.0, 0.0),
                Some(Arc::new(diffuse_only(0.8, Color::new(1.0, 1.0, 1.0)))),
            )
            .with_epsilon(0.001),
        ));

        if with_occluder {
            // Opaque material-less blocker between the plane and the light.
            scene.add_shape(Arc::new(
                Square::new(
                    Point3f::new(0.0, 15.0, 0.0),
                    80.0,
                    Vector3f::new(0.0, -1.0, 0.0),
                    None,
                )
                .with_epsilon(0.001),
            ));
        }

        scene
    }

    fn plane_center_info(scene: &Scene) -> ShadeInfo {
        let ray = Ray::new(Point3f::new(0.0, 10.0, 0.0), Vector3f::new(0.0, -1.0, 0.0));
        let hit = scene.intersect(&ray, 0.0).expect("plane must be hit");
        ShadeInfo::new(
            hit.point,
            hit.shape.normal_at(&hit.point),
            hit.shape.material().expect("plane has a material"),
            hit.shape.epsilon(),
            0,
            1,
            ray,
        )
    }

    #[test]
    fn area_light_illuminates_plane_center() {
        let scene = light_over_plane(false);
        let shader = PhongShader::new(Arc::new(MultiJitteredSampler::new()));
        let info = plane_center_info(&scene);
        let color = shader.shade(&info, &scene, &camera());
        assert!(color.r > 0.0 && color.g > 0.0 && color.b > 0.0);
    }

    #[test]
    fn occluder_fully_shadows_area_light() {
        let scene = light_over_plane(true);
        let shader = PhongShader::new(Arc::new(MultiJitteredSampler::new()));
        let info = plane_center_info(&scene);
        assert!(shader.shade(&info, &scene, &camera()).is_black());
    }

    #[test]
    fn emission_is_terminal() {
        let scene = light_over_plane(false);
        let shader = PhongShader::new(Arc::new(MultiJitteredSampler::new()));
        let info = ShadeInfo::new(
            Point3f::new(0.0, 30.0, 0.0),
            Vector3f::new(0.0, -1.0, 0.0),
            Arc::new(Material::emissive(10.0, Color::new(1.0, 1.0, 1.0))),
            0.001,
            0,
            0,
            Ray::new(Point3f::zero(), Vector3f::new(0.0, 1.0, 0.0)),
        );
        assert_eq!(
            shader.shade(&info, &scene, &camera()),
            Color::new(10.0, 10.0, 10.0)
        );
    }

    /// Mirror sphere under an emissive square, lit only through the
    /// mirror bounce.
    fn mirror_under_emitter() -> Scene {
        let mut scene = Scene::new();
        scene.add_shape(Arc::new(
            Square::new(
                Point3f::new(0.0, 10.0, 0.0),
                20.0,
                Vector3f::new(0.0, -1.0, 0.0),
                Some(Arc::new(Material::emissive(5.0, Color::new(1.0, 1.0, 1.0)))),
            )
            .with_epsilon(0.001),
        ));
        scene.add_shape(Arc::new(
            Sphere::new(
                Point3f::zero(),
                1.0,
                Some(Arc::new(Material::mirror(
                    0.1,
                    0.5,
                    Color::new(1.0, 0.0, 0.0),
                    0.3,
                    Color::new(1.0, 1.0, 1.0),
                ))),
            )
            .with_epsilon(0.001),
        ));
        scene
    }

    fn sphere_top_info(max_depth: usize) -> ShadeInfo {
        // Looking straight down at the top of the sphere; the mirror
        // bounce goes straight up into the emitter.
        let ray = Ray::new(Point3f::new(0.0, 5.0, 0.0), Vector3f::new(0.0, -1.0, 0.0));
        ShadeInfo::new(
            Point3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            Arc::new(Material::mirror(
                0.1,
                0.5,
                Color::new(1.0, 0.0, 0.0),
                0.3,
                Color::new(1.0, 1.0, 1.0),
            )),
            0.001,
            0,
            max_depth,
            ray,
        )
    }

    #[test]
    fn indirect_term_is_zero_at_depth_limit() {
        let scene = mirror_under_emitter();
        let shader = PhongShader::new(Arc::new(MultiJitteredSampler::new()));
        let info = sphere_top_info(0);
        assert!(shader.shade(&info, &scene, &camera()).is_black());
    }

    #[test]
    fn indirect_term_reflects_emitter_below_depth_limit() {
        let scene = mirror_under_emitter();
        let shader = PhongShader::new(Arc::new(MultiJitteredSampler::new()));
        let info = sphere_top_info(1);
        let color = shader.shade(&info, &scene, &camera());
        // Radiance 5.0 attenuated by the mirror BRDF km = 0.3.
        assert!(color.r > 1.0);
    }

    #[test]
    fn end_to_end_render_produces_light_on_the_floor() {
        let scene = Arc::new(light_over_plane(false));
        let shader = Arc::new(PhongShader::new(Arc::new(MultiJitteredSampler::new())));
        let tracer = Tracer::new(
            scene,
            camera(),
            16,
            16,
            shader,
            1,
            Arc::new(JitteredSampler::new()),
            4,
        );
        let mut buf = vec![0.0; 16 * 16 * 3];
        tracer.trace(&mut buf).unwrap();
        assert!(buf.iter().any(|&c| c > 0.0));
    }

    #[test]
    fn invalid_pixel_sample_count_fails_before_rendering() {
        let scene = Arc::new(light_over_plane(false));
        let shader = Arc::new(PhongShader::new(Arc::new(MultiJitteredSampler::new())));
        let tracer = Tracer::new(
            scene,
            camera(),
            4,
            4,
            shader,
            1,
            Arc::new(JitteredSampler::new()),
            15,
        );
        let mut buf = vec![0.0; 4 * 4 * 3];
        assert!(tracer.trace(&mut buf).is_err());
    }
}
