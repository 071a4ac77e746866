//! Materials

use crate::common::{max, Float, INV_PI};
use crate::geometry::{Point3f, Vector3f};
use crate::spectrum::Color;

/// Constant ambient response.
#[derive(Copy, Clone, Debug)]
pub struct AmbientMaterial {
    /// Ambient reflection coefficient.
    pub ka: Float,

    /// Diffuse color.
    pub cd: Color,
}

impl AmbientMaterial {
    /// Creates a new ambient component.
    ///
    /// * `ka` - Ambient reflection coefficient.
    /// * `cd` - Diffuse color.
    pub fn new(ka: Float, cd: Color) -> Self {
        Self { ka, cd }
    }

    /// Evaluates the BRDF. Direction independent.
    pub fn brdf(&self) -> Color {
        self.cd * self.ka
    }
}

/// Lambertian diffuse response.
#[derive(Copy, Clone, Debug)]
pub struct DiffuseMaterial {
    /// Diffuse reflection coefficient.
    pub kd: Float,

    /// Diffuse color.
    pub cd: Color,
}

impl DiffuseMaterial {
    /// Creates a new diffuse component.
    ///
    /// * `kd` - Diffuse reflection coefficient.
    /// * `cd` - Diffuse color.
    pub fn new(kd: Float, cd: Color) -> Self {
        Self { kd, cd }
    }

    /// Evaluates the BRDF. Direction independent.
    pub fn brdf(&self) -> Color {
        self.cd * (self.kd * INV_PI)
    }
}

/// Phong specular response.
#[derive(Copy, Clone, Debug)]
pub struct GlossyMaterial {
    /// Specular reflection coefficient.
    pub ks: Float,

    /// Specular color.
    pub cs: Color,

    /// Cosine-power exponent controlling highlight tightness.
    pub exponent: Float,
}

impl GlossyMaterial {
    /// Creates a new glossy component.
    ///
    /// * `ks`       - Specular reflection coefficient.
    /// * `cs`       - Specular color.
    /// * `exponent` - Cosine-power exponent.
    pub fn new(ks: Float, cs: Color, exponent: Float) -> Self {
        Self { ks, cs, exponent }
    }

    /// Evaluates the BRDF: reflect the incident direction about the
    /// normal and raise its alignment with the outgoing direction to the
    /// cosine power.
    ///
    /// * `n`  - The surface normal.
    /// * `wi` - Incident direction, pointing away from the surface.
    /// * `wo` - Outgoing direction, pointing away from the surface.
    pub fn brdf(&self, _p: &Point3f, n: &Vector3f, wi: &Vector3f, wo: &Vector3f) -> Color {
        let r = Vector3f::reflect(n, wi);
        let v = max(0.0, r.dot(wo)).powf(self.exponent);
        self.cs * (self.ks * v)
    }
}

/// Emissive response; has no BRDF. Emitters are shaded by looking up
/// their radiance directly.
#[derive(Copy, Clone, Debug)]
pub struct EmissionMaterial {
    /// Emission power scale.
    pub ke: Float,

    /// Emitted color.
    pub ce: Color,
}

impl EmissionMaterial {
    /// Creates a new emissive component.
    ///
    /// * `ke` - Emission power scale.
    /// * `ce` - Emitted color.
    pub fn new(ke: Float, ce: Color) -> Self {
        Self { ke, ce }
    }

    /// Returns the emitted radiance.
    pub fn radiance(&self) -> Color {
        self.ce * self.ke
    }
}

/// Perfect mirror response: a flat attenuation applied to recursively
/// traced incident radiance.
#[derive(Copy, Clone, Debug)]
pub struct MirrorMaterial {
    /// Mirror reflection coefficient.
    pub km: Float,

    /// Mirror color.
    pub cm: Color,
}

impl MirrorMaterial {
    /// Creates a new mirror component.
    ///
    /// * `km` - Mirror reflection coefficient.
    /// * `cm` - Mirror color.
    pub fn new(km: Float, cm: Color) -> Self {
        Self { km, cm }
    }

    /// Evaluates the BRDF. Direction independent.
    pub fn brdf(&self) -> Color {
        self.cm * self.km
    }
}

/// A per-surface bundle of independently optional reflectance
/// components. An absent slot means the surface has no response of that
/// kind and contributes zero.
#[derive(Clone, Debug, Default)]
pub struct Material {
    /// Ambient component.
    pub ambient: Option<AmbientMaterial>,

    /// Diffuse component.
    pub diffuse: Option<DiffuseMaterial>,

    /// Glossy component.
    pub glossy: Option<GlossyMaterial>,

    /// Emissive component.
    pub emission: Option<EmissionMaterial>,

    /// Mirror component.
    pub mirror: Option<MirrorMaterial>,
}

impl Material {
    /// Creates an ambient + diffuse + glossy surface.
    ///
    /// * `ka`       - Ambient reflection coefficient.
    /// * `kd`       - Diffuse reflection coefficient.
    /// * `cd`       - Diffuse color.
    /// * `ks`       - Specular reflection coefficient.
    /// * `cs`       - Specular color.
    /// * `exponent` - Cosine-power exponent.
    pub fn glossy(ka: Float, kd: Float, cd: Color, ks: Float, cs: Color, exponent: Float) -> Self {
        Self {
            ambient: Some(AmbientMaterial::new(ka, cd)),
            diffuse: Some(DiffuseMaterial::new(kd, cd)),
            glossy: Some(GlossyMaterial::new(ks, cs, exponent)),
            ..Default::default()
        }
    }

    /// Creates an ambient + diffuse + mirror surface.
    ///
    /// * `ka` - Ambient reflection coefficient.
    /// * `kd` - Diffuse reflection coefficient.
    /// * `cd` - Diffuse color.
    /// * `km` - Mirror reflection coefficient.
    /// * `cm` - Mirror color.
    pub fn mirror(ka: Float, kd: Float, cd: Color, km: Float, cm: Color) -> Self {
        Self {
            ambient: Some(AmbientMaterial::new(ka, cd)),
            diffuse: Some(DiffuseMaterial::new(kd, cd)),
            mirror: Some(MirrorMaterial::new(km, cm)),
            ..Default::default()
        }
    }

    /// Creates a purely emissive surface.
    ///
    /// * `ke` - Emission power scale.
    /// * `ce` - Emitted color.
    pub fn emissive(ke: Float, ce: Color) -> Self {
        Self {
            emission: Some(EmissionMaterial::new(ke, ce)),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PI;
    use float_cmp::approx_eq;

    #[test]
    fn diffuse_brdf_is_lambertian() {
        let d = DiffuseMaterial::new(0.8, Color::new(1.0, 0.5, 0.25));
        let brdf = d.brdf();
        assert!(approx_eq!(Float, brdf.r, 0.8 / PI, epsilon = 1e-6));
        assert!(approx_eq!(Float, brdf.g, 0.4 / PI, epsilon = 1e-6));
    }

    #[test]
    fn glossy_brdf_clamps_backward_reflection() {
        let g = GlossyMaterial::new(0.3, Color::new(1.0, 1.0, 1.0), 20.0);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let wi = Vector3f::new(0.0, 1.0, 0.0);
        // Outgoing direction opposite the reflection: cosine clamps to 0.
        let wo = Vector3f::new(0.0, -1.0, 0.0);
        assert!(g.brdf(&Point3f::zero(), &n, &wi, &wo).is_black());
    }

    #[test]
    fn factory_slots() {
        let m = Material::mirror(0.1, 0.5, Color::new(1.0, 0.0, 0.0), 0.3, Color::new(1.0, 1.0, 1.0));
        assert!(m.ambient.is_some());
        assert!(m.diffuse.is_some());
        assert!(m.glossy.is_none());
        assert!(m.emission.is_none());
        assert!(m.mirror.is_some());

        let e = Material::emissive(10.0, Color::new(1.0, 1.0, 1.0));
        assert!(e.emission.is_some());
        assert!(e.diffuse.is_none());
        assert_eq!(e.emission.unwrap().radiance(), Color::new(10.0, 10.0, 10.0));
    }
}
