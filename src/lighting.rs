use glam::Vec3;

/// Point light with its own color triple per Phong term.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

/// One spotlight position. Color, aim and cone angle are shared across the
/// whole fixture set, so they live in [`SpotParams`].
#[derive(Debug, Clone, Copy)]
pub struct Spotlight {
    pub position: Vec3,
}

/// Parameters shared by every spotlight in the scene.
#[derive(Debug, Clone, Copy)]
pub struct SpotParams {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    /// Direction the cones point, typically straight down.
    pub target: Vec3,
    /// Cosine of the cone half-angle. Fragments whose light direction has
    /// a larger cosine against the cone axis are lit.
    pub cutoff_cos: f32,
}

impl SpotParams {
    /// Convenience constructor taking the cone half-angle in degrees.
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, target: Vec3, cutoff_deg: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            target,
            cutoff_cos: cutoff_deg.to_radians().cos(),
        }
    }
}

/// Surface reflectance shared by every object in the gallery.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub specular: Vec3,
    pub shininess: f32,
}

/// Phong contribution of a single light: ambient + diffuse + specular.
///
/// The diffuse term clamps at zero when the light is behind the surface,
/// and the specular highlight tightens as the shininess exponent grows.
pub fn light_contribution(
    fragment: Vec3,
    normal: Vec3,
    view_dir: Vec3,
    light_position: Vec3,
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    material: &Material,
) -> Vec3 {
    let light_dir = (light_position - fragment).normalize();
    let reflection = reflect(-light_dir, normal);

    let diffuse_term = normal.dot(light_dir).max(0.0);
    let specular_term = reflection.dot(view_dir).max(0.0).powf(material.shininess);

    ambient + diffuse * diffuse_term + specular * material.specular * specular_term
}

/// Evaluates the full lighting sum at a fragment: the point light plus
/// every spotlight whose cone contains the fragment.
///
/// Each light contributes additively; a spotlight whose cone misses the
/// fragment contributes the zero vector and leaves the accumulated sum
/// untouched. The result is pre-texture radiance, later multiplied by the
/// sampled surface color.
pub fn shade(
    fragment: Vec3,
    normal: Vec3,
    camera_position: Vec3,
    point: &PointLight,
    spotlights: &[Spotlight],
    spot_params: &SpotParams,
    material: &Material,
) -> Vec3 {
    let normal = normal.normalize();
    let view_dir = (camera_position - fragment).normalize();

    let mut color = light_contribution(
        fragment,
        normal,
        view_dir,
        point.position,
        point.ambient,
        point.diffuse,
        point.specular,
        material,
    );

    let cone_axis = (-spot_params.target).normalize();
    for spotlight in spotlights {
        let light_dir = (spotlight.position - fragment).normalize();
        let spot_factor = light_dir.dot(cone_axis);
        if spot_factor > spot_params.cutoff_cos {
            color += light_contribution(
                fragment,
                normal,
                view_dir,
                spotlight.position,
                spot_params.ambient,
                spot_params.diffuse,
                spot_params.specular,
                material,
            );
        }
    }

    color
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_mirrors_across_the_normal() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let reflected = reflect(incident, Vec3::Y);
        assert!((reflected - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }
}
