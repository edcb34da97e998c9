use glam::{Mat4, Quat, Vec3};

/// Placement of a renderable object: scale applied first in local space,
/// then the axis-angle rotations in order, then the translation.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub translation: Vec3,
    /// Rotations applied innermost-last, i.e. `rotations[0]` is the
    /// outermost rotation, matching a translate-rotate-rotate-scale chain.
    pub rotations: [Option<(Vec3, f32)>; 2],
    pub scale: Vec3,
}

impl Placement {
    pub fn new(translation: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotations: [None, None],
            scale,
        }
    }

    /// Adds a rotation of `angle_deg` degrees about `axis`, composed
    /// inside any rotation already present: the newest rotation sits
    /// closest to the scale and is applied first in local space.
    pub fn rotated(mut self, axis: Vec3, angle_deg: f32) -> Self {
        let slot = if self.rotations[0].is_none() { 0 } else { 1 };
        self.rotations[slot] = Some((axis, angle_deg));
        self
    }

    pub fn model_matrix(&self) -> Mat4 {
        let mut model = Mat4::from_translation(self.translation);
        for rotation in self.rotations.iter().flatten() {
            let (axis, angle_deg) = *rotation;
            model *= Mat4::from_quat(Quat::from_axis_angle(
                axis.normalize(),
                angle_deg.to_radians(),
            ));
        }
        model * Mat4::from_scale(self.scale)
    }

    /// Inverse-transpose of the model matrix. Keeps normals perpendicular
    /// to their surfaces under non-uniform scale, which the plain model
    /// matrix would skew.
    pub fn normal_matrix(&self) -> Mat4 {
        self.model_matrix().inverse().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_applies_before_translation() {
        let placement = Placement::new(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(2.0));
        let transformed = placement.model_matrix().transform_point3(Vec3::X);
        assert!((transformed - Vec3::new(12.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn rotation_order_matches_the_builder_chain() {
        // translate * rotY(90) * rotZ(90) * scale
        let placement = Placement::new(Vec3::ZERO, Vec3::ONE)
            .rotated(Vec3::Y, 90.0)
            .rotated(Vec3::Z, 90.0);
        // X -> (rotZ) Y -> (rotY) Y
        let transformed = placement.model_matrix().transform_point3(Vec3::X);
        assert!((transformed - Vec3::Y).length() < 1e-5);
    }
}
