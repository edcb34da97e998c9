use approx::assert_relative_eq;
use glam::{Mat4, Vec3};
use virtual_gallery::transform::Placement;

#[test]
fn plain_placement_is_translate_times_scale() {
    let placement = Placement::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 3.0, 4.0));
    let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
        * Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
    let model = placement.model_matrix();
    for (a, b) in model
        .to_cols_array()
        .iter()
        .zip(expected.to_cols_array().iter())
    {
        assert_relative_eq!(a, b, epsilon = 1e-6);
    }
}

#[test]
fn uniform_scale_keeps_the_normal_matrix_proportional() {
    let placement = Placement::new(Vec3::ZERO, Vec3::splat(5.0));
    let normal = placement
        .normal_matrix()
        .transform_vector3(Vec3::Y)
        .normalize();
    assert_relative_eq!(normal.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(normal.y, 1.0, epsilon = 1e-6);
    assert_relative_eq!(normal.z, 0.0, epsilon = 1e-6);
}

#[test]
fn normal_matrix_preserves_perpendicularity_under_non_uniform_scale() {
    // A painting-style squash: thin on Z. The plain model matrix would
    // skew a slanted normal; the inverse-transpose must not.
    let placement = Placement::new(Vec3::ZERO, Vec3::new(17.5, 17.5, 2.0)).rotated(Vec3::Y, 30.0);

    let surface_dir = Vec3::new(1.0, 0.0, 0.0);
    let normal = Vec3::new(0.0, 0.0, 1.0);

    let world_dir = placement.model_matrix().transform_vector3(surface_dir);
    let world_normal = placement.normal_matrix().transform_vector3(normal);

    assert_relative_eq!(
        world_dir.normalize().dot(world_normal.normalize()),
        0.0,
        epsilon = 1e-5
    );
}

#[test]
fn chained_rotations_apply_inner_to_outer() {
    // translate * rotY(90) * rotZ(90) * scale, as a painting on the east
    // wall is placed.
    let placement = Placement::new(Vec3::new(24.0, 0.0, 0.0), Vec3::ONE)
        .rotated(Vec3::Y, 90.0)
        .rotated(Vec3::Z, 90.0);

    // Local +X: rotZ sends it to +Y, rotY leaves +Y alone.
    let transformed = placement.model_matrix().transform_point3(Vec3::X);
    assert_relative_eq!(transformed.x, 24.0, epsilon = 1e-5);
    assert_relative_eq!(transformed.y, 1.0, epsilon = 1e-5);
    assert_relative_eq!(transformed.z, 0.0, epsilon = 1e-5);
}

#[test]
fn rotation_about_y_turns_a_wall_quad_sideways() {
    let placement = Placement::new(Vec3::ZERO, Vec3::ONE).rotated(Vec3::Y, 270.0);
    let transformed = placement.model_matrix().transform_vector3(Vec3::Z);
    assert_relative_eq!(transformed.x, -1.0, epsilon = 1e-5);
    assert_relative_eq!(transformed.z, 0.0, epsilon = 1e-5);
}
