use glam::Vec3;
use virtual_gallery::camera::{Camera, MouseLook, MOUSE_SENSITIVITY, MOVE_SPEED, STRAFE_SPEED};

#[test]
fn front_stays_unit_length_across_the_angle_range() {
    let mut camera = Camera::new();
    for yaw in (-720..=720).step_by(45) {
        for pitch in (-89..=89).step_by(23) {
            camera.yaw = yaw as f32;
            camera.pitch = pitch as f32;
            let len = camera.front().length();
            assert!(
                (len - 1.0).abs() < 1e-5,
                "front not unit at yaw {yaw} pitch {pitch}: {len}"
            );
        }
    }
}

#[test]
fn pitch_never_leaves_the_clamp_range() {
    let mut camera = Camera::new();
    for _ in 0..100 {
        camera.look(0.0, 50.0);
        assert!(camera.pitch <= 89.0);
    }
    for _ in 0..300 {
        camera.look(0.0, -50.0);
        assert!(camera.pitch >= -89.0);
    }
}

#[test]
fn yaw_accumulates_without_clamping() {
    let mut camera = Camera::new();
    for _ in 0..100 {
        camera.look(50.0, 0.0);
    }
    assert!((camera.yaw - 100.0 * 50.0 * MOUSE_SENSITIVITY).abs() < 1e-3);
}

#[test]
fn raw_downward_motion_lowers_the_pitch() {
    // Device deltas count screen-down as positive y.
    let mut camera = Camera::new();
    camera.look_raw(0.0, 20.0);
    assert!(camera.pitch < 0.0);
    camera.look_raw(0.0, -40.0);
    assert!(camera.pitch > 0.0);
}

#[test]
fn raw_deltas_match_the_absolute_position_path() {
    // The same physical mouse motion must turn the view identically
    // whether it arrives as raw device deltas (grabbed pointer) or as
    // absolute cursor positions (ungrabbed fallback).
    let mut raw_camera = Camera::new();
    raw_camera.look_raw(15.0, -10.0);
    raw_camera.look_raw(-5.0, 25.0);

    let mut abs_camera = Camera::new();
    let mut mouse = MouseLook::new();
    mouse.delta(400.0, 300.0);
    for position in [(415.0, 290.0), (410.0, 315.0)] {
        if let Some((dx, dy)) = mouse.delta(position.0, position.1) {
            abs_camera.look(dx, dy);
        }
    }

    assert_eq!(raw_camera.yaw, abs_camera.yaw);
    assert_eq!(raw_camera.pitch, abs_camera.pitch);
}

#[test]
fn upward_mouse_delta_raises_the_pitch() {
    let mut camera = Camera::new();
    let mut mouse = MouseLook::new();
    assert_eq!(mouse.delta(400.0, 300.0), None);
    // Cursor moving up the screen means a smaller y coordinate.
    let (dx, dy) = mouse.delta(400.0, 280.0).unwrap();
    camera.look(dx, dy);
    assert!(camera.pitch > 0.0);
}

#[test]
fn forward_step_covers_the_move_speed() {
    let mut camera = Camera::new();
    let before = camera.position;
    camera.step(virtual_gallery::camera::MoveDirection::Forward);
    assert!((camera.position.distance(before) - MOVE_SPEED).abs() < 1e-5);
}

#[test]
fn strafe_step_is_half_a_forward_step() {
    let mut camera = Camera::new();
    let before = camera.position;
    camera.step(virtual_gallery::camera::MoveDirection::Right);
    assert!((camera.position.distance(before) - STRAFE_SPEED).abs() < 1e-5);
    assert!((STRAFE_SPEED - MOVE_SPEED / 2.0).abs() < f32::EPSILON);
}

#[test]
fn strafing_is_horizontal_even_when_pitched() {
    let mut camera = Camera::new();
    camera.pitch = 45.0;
    let before = camera.position;
    camera.step(virtual_gallery::camera::MoveDirection::Left);
    assert!((camera.position.y - before.y).abs() < 1e-6);
}

#[test]
fn view_matrix_maps_the_look_target_to_negative_z() {
    let camera = Camera::new();
    let target = camera.position + camera.front();
    let in_view = camera.view_matrix().transform_point3(target);
    assert!(in_view.x.abs() < 1e-5);
    assert!(in_view.y.abs() < 1e-5);
    assert!((in_view.z + 1.0).abs() < 1e-5);
}

#[test]
fn recapture_does_not_jump_the_view() {
    let mut camera = Camera::new();
    let mut mouse = MouseLook::new();
    mouse.delta(100.0, 100.0);
    mouse.reset();

    let front_before = camera.front();
    // A far-away first sample after reset must only seed the reference.
    if let Some((dx, dy)) = mouse.delta(900.0, 700.0) {
        camera.look(dx, dy);
    }
    assert_eq!(camera.front(), front_before);
}

#[test]
fn default_camera_starts_by_the_west_wall() {
    let camera = Camera::default();
    assert_eq!(camera.position, Vec3::new(-23.0, -15.0, 0.0));
    assert_eq!(camera.yaw, 0.0);
    assert_eq!(camera.pitch, 0.0);
}
