use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

use virtual_gallery::collision::{resolve_obstacles, RoomBounds};
use virtual_gallery::lighting::shade;
use virtual_gallery::scene::{create_gallery_scene, stand_footprints, EYE_HEIGHT, ROOM_HALF_EXTENT};

fn bench_obstacle_resolution(c: &mut Criterion) {
    let obstacles = stand_footprints();
    let room = RoomBounds::new(ROOM_HALF_EXTENT, EYE_HEIGHT);

    c.bench_function("resolve_obstacles miss", |b| {
        let previous = Vec3::new(0.0, EYE_HEIGHT, 0.0);
        let position = Vec3::new(0.25, EYE_HEIGHT, 0.0);
        b.iter(|| {
            black_box(resolve_obstacles(
                black_box(&obstacles),
                black_box(previous),
                black_box(position),
            ))
        })
    });

    c.bench_function("resolve_obstacles hit", |b| {
        let previous = Vec3::new(-12.7, EYE_HEIGHT, 10.0);
        let position = Vec3::new(-12.45, EYE_HEIGHT, 10.0);
        b.iter(|| {
            black_box(resolve_obstacles(
                black_box(&obstacles),
                black_box(previous),
                black_box(position),
            ))
        })
    });

    c.bench_function("room clamp", |b| {
        let position = Vec3::new(30.0, 5.0, -30.0);
        b.iter(|| black_box(room.clamp(black_box(position))))
    });
}

fn bench_shading(c: &mut Criterion) {
    let scene = create_gallery_scene();
    let eye = Vec3::new(-23.0, EYE_HEIGHT, 0.0);

    c.bench_function("shade under spotlight", |b| {
        let fragment = Vec3::new(10.0, -17.0, 10.0);
        b.iter(|| {
            black_box(shade(
                black_box(fragment),
                Vec3::Y,
                eye,
                &scene.point_light,
                &scene.spotlights,
                &scene.spot_params,
                &scene.material,
            ))
        })
    });

    c.bench_function("shade open floor", |b| {
        let fragment = Vec3::new(0.0, -25.0, 0.0);
        b.iter(|| {
            black_box(shade(
                black_box(fragment),
                Vec3::Y,
                eye,
                &scene.point_light,
                &scene.spotlights,
                &scene.spot_params,
                &scene.material,
            ))
        })
    });
}

criterion_group!(benches, bench_obstacle_resolution, bench_shading);
criterion_main!(benches);
