use criterion::{Criterion, black_box, criterion_group, criterion_main};
use impact_visibility::{
    Frustum, Scissors, VisibilityConfig,
    camera::{CameraState, InfinitePerspectiveTransform},
    light::{Light, LightPosition},
};
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, UnitVector3, point, vector};

fn config() -> VisibilityConfig {
    let mut config = VisibilityConfig::default();
    config.frustum.field_of_view = 70.0;
    config.frustum.aspect_ratio = 16.0 / 9.0;
    config.frustum.far_distance = 500.0;
    config
}

fn camera_state(config: &VisibilityConfig, frame: u64) -> CameraState {
    let projection = InfinitePerspectiveTransform::new(
        config.frustum.field_of_view(),
        config.frustum.aspect_ratio,
        config.frustum.near_distance,
    );
    let view_transform = Isometry3::from_parts(
        Translation3::new(1.0, -2.0, 3.0),
        UnitQuaternion::from_euler_angles(0.1, 0.4, -0.2),
    );
    CameraState::new(&view_transform, projection.to_matrix(), frame)
}

fn calculated_frustum() -> Frustum {
    let config = config();
    let mut frustum = Frustum::from_config(&config);
    frustum.calculate(&camera_state(&config, 0));
    frustum
}

pub fn bench_frustum_calculate(c: &mut Criterion) {
    let config = config();
    let mut frustum = Frustum::from_config(&config);
    let camera = camera_state(&config, 0);
    c.bench_function("frustum_calculate", |b| {
        b.iter(|| {
            frustum.calculate(black_box(&camera));
            black_box(frustum.world_hull());
        })
    });
}

pub fn bench_scissors_update_with_bounding_hull(c: &mut Criterion) {
    let frustum = calculated_frustum();
    let points: Vec<Point3<f32>> = (0..1000)
        .map(|i| {
            let t = i as f32 * 0.01;
            point![t.sin() * 20.0, t.cos() * 10.0, -30.0 - t]
        })
        .collect();
    c.bench_function("scissors_update_with_bounding_hull", |b| {
        b.iter(|| {
            let mut scissors = Scissors::empty();
            scissors.update_with_world_space_bounding_hull(
                black_box(&points),
                frustum.view_projection_matrix(),
            );
            black_box(scissors);
        })
    });
}

pub fn bench_shadow_caster_volume(c: &mut Criterion) {
    let frustum = calculated_frustum();
    let lights = [
        LightPosition::Positional(point![0.0, 50.0, -40.0]),
        LightPosition::Positional(point![5.0, 0.0, 40.0]),
        LightPosition::Directional(UnitVector3::new_normalize(vector![0.3, 1.0, -0.2])),
    ];
    c.bench_function("shadow_caster_volume", |b| {
        b.iter(|| {
            for light in &lights {
                black_box(frustum.calculate_shadow_caster_volume(
                    black_box(light),
                    frustum.min_shadow_caster_plane_count(light),
                ));
            }
        })
    });
}

pub fn bench_light_scissors(c: &mut Criterion) {
    let frustum = calculated_frustum();
    let lights: Vec<Light> = (0..100)
        .map(|i| {
            let t = i as f32 * 0.1;
            Light::point(point![t.sin() * 30.0, t.cos() * 5.0, -10.0 - t], 4.0)
        })
        .collect();
    c.bench_function("light_scissors", |b| {
        b.iter(|| {
            for light in &lights {
                black_box(frustum.calculate_light_scissors(black_box(light)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_frustum_calculate,
    bench_scissors_update_with_bounding_hull,
    bench_shadow_caster_volume,
    bench_light_scissors,
);
criterion_main!(benches);
