//! End-to-end behaviour of the wave field through the public API.

use std::time::Duration;

use glam::{Mat4, Vec2, Vec3};

use wavefield::camera::CameraSystem;
use wavefield::field::WaveField;
use wavefield::params::{FieldPhysics, FixedCamera, RenderConfig, RippleParams};
use wavefield::picking::Ray;

fn four_by_four() -> WaveField {
    let physics = FieldPhysics {
        grid_size: 4,
        grid_spacing: 1.0,
        ..FieldPhysics::default()
    };
    WaveField::with_transform(physics, RippleParams::default(), Mat4::IDENTITY)
}

#[test]
fn test_four_by_four_heights_at_t0() {
    let mut field = four_by_four();
    field.update(Duration::ZERO);

    // (i, j) = (0, 0) sits at (-2, -2):
    // 0.5 * (0.8 sin(-0.6) + 0.6 sin(-0.8) + 0.4 sin(-0.8) + 0.3 sin(0.1 sqrt 8))
    let corner = field.grid.height(field.grid.index(0, 0));
    assert!((corner - (-0.542_672_05)).abs() < 1e-5, "got {}", corner);

    // (i, j) = (3, 2) sits at (1, 0):
    // 0.5 * (0.8 sin(0.3) + 0.4 sin(0.2) + 0.3 sin(0.1))
    let edge = field.grid.height(field.grid.index(3, 2));
    assert!((edge - 0.172_916_96).abs() < 1e-5, "got {}", edge);

    // Center (0, 0) is flat at t = 0
    assert_eq!(field.grid.height(field.grid.index(2, 2)), 0.0);

    // Every point matches the closed-form base waves
    for position in &field.grid.positions {
        let (x, z) = (position[0], position[2]);
        let expected = 0.5
            * ((x * 0.3).sin() * 0.8
                + (z * 0.4).sin() * 0.6
                + ((x + z) * 0.2).sin() * 0.4
                + ((x * x + z * z).sqrt() * 0.1).sin() * 0.3);
        assert!((position[1] - expected).abs() < 1e-6);
    }
}

#[test]
fn test_click_seed_then_expire() {
    let mut field = WaveField::new(FieldPhysics::default(), RippleParams::default());
    let camera = CameraSystem::new(FixedCamera::default(), &RenderConfig::default());
    let lifetime = field.ripple_params.lifetime;
    let speed = field.ripple_params.propagation_speed;

    let t0 = Duration::from_millis(500);
    let ray = camera.ray_from_pixel(640.0, 360.0, 1280, 720);
    let id = field.seed_from_ray(&ray, t0).expect("center click lands on the field");

    // The ripple is stored in the tilted group's local frame, on the plane
    let ripple = *field.ripples().get(id).unwrap();
    let world = field.plane().to_world(Vec3::new(ripple.origin.x, 0.0, ripple.origin.y));
    assert!((world - ray.origin).cross(ray.direction).length() < 1e-3);

    for step in 1..30 {
        let now = t0 + Duration::from_millis(step * 100);
        assert!(field.ripples().contains(id));
        let expected = (now - t0).as_secs_f32() * speed;
        assert!((ripple.radius_at(now, &field.ripple_params) - expected).abs() < 1e-4);
        field.expire_due(now);
    }

    field.expire_due(t0 + lifetime);
    assert!(!field.ripples().contains(id));
    assert_eq!(field.next_expiry(), None);
}

#[test]
fn test_missed_click_leaves_state_untouched() {
    let mut field = WaveField::new(FieldPhysics::default(), RippleParams::default());
    let camera = CameraSystem::new(FixedCamera::default(), &RenderConfig::default());

    field.seed_at_local(Vec2::new(2.0, 2.0), Duration::ZERO);
    let before: Vec<_> = field.ripples().iter().copied().collect();

    // Top edge of the screen reaches the ground far outside the plane
    let sky = camera.ray_from_pixel(640.0, 0.0, 1280, 720);
    assert!(field.seed_from_ray(&sky, Duration::from_secs(1)).is_none());

    // Sideways ray never meets the plane
    let parallel = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::X);
    assert!(field.seed_from_ray(&parallel, Duration::from_secs(1)).is_none());

    let after: Vec<_> = field.ripples().iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn test_simultaneous_ripples_sum() {
    let mut field = four_by_four();
    let now = Duration::from_millis(200); // radius 1.6, band (0, 1.6)
    let point = field.grid.index(2, 2); // (0, 0)

    field.update(now);
    let base = field.grid.height(point);

    field.seed_at_local(Vec2::new(0.8, 0.0), Duration::ZERO);
    field.update(now);
    let only_a = field.grid.height(point) - base;
    field.reset();

    field.seed_at_local(Vec2::new(0.0, 1.2), Duration::ZERO);
    field.update(now);
    let only_b = field.grid.height(point) - base;
    field.reset();

    field.seed_at_local(Vec2::new(0.8, 0.0), Duration::ZERO);
    field.seed_at_local(Vec2::new(0.0, 1.2), Duration::ZERO);
    field.update(now);
    let both = field.grid.height(point) - base;

    assert!(only_a.abs() > 1e-4 && only_b.abs() > 1e-4);
    assert!((both - (only_a + only_b)).abs() < 1e-5);
}
