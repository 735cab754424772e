// Host-side tests for the camera rig: fly-to transitions and orbit limits.

use gallery_core::constants::*;
use gallery_core::*;
use glam::{Vec2, Vec3};
use instant::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn ease_in_out_quad_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert!((ease_in_out_quad(0.25) - 0.125).abs() < 1e-6);
    assert!((ease_in_out_quad(0.75) - 0.875).abs() < 1e-6);
}

#[test]
fn transition_progress_is_clamped_to_one() {
    let t0 = Instant::now();
    let t = CameraTransition::new(Vec3::ZERO, Vec3::X, Vec3::ZERO, t0);
    assert_eq!(t.duration, ms(TRANSITION_DURATION_MS));
    assert_eq!(t.progress(t0), 0.0);
    assert!((t.progress(t0 + ms(500)) - 0.5).abs() < 1e-3);
    assert_eq!(t.progress(t0 + ms(1000)), 1.0);
    assert_eq!(t.progress(t0 + ms(5000)), 1.0);
    assert!(t.is_finished(t0 + ms(1000)));
    assert!(!t.is_finished(t0 + ms(999)));
}

#[test]
fn eased_progress_never_goes_backwards() {
    let t0 = Instant::now();
    let t = CameraTransition::new(Vec3::ZERO, Vec3::X, Vec3::ZERO, t0);
    let mut prev = 0.0;
    for step in 0..=120 {
        let p = t.eased_progress(t0 + ms(step * 10));
        assert!(p >= prev, "eased progress dropped at {} ms", step * 10);
        assert!((0.0..=1.0).contains(&p));
        prev = p;
    }
}

#[test]
fn position_follows_the_eased_curve() {
    let t0 = Instant::now();
    let from = Vec3::new(0.0, 1.0, 10.0);
    let to = Vec3::new(4.0, 3.0, 0.0);
    let t = CameraTransition::new(from, to, Vec3::ZERO, t0);
    assert!(approx(t.position_at(t0), from));
    assert!(approx(t.position_at(t0 + ms(500)), from.lerp(to, 0.5)));
    assert!(approx(t.position_at(t0 + ms(250)), from.lerp(to, 0.125)));
    assert!(approx(t.position_at(t0 + ms(2000)), to));
}

#[test]
fn rig_finishes_transition_and_clears_slot() {
    let t0 = Instant::now();
    let mut rig = CameraRig::default();
    let to = Vec3::new(2.0, 2.0, 5.0);
    let target = Vec3::new(2.0, 2.0, 0.0);
    rig.fly_to(to, target, t0);

    assert!(rig.tick(t0 + ms(500)));
    assert!(rig.is_transitioning());
    assert!(approx(rig.camera.target, target));

    assert!(!rig.tick(t0 + ms(1000)));
    assert!(!rig.is_transitioning());
    assert!(approx(rig.camera.eye, to));
    assert!(approx(rig.camera.target, target));
}

#[test]
fn newer_transition_supersedes_the_running_one() {
    let t0 = Instant::now();
    let mut rig = CameraRig::default();
    let a = Vec3::new(-5.0, 2.0, 5.0);
    let b = Vec3::new(5.0, 2.0, 5.0);
    rig.fly_to(a, Vec3::new(-5.0, 2.0, 0.0), t0);
    rig.tick(t0 + ms(500));
    let halfway = rig.camera.eye;

    rig.fly_to(b, Vec3::new(5.0, 2.0, 0.0), t0 + ms(500));
    let t = rig.transition().expect("transition running");
    assert!(approx(t.from, halfway));
    assert!(approx(t.to, b));

    // the first transition's end time passes without snapping to `a`
    rig.tick(t0 + ms(1000));
    assert!(!approx(rig.camera.eye, a));
    rig.tick(t0 + ms(1500));
    assert!(approx(rig.camera.eye, b));
    assert!(!rig.is_transitioning());
}

#[test]
fn orbit_input_is_dropped_during_transition() {
    let t0 = Instant::now();
    let mut rig = CameraRig::default();
    rig.orbit.rotate_by_pixels(50.0, 0.0, 600.0);
    rig.fly_to(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 2.0, 0.0), t0);
    assert!(!rig.orbit.is_moving());

    rig.orbit.zoom(-1.0);
    rig.tick(t0 + ms(100));
    assert!(!rig.orbit.is_moving());
}

#[test]
fn zoom_is_clamped_to_distance_limits() {
    let mut rig = CameraRig::default();
    for _ in 0..200 {
        rig.orbit.zoom(-1.0);
        rig.tick(Instant::now());
    }
    let d = (rig.camera.eye - rig.camera.target).length();
    assert!((d - ORBIT_MIN_DISTANCE).abs() < 1e-3);

    for _ in 0..200 {
        rig.orbit.zoom(1.0);
        rig.tick(Instant::now());
    }
    let d = (rig.camera.eye - rig.camera.target).length();
    assert!((d - ORBIT_MAX_DISTANCE).abs() < 1e-3);
}

#[test]
fn orbit_never_goes_below_the_target() {
    let mut rig = CameraRig::default();
    rig.orbit.rotate_by_pixels(0.0, -10_000.0, 100.0);
    for _ in 0..50 {
        rig.tick(Instant::now());
        assert!(rig.camera.eye.y >= rig.camera.target.y - 1e-3);
    }
}

#[test]
fn orbit_motion_is_damped_to_rest() {
    let mut rig = CameraRig::default();
    let start = rig.camera.eye;
    rig.orbit.rotate_by_pixels(60.0, 0.0, 600.0);
    assert!(rig.orbit.is_moving());
    for _ in 0..400 {
        rig.tick(Instant::now());
    }
    assert!(!rig.orbit.is_moving());
    assert!(!approx(rig.camera.eye, start));
    // rotation keeps the distance
    let d0 = (start - rig.camera.target).length();
    let d1 = (rig.camera.eye - rig.camera.target).length();
    assert!((d0 - d1).abs() < 1e-3);
}

#[test]
fn centre_ray_points_at_the_target() {
    let mut camera = Camera::default();
    camera.set_viewport(1600, 900);
    let ray = camera.ray_through_ndc(Vec2::ZERO);
    let expected = (camera.target - camera.eye).normalize();
    assert!(approx(ray.origin, camera.eye));
    assert!(ray.direction.dot(expected) > 0.9999);
}
