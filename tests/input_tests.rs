// Host-side tests for pure input functions.

use gallery_core::input::*;
use gallery_core::Ray;
use glam::{Vec2, Vec3};

#[test]
fn key_mapping() {
    assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Previous));
    assert_eq!(key_action("ArrowRight"), Some(KeyAction::Next));
    assert_eq!(key_action("Home"), Some(KeyAction::First));
    assert_eq!(key_action("End"), Some(KeyAction::Last));
    assert_eq!(key_action("Escape"), Some(KeyAction::Overview));
    assert_eq!(key_action("i"), Some(KeyAction::ToggleInfo));
    assert_eq!(key_action("I"), Some(KeyAction::ToggleInfo));
    assert_eq!(key_action("ArrowUp"), None);
    assert_eq!(key_action("a"), None);
}

#[test]
fn pointer_ndc_corners() {
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}

#[test]
fn short_press_is_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0));
    assert_eq!(p.drag_to(Vec2::new(101.0, 101.0)), Some(Vec2::new(1.0, 1.0)));
    assert!(p.release());
    assert!(!p.down);
}

#[test]
fn drag_is_not_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0));
    p.drag_to(Vec2::new(103.0, 100.0));
    p.drag_to(Vec2::new(100.0, 100.0));
    // back where it started, but it travelled 6px
    assert!(!p.release());
}

#[test]
fn moves_without_press_are_ignored() {
    let mut p = PointerState::default();
    assert_eq!(p.drag_to(Vec2::new(5.0, 5.0)), None);
    assert!(!p.release());
}

#[test]
fn ray_rect_hit_and_misses() {
    let center = Vec3::new(0.0, 2.0, -5.0);
    let size = Vec2::new(2.0, 1.0);
    let hit = Ray {
        origin: Vec3::new(0.5, 2.2, 5.0),
        direction: Vec3::NEG_Z,
    };
    let t = ray_rect_distance(hit, center, size).expect("hit");
    assert!((t - 10.0).abs() < 1e-5);

    let outside = Ray {
        origin: Vec3::new(1.5, 2.0, 5.0),
        direction: Vec3::NEG_Z,
    };
    assert_eq!(ray_rect_distance(outside, center, size), None);

    let behind = Ray {
        origin: Vec3::new(0.0, 2.0, 5.0),
        direction: Vec3::Z,
    };
    assert_eq!(ray_rect_distance(behind, center, size), None);

    let parallel = Ray {
        origin: Vec3::new(0.0, 2.0, 5.0),
        direction: Vec3::X,
    };
    assert_eq!(ray_rect_distance(parallel, center, size), None);
}

#[test]
fn pointer_state_is_reachable_from_the_crate_root() {
    let mut p = gallery_core::PointerState::default();
    p.press(Vec2::new(10.0, 10.0));
    assert!(p.down);
    assert_eq!(p.drag_to(Vec2::new(10.0, 12.0)), Some(Vec2::new(0.0, 2.0)));
    assert!(p.release());
    assert_eq!(gallery_core::key_action("End"), Some(gallery_core::KeyAction::Last));
}
