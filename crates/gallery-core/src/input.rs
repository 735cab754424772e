use crate::camera::Ray;
use crate::constants::CLICK_MAX_TRAVEL_PX;
use glam::{Vec2, Vec3};

/// Keyboard commands understood by the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Previous,
    Next,
    First,
    Last,
    Overview,
    ToggleInfo,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::Previous),
        "ArrowRight" => Some(KeyAction::Next),
        "Home" => Some(KeyAction::First),
        "End" => Some(KeyAction::Last),
        "Escape" => Some(KeyAction::Overview),
        "i" | "I" => Some(KeyAction::ToggleInfo),
        _ => None,
    }
}

/// Pointer position inside a `width` x `height` rectangle mapped to NDC (+Y up).
#[inline]
pub fn pointer_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0)
}

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub down: bool,
    pub start: Vec2,
    pub last: Vec2,
    pub travel: f32,
}

impl PointerState {
    pub fn press(&mut self, at: Vec2) {
        self.down = true;
        self.start = at;
        self.last = at;
        self.travel = 0.0;
    }

    /// Record a move; returns the delta since the last event while the button is held.
    pub fn drag_to(&mut self, at: Vec2) -> Option<Vec2> {
        if !self.down {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        self.travel += delta.length();
        Some(delta)
    }

    /// Release the button; returns `true` when the press counts as a click.
    pub fn release(&mut self) -> bool {
        let was_down = self.down;
        self.down = false;
        was_down && self.travel < CLICK_MAX_TRAVEL_PX
    }
}

/// Distance along `ray` to an axis-aligned rectangle facing ±Z, if it is hit.
#[inline]
pub fn ray_rect_distance(ray: Ray, center: Vec3, size: Vec2) -> Option<f32> {
    if ray.direction.z.abs() < 1e-6 {
        return None;
    }
    let t = (center.z - ray.origin.z) / ray.direction.z;
    if t < 0.0 {
        return None;
    }
    let hit = ray.origin + ray.direction * t;
    let half = size * 0.5;
    let inside = (hit.x - center.x).abs() <= half.x && (hit.y - center.y).abs() <= half.y;
    inside.then_some(t)
}
