//! Camera, orbit controls and the fly-to transition.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};
use instant::{Duration, Instant};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: INITIAL_CAMERA_EYE,
            target: INITIAL_CAMERA_TARGET,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// World-space picking ray through a point given in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray {
            origin: self.eye,
            direction: (far - self.eye).normalize(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Quadratic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

/// One fly-to animation: eye moves from `from` to `to`, look-at pinned to `target`.
#[derive(Clone, Debug)]
pub struct CameraTransition {
    pub from: Vec3,
    pub to: Vec3,
    pub target: Vec3,
    pub started: Instant,
    pub duration: Duration,
}

impl CameraTransition {
    pub fn new(from: Vec3, to: Vec3, target: Vec3, started: Instant) -> Self {
        Self {
            from,
            to,
            target,
            started,
            duration: Duration::from_millis(TRANSITION_DURATION_MS),
        }
    }

    /// Linear time fraction, clamped to `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = if now > self.started {
            now - self.started
        } else {
            Duration::ZERO
        };
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn eased_progress(&self, now: Instant) -> f32 {
        ease_in_out_quad(self.progress(now))
    }

    pub fn position_at(&self, now: Instant) -> Vec3 {
        self.from.lerp(self.to, self.eased_progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Spherical coordinates in the Y-up convention: `phi` from +Y, `theta` around Y from +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Spherical {
    radius: f32,
    phi: f32,
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

/// Damped orbit around the camera's look-at target (drag to rotate, wheel to zoom).
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            max_polar: ORBIT_MAX_POLAR,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Queue a rotation from a pointer drag of `dx`, `dy` pixels on a viewport `height` tall.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, height: f32) {
        let h = height.max(1.0);
        self.delta_theta -= std::f32::consts::TAU * dx / h;
        self.delta_phi -= std::f32::consts::TAU * dy / h;
    }

    /// Queue a dolly step; negative `wheel_delta` moves towards the target.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if wheel_delta < 0.0 {
            self.scale *= ORBIT_ZOOM_STEP;
        } else if wheel_delta > 0.0 {
            self.scale /= ORBIT_ZOOM_STEP;
        }
    }

    /// Drop any queued motion.
    pub fn cancel(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
    }

    pub fn is_moving(&self) -> bool {
        self.delta_theta.abs() > 1e-5 || self.delta_phi.abs() > 1e-5 || self.scale != 1.0
    }

    /// Apply one frame of damped motion and the distance/polar limits.
    pub fn update(&mut self, camera: &mut Camera) {
        let offset = camera.eye - camera.target;
        let mut s = Spherical::from_offset(offset);
        s.theta += self.delta_theta * self.damping;
        s.phi += self.delta_phi * self.damping;
        s.phi = s.phi.clamp(1e-6, self.max_polar.min(std::f32::consts::PI - 1e-6));
        s.radius = (s.radius * self.scale).clamp(self.min_distance, self.max_distance);
        camera.eye = camera.target + s.to_offset();

        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        self.scale = 1.0;
    }
}

/// Camera plus at most one active fly-to transition.
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    pub camera: Camera,
    pub orbit: OrbitControls,
    transition: Option<CameraTransition>,
}

impl CameraRig {
    /// Start flying towards `to` while looking at `target`; any in-flight transition is discarded.
    pub fn fly_to(&mut self, to: Vec3, target: Vec3, now: Instant) {
        self.transition = Some(CameraTransition::new(self.camera.eye, to, target, now));
        self.orbit.cancel();
    }

    pub fn transition(&self) -> Option<&CameraTransition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Advance one frame. Returns `true` while a transition is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.transition.take() {
            Some(t) => {
                self.camera.eye = t.position_at(now);
                self.camera.target = t.target;
                if !t.is_finished(now) {
                    self.transition = Some(t);
                }
                self.orbit.cancel();
            }
            None if self.orbit.is_moving() => self.orbit.update(&mut self.camera),
            None => {}
        }
        self.transition.is_some()
    }
}
