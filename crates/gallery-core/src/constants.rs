use glam::Vec3;

// Shared layout/camera/tuning constants used by the web frontend.

// Room
pub const BACKGROUND_COLOR: u32 = 0x111111;
pub const FLOOR_SIZE: f32 = 30.0;
pub const FLOOR_COLOR: u32 = 0x222222;
pub const WALL_COLOR: u32 = 0xf5f5f5;
pub const BACK_WALL_SIZE: [f32; 2] = [30.0, 10.0];
pub const BACK_WALL_POSITION: [f32; 3] = [0.0, 5.0, -5.0];
pub const SIDE_WALL_SIZE: [f32; 2] = [20.0, 10.0];
pub const SIDE_WALL_X: f32 = 15.0; // left wall at -X, right wall at +X
pub const SIDE_WALL_CENTER: [f32; 2] = [5.0, 5.0]; // (y, z)

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const SPOT_POSITION: [f32; 3] = [0.0, 10.0, 10.0];
pub const SPOT_INTENSITY: f32 = 1.0;
pub const SPOT_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
pub const SPOT_PENUMBRA: f32 = 0.1;
pub const SPOT_DECAY: f32 = 2.0;
pub const SPOT_RANGE: f32 = 200.0;

// Painting layout
pub const PAINTING_WIDTH: f32 = 2.0; // fixed display width, height follows aspect
pub const PAINTING_SPACING: f32 = 3.5;
pub const PAINTING_BASE_Y: f32 = 1.5; // bottom edge of every picture
pub const FRAME_MARGIN: f32 = 0.1;
pub const FRAME_DEPTH: f32 = 0.05;
pub const FRAME_Z: f32 = -4.9;
pub const PICTURE_Z_OFFSET: f32 = 0.03; // picture sits just proud of its frame

pub const MAX_TEXTURE_DIM: u32 = 2048; // larger images are downscaled before upload

// Frame palette
pub const FRAME_COLOR: u32 = 0x8B4513;
pub const FRAME_HIGHLIGHT_COLOR: u32 = 0xFFD700;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const INITIAL_CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.0, 10.0);
pub const INITIAL_CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const OVERVIEW_EYE: Vec3 = Vec3::new(0.0, 5.0, 15.0);
pub const OVERVIEW_TARGET: Vec3 = Vec3::new(0.0, 5.0, 0.0);
pub const FOCUS_DISTANCE: f32 = 5.0; // how far in front of a painting the camera stops

// Fly-to animation
pub const TRANSITION_DURATION_MS: u64 = 1000;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2;
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const CLICK_MAX_TRAVEL_PX: f32 = 4.0; // pointer travel below this is a click, not a drag

// Device adaptation
pub const RESIZE_THROTTLE_MS: u64 = 100;
pub const HIGH_DENSITY_DPR: f64 = 2.0;
pub const MOBILE_PIXEL_RATIO_CAP: f64 = 2.0;
pub const LOW_POWER_RENDER_SCALE: f64 = 0.8;
pub const SHADOW_MAP_MOBILE: u32 = 512;
// desktop sizes are our own choice; the three.js default (512) only survives on mobile
pub const SHADOW_MAP_DESKTOP: u32 = 1024;
pub const SHADOW_MAP_HIGH_END: u32 = 2048;

// Overlay copy
pub const OVERVIEW_TITLE: &str = "Gallery Overview";
pub const OVERVIEW_DESCRIPTION: &str =
    "Use arrow keys to navigate between paintings. Press ESC to return to this overview.";
