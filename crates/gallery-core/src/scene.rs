//! Declarative description of the gallery room and painting placement.
//!
//! The web renderer turns these into GPU buffers; nothing here touches a
//! device, so the layout rules can be exercised on the host.

use crate::constants::*;
use crate::geometry::{self, MeshData};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Convert a `0xRRGGBB` sRGB colour into linear RGB.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    /// Unlit surfaces show their colour/texture as-is (used for the pictures).
    pub unlit: bool,
    pub casts_shadow: bool,
    pub receives_shadow: bool,
}

impl Material {
    pub fn lit(hex: u32) -> Self {
        Self {
            color: srgb_hex_to_linear(hex),
            unlit: false,
            casts_shadow: false,
            receives_shadow: true,
        }
    }
}

pub struct SceneObject {
    pub label: &'static str,
    pub mesh: MeshData,
    pub transform: Mat4,
    pub material: Material,
}

pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Debug)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Half-angle of the outer cone, radians.
    pub angle: f32,
    /// Fraction of the cone over which the edge fades out.
    pub penumbra: f32,
    pub decay: f32,
    pub range: f32,
    pub casts_shadow: bool,
}

impl SpotLight {
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Perspective view-projection used to render the shadow map.
    pub fn view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.angle * 2.0, 1.0, 0.5, self.range);
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        proj * view
    }
}

pub struct Lighting {
    pub ambient: AmbientLight,
    pub spot: SpotLight,
}

pub fn lighting() -> Lighting {
    Lighting {
        ambient: AmbientLight {
            color: [1.0, 1.0, 1.0],
            intensity: AMBIENT_INTENSITY,
        },
        spot: SpotLight {
            position: Vec3::from_array(SPOT_POSITION),
            target: Vec3::ZERO,
            color: [1.0, 1.0, 1.0],
            intensity: SPOT_INTENSITY,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
            decay: SPOT_DECAY,
            range: SPOT_RANGE,
            casts_shadow: true,
        },
    }
}

/// Floor plus back, left and right walls.
pub fn room() -> Vec<SceneObject> {
    let wall = Material::lit(WALL_COLOR);
    let [side_y, side_z] = SIDE_WALL_CENTER;
    vec![
        SceneObject {
            label: "floor",
            mesh: geometry::plane(FLOOR_SIZE, FLOOR_SIZE),
            transform: Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            material: Material::lit(FLOOR_COLOR),
        },
        SceneObject {
            label: "back_wall",
            mesh: geometry::plane(BACK_WALL_SIZE[0], BACK_WALL_SIZE[1]),
            transform: Mat4::from_translation(Vec3::from_array(BACK_WALL_POSITION)),
            material: wall,
        },
        SceneObject {
            label: "left_wall",
            mesh: geometry::plane(SIDE_WALL_SIZE[0], SIDE_WALL_SIZE[1]),
            transform: Mat4::from_rotation_translation(
                Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
                Vec3::new(-SIDE_WALL_X, side_y, side_z),
            ),
            material: wall,
        },
        SceneObject {
            label: "right_wall",
            mesh: geometry::plane(SIDE_WALL_SIZE[0], SIDE_WALL_SIZE[1]),
            transform: Mat4::from_rotation_translation(
                Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2),
                Vec3::new(SIDE_WALL_X, side_y, side_z),
            ),
            material: wall,
        },
    ]
}

/// Where a painting and its frame sit on the back wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub frame_center: Vec3,
    pub picture_center: Vec3,
    /// Display size of the picture itself (the frame adds a margin).
    pub picture_size: Vec2,
}

impl Placement {
    /// Lay out catalog slot `slot` of `slots`, for an image of `image_w` x `image_h` pixels.
    ///
    /// Slots form one row centred on x = 0; every picture rests its bottom
    /// edge on the same line regardless of aspect ratio.
    pub fn for_slot(slot: usize, slots: usize, image_w: u32, image_h: u32) -> Self {
        let aspect = image_h as f32 / image_w.max(1) as f32;
        let height = PAINTING_WIDTH * aspect;
        let start_x = -((slots.saturating_sub(1)) as f32 * PAINTING_SPACING) / 2.0;
        let x = start_x + slot as f32 * PAINTING_SPACING;
        let y = PAINTING_BASE_Y + height / 2.0;
        let frame_center = Vec3::new(x, y, FRAME_Z);
        Self {
            frame_center,
            picture_center: frame_center + Vec3::new(0.0, 0.0, PICTURE_Z_OFFSET),
            picture_size: Vec2::new(PAINTING_WIDTH, height),
        }
    }

    pub fn frame_object(&self) -> SceneObject {
        SceneObject {
            label: "frame",
            mesh: geometry::cuboid(
                self.picture_size.x + FRAME_MARGIN,
                self.picture_size.y + FRAME_MARGIN,
                FRAME_DEPTH,
            ),
            transform: Mat4::from_translation(self.frame_center),
            material: Material {
                casts_shadow: true,
                ..Material::lit(FRAME_COLOR)
            },
        }
    }

    pub fn picture_object(&self) -> SceneObject {
        SceneObject {
            label: "picture",
            mesh: geometry::plane(self.picture_size.x, self.picture_size.y),
            transform: Mat4::from_translation(self.picture_center),
            material: Material {
                color: [1.0, 1.0, 1.0],
                unlit: true,
                casts_shadow: false,
                receives_shadow: false,
            },
        }
    }
}
