// Host-side tests for the room, painting layout and catalog.

use gallery_core::constants::*;
use gallery_core::geometry::{cuboid, plane};
use gallery_core::*;
use glam::Vec3;
use std::collections::HashSet;

#[test]
fn slots_form_a_row_centred_on_zero() {
    let first = Placement::for_slot(0, 7, 400, 300);
    let middle = Placement::for_slot(3, 7, 400, 300);
    let last = Placement::for_slot(6, 7, 400, 300);
    assert!((first.frame_center.x + 10.5).abs() < 1e-5);
    assert!(middle.frame_center.x.abs() < 1e-5);
    assert!((last.frame_center.x - 10.5).abs() < 1e-5);
    assert_eq!(Placement::for_slot(0, 1, 400, 300).frame_center.x, 0.0);
}

#[test]
fn pictures_share_a_bottom_edge_whatever_their_aspect() {
    for (w, h) in [(400, 300), (300, 400), (1000, 1000), (1920, 1080)] {
        let p = Placement::for_slot(0, 1, w, h);
        assert_eq!(p.picture_size.x, PAINTING_WIDTH);
        let expected_h = PAINTING_WIDTH * h as f32 / w as f32;
        assert!((p.picture_size.y - expected_h).abs() < 1e-5);
        let bottom = p.picture_center.y - p.picture_size.y / 2.0;
        assert!((bottom - PAINTING_BASE_Y).abs() < 1e-5);
    }
}

#[test]
fn picture_sits_just_in_front_of_its_frame() {
    let p = Placement::for_slot(2, 7, 400, 300);
    assert_eq!(p.frame_center.z, FRAME_Z);
    assert!((p.picture_center.z - (-4.87)).abs() < 1e-5);
    assert_eq!(p.picture_center.x, p.frame_center.x);
    assert_eq!(p.picture_center.y, p.frame_center.y);
}

#[test]
fn frame_and_picture_objects() {
    let p = Placement::for_slot(0, 1, 400, 300);
    let frame = p.frame_object();
    assert_eq!(frame.mesh.vertices.len(), 24);
    assert_eq!(frame.mesh.indices.len(), 36);
    assert!(frame.material.casts_shadow);
    assert!(!frame.material.unlit);
    assert_eq!(frame.material.color, srgb_hex_to_linear(FRAME_COLOR));

    let picture = p.picture_object();
    assert_eq!(picture.mesh.vertices.len(), 4);
    assert!(picture.material.unlit);
    assert_eq!(picture.material.color, [1.0, 1.0, 1.0]);
    assert_eq!(
        picture.transform.transform_point3(Vec3::ZERO),
        p.picture_center
    );
}

#[test]
fn meshes_index_their_own_vertices() {
    for mesh in [plane(2.0, 1.0), cuboid(1.0, 2.0, 3.0)] {
        let n = mesh.vertices.len() as u16;
        assert!(mesh.indices.iter().all(|&i| i < n));
        assert_eq!(mesh.indices.len() % 3, 0);
    }
    // plane faces +Z with v = 0 on the top edge
    let p = plane(2.0, 1.0);
    assert!(p.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
    let top_left = p.vertices[0];
    assert_eq!(top_left.position, [-1.0, 0.5, 0.0]);
    assert_eq!(top_left.uv, [0.0, 0.0]);
}

#[test]
fn room_has_floor_and_three_walls() {
    let objects = room();
    let labels: Vec<&str> = objects.iter().map(|o| o.label).collect();
    assert_eq!(labels, vec!["floor", "back_wall", "left_wall", "right_wall"]);
    let floor = &objects[0];
    let up = floor.transform.transform_vector3(Vec3::Z);
    assert!((up - Vec3::Y).length() < 1e-5);
}

#[test]
fn spot_light_aims_at_the_origin() {
    let light = lighting();
    assert_eq!(light.ambient.intensity, AMBIENT_INTENSITY);
    assert!(light.spot.casts_shadow);
    let dir = light.spot.direction();
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert!((dir - (Vec3::ZERO - light.spot.position).normalize()).length() < 1e-5);
    let clip = light.spot.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn srgb_conversion_endpoints() {
    assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    assert_eq!(srgb_hex_to_linear(0xffffff), [1.0, 1.0, 1.0]);
    let [r, g, b] = srgb_hex_to_linear(FRAME_HIGHLIGHT_COLOR);
    assert!(r > g && g > b);
}

#[test]
fn catalog_entries_are_unique_and_served_from_images() {
    assert_eq!(PAINTINGS.len(), 7);
    let ids: HashSet<u32> = PAINTINGS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PAINTINGS.len());
    for p in PAINTINGS {
        assert!(p.image_url().starts_with(IMAGE_BASE_PATH));
        assert!(p.image_url().ends_with(p.filename));
        assert!(!p.title.is_empty());
    }
}
