//! Selection and navigation over the loaded paintings.
//!
//! `Gallery` owns every piece of state the input handlers touch: the loaded
//! instances, the current selection, the overlay text and the camera rig.
//! The web layer forwards events into it and reads the state back each frame.

use crate::camera::{Camera, CameraRig, CameraTransition, Ray};
use crate::catalog::PaintingRecord;
use crate::constants::*;
use crate::input::ray_rect_distance;
use crate::scene::{srgb_hex_to_linear, Placement};
use glam::Vec3;
use instant::Instant;

/// A painting whose image loaded and which is now part of the scene.
#[derive(Clone, Debug)]
pub struct PaintingInstance {
    pub record: PaintingRecord,
    /// Position in the catalog (not in the loaded sequence).
    pub slot: usize,
    pub placement: Placement,
    pub frame_color: [f32; 3],
}

impl PaintingInstance {
    pub fn position(&self) -> Vec3 {
        self.placement.picture_center
    }

    /// Where the camera parks when this painting is selected.
    pub fn viewpoint(&self) -> Vec3 {
        self.position() + Vec3::new(0.0, 0.0, FOCUS_DISTANCE)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(usize),
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Selected(i) => Some(i),
        }
    }
}

/// The three text slots of the info panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoText {
    pub title: String,
    pub year: String,
    pub description: String,
}

impl InfoText {
    pub fn overview() -> Self {
        Self {
            title: OVERVIEW_TITLE.to_string(),
            year: String::new(),
            description: OVERVIEW_DESCRIPTION.to_string(),
        }
    }

    pub fn for_record(record: &PaintingRecord) -> Self {
        Self {
            title: record.title.to_string(),
            year: record.year.to_string(),
            description: record.description.to_string(),
        }
    }
}

pub struct Gallery {
    paintings: Vec<PaintingInstance>,
    selection: Selection,
    info: InfoText,
    info_visible: bool,
    rig: CameraRig,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            paintings: Vec::new(),
            selection: Selection::None,
            info: InfoText::overview(),
            info_visible: true,
            rig: CameraRig::default(),
        }
    }

    /// Append a freshly loaded painting; returns its index in the loaded sequence.
    pub fn add_painting(&mut self, record: PaintingRecord, slot: usize, placement: Placement) -> usize {
        self.paintings.push(PaintingInstance {
            record,
            slot,
            placement,
            frame_color: srgb_hex_to_linear(FRAME_COLOR),
        });
        self.paintings.len() - 1
    }

    pub fn paintings(&self) -> &[PaintingInstance] {
        &self.paintings
    }

    pub fn len(&self) -> usize {
        self.paintings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paintings.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<&PaintingInstance> {
        self.selection.index().and_then(|i| self.paintings.get(i))
    }

    pub fn info(&self) -> &InfoText {
        &self.info
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    /// Select painting `index` of the loaded sequence: highlight its frame,
    /// show its metadata and fly the camera in front of it.
    pub fn select(&mut self, index: usize, now: Instant) {
        let Some(instance) = self.paintings.get(index) else {
            return;
        };
        let (to, target) = (instance.viewpoint(), instance.position());
        self.info = InfoText::for_record(&instance.record);
        self.restore_selected_frame();
        self.paintings[index].frame_color = srgb_hex_to_linear(FRAME_HIGHLIGHT_COLOR);
        self.selection = Selection::Selected(index);
        self.rig.fly_to(to, target, now);
        log::debug!("[gallery] selected {} ({})", index, self.info.title);
    }

    /// Same as [`Gallery::select`] but ignores indices outside the loaded sequence.
    pub fn select_by_index(&mut self, index: i64, now: Instant) {
        if index >= 0 && (index as usize) < self.paintings.len() {
            self.select(index as usize, now);
        }
    }

    /// Step through the loaded paintings, wrapping at both ends.
    pub fn navigate(&mut self, direction: i32, now: Instant) {
        let count = self.paintings.len();
        if count == 0 || direction == 0 {
            return;
        }
        let next = match self.selection {
            Selection::None if direction > 0 => 0,
            Selection::None => count - 1,
            Selection::Selected(i) => {
                (i as i64 + direction as i64).rem_euclid(count as i64) as usize
            }
        };
        self.select(next, now);
    }

    /// Drop the selection and fly back to the overview.
    pub fn reset(&mut self, now: Instant) {
        self.restore_selected_frame();
        self.selection = Selection::None;
        self.info = InfoText::overview();
        self.rig.fly_to(OVERVIEW_EYE, OVERVIEW_TARGET, now);
    }

    /// Select the nearest painting hit by `ray`. Returns whether anything was hit.
    pub fn select_at(&mut self, ray: Ray, now: Instant) -> bool {
        match self.pick(ray) {
            Some(index) => {
                self.select(index, now);
                true
            }
            None => false,
        }
    }

    /// Index of the nearest picture intersected by `ray`.
    pub fn pick(&self, ray: Ray) -> Option<usize> {
        self.paintings
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                ray_rect_distance(ray, p.placement.picture_center, p.placement.picture_size)
                    .map(|t| (i, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    pub fn camera(&self) -> &Camera {
        &self.rig.camera
    }

    pub fn transition(&self) -> Option<&CameraTransition> {
        self.rig.transition()
    }

    pub fn is_transitioning(&self) -> bool {
        self.rig.is_transitioning()
    }

    /// Advance the camera one frame. Returns `true` while a fly-to is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.rig.tick(now)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.rig.camera.set_viewport(width, height);
    }

    /// Queue an orbit from a pointer drag. Dropped while a fly-to is running.
    pub fn orbit_drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.rig.is_transitioning() {
            self.rig.orbit.rotate_by_pixels(dx, dy, viewport_height);
        }
    }

    /// Queue a wheel zoom. Dropped while a fly-to is running.
    pub fn orbit_zoom(&mut self, wheel_delta: f32) {
        if !self.rig.is_transitioning() {
            self.rig.orbit.zoom(wheel_delta);
        }
    }

    pub fn toggle_info(&mut self) -> bool {
        self.info_visible = !self.info_visible;
        self.info_visible
    }

    fn restore_selected_frame(&mut self) {
        if let Some(i) = self.selection.index() {
            if let Some(p) = self.paintings.get_mut(i) {
                p.frame_color = srgb_hex_to_linear(FRAME_COLOR);
            }
        }
    }
}
