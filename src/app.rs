use crate::overlay;
use crate::render::GpuState;
use gallery_core::{
    DecodedImage, Gallery, LoadTracker, PaintingRecord, Placement, PointerState, RenderProfile,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

/// Everything the event handlers and the frame loop share.
pub struct App {
    pub gallery: Gallery,
    pub gpu: Option<GpuState>,
    pub loads: LoadTracker,
    pub profile: RenderProfile,
    pub pointer: PointerState,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
}

impl App {
    pub fn new(document: web::Document, canvas: web::HtmlCanvasElement, expected_loads: usize) -> Self {
        Self {
            gallery: Gallery::new(),
            gpu: None,
            loads: LoadTracker::new(expected_loads),
            profile: RenderProfile::default(),
            pointer: PointerState::default(),
            canvas,
            document,
        }
    }

    /// Realise a loaded image as a framed picture. Returns `false` when there is
    /// no renderer to upload into.
    pub fn add_painting(
        &mut self,
        record: PaintingRecord,
        slot: usize,
        slots: usize,
        image: &DecodedImage,
    ) -> bool {
        let Some(gpu) = self.gpu.as_mut() else {
            return false;
        };
        let placement = Placement::for_slot(slot, slots, image.source_width, image.source_height);
        gpu.add_painting(&placement, image);
        let index = self.gallery.add_painting(record, slot, placement);
        log::info!(
            "[app] painting {} '{}' in slot {} ({}x{})",
            index,
            record.title,
            slot,
            image.width,
            image.height
        );
        true
    }

    /// Keyboard navigation only makes sense once the catalog settled with something in it.
    pub fn accepts_keys(&self) -> bool {
        self.loads.is_settled() && !self.gallery.is_empty()
    }

    pub fn refresh_overlay(&self) {
        overlay::render_info(&self.document, self.gallery.info());
        overlay::set_info_visible(&self.document, self.gallery.info_visible());
    }
}
