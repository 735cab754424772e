use crate::dom;
use gallery_core::InfoText;
use web_sys as web;

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn render_info(document: &web::Document, info: &InfoText) {
    set_text(document, "painting-title", &info.title);
    set_text(document, "painting-year", &info.year);
    set_text(document, "painting-description", &info.description);
}

/// Slide the info panel in or out.
pub fn set_info_visible(document: &web::Document, visible: bool) {
    if let Some(el) = dom::html_element_by_id(document, "info") {
        let style = el.style();
        let (transform, opacity) = if visible {
            ("translateY(0)", "1")
        } else {
            ("translateY(100%)", "0")
        };
        let _ = style.set_property("transform", transform);
        let _ = style.set_property("opacity", opacity);
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = dom::html_element_by_id(document, "loading") {
        let _ = el.style().set_property("display", "none");
    }
}
