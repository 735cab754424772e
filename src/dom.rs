use gallery_core::RenderProfile;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Size the canvas backing store from its CSS box and the render profile.
/// With a render scale below 1 the browser stretches the smaller image back up.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, profile: &RenderProfile) {
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = profile.backing_size(rect.width(), rect.height());
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}
