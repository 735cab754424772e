use crate::app::SharedApp;
use gallery_core::input::pointer_ndc;
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in CSS pixels relative to the canvas, plus the canvas CSS size.
#[inline]
fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let pos = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (pos, Vec2::new(rect.width() as f32, rect.height() as f32))
}

fn listen<E>(target: &web::EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Drag to orbit, wheel to zoom, click to select. Moves and releases are
/// tracked on the window so a drag that leaves the canvas still ends.
pub fn wire_pointer_handlers(app: SharedApp) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = app.borrow().canvas.clone();

    // pointerdown
    {
        let app = app.clone();
        let canvas_down = canvas.clone();
        listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            let (pos, _) = pointer_canvas_css(&ev, &canvas_down);
            app.borrow_mut().pointer.press(pos);
        });
    }

    // pointermove
    {
        let app = app.clone();
        let canvas_move = canvas.clone();
        listen(&window, "pointermove", move |ev: web::PointerEvent| {
            let (pos, size) = pointer_canvas_css(&ev, &canvas_move);
            let mut app = app.borrow_mut();
            let Some(delta) = app.pointer.drag_to(pos) else {
                return;
            };
            app.gallery.orbit_drag(delta.x, delta.y, size.y);
        });
    }

    // pointerup
    {
        let app = app.clone();
        let canvas_up = canvas.clone();
        listen(&window, "pointerup", move |ev: web::PointerEvent| {
            let (pos, size) = pointer_canvas_css(&ev, &canvas_up);
            let mut app = app.borrow_mut();
            if !app.pointer.release() {
                return;
            }
            let ndc = pointer_ndc(pos.x, pos.y, size.x, size.y);
            let ray = app.gallery.camera().ray_through_ndc(ndc);
            if app.gallery.select_at(ray, Instant::now()) {
                app.refresh_overlay();
            }
        });
    }

    // wheel
    {
        let app = app.clone();
        listen(&canvas, "wheel", move |ev: web::WheelEvent| {
            ev.prevent_default();
            app.borrow_mut().gallery.orbit_zoom(ev.delta_y() as f32);
        });
    }
}
