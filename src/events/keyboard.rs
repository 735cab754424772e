use crate::app::{App, SharedApp};
use gallery_core::input::{key_action, KeyAction};
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_key(app: &mut App, action: KeyAction, now: Instant) {
    let gallery = &mut app.gallery;
    let last = gallery.len() as i64 - 1;
    match action {
        KeyAction::Previous => gallery.navigate(-1, now),
        KeyAction::Next => gallery.navigate(1, now),
        KeyAction::First => gallery.select_by_index(0, now),
        KeyAction::Last => gallery.select_by_index(last, now),
        KeyAction::Overview => gallery.reset(now),
        KeyAction::ToggleInfo => {
            gallery.toggle_info();
        }
    }
    app.refresh_overlay();
}

pub fn wire_global_keydown(app: SharedApp) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let Some(action) = key_action(&ev.key()) else {
                    return;
                };
                let mut app = app.borrow_mut();
                if !app.accepts_keys() {
                    log::debug!("[keys] {:?} ignored while loading", action);
                    return;
                }
                if action != KeyAction::ToggleInfo {
                    ev.prevent_default();
                }
                log::debug!("[keys] {:?}", action);
                handle_key(&mut app, action, Instant::now());
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
