use crate::app::SharedApp;
use crate::dom;
use gallery_core::constants::RESIZE_THROTTLE_MS;
use gallery_core::{DeviceCapabilities, OneShot, Throttle};
use instant::{Duration, Instant};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn detect() -> DeviceCapabilities {
    let Some(window) = web::window() else {
        return DeviceCapabilities::detect("", 1.0);
    };
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    DeviceCapabilities::detect(&user_agent, window.device_pixel_ratio())
}

fn apply_profile(app: &SharedApp) {
    let caps = detect();
    let profile = caps.profile();
    let mut app = app.borrow_mut();
    if app.profile != profile {
        log::info!("[device] {:?} -> {:?}", caps.class(), profile);
    }
    app.profile = profile;
    dom::sync_canvas_backing_size(&app.canvas, &profile);
    if let Some(gpu) = app.gpu.as_mut() {
        gpu.apply_profile(&profile);
    }
}

/// Pick the render profile now, apply it to the renderer once it is ready and
/// keep it current on (throttled) window resizes.
pub fn wire_device_adaptation(app: SharedApp, renderer_ready: &OneShot<()>) {
    {
        let caps = detect();
        let mut a = app.borrow_mut();
        a.profile = caps.profile();
        log::info!("[device] class={:?} dpr={}", caps.class(), caps.device_pixel_ratio);
        dom::sync_canvas_backing_size(&a.canvas, &a.profile);
    }
    renderer_ready.subscribe(move |_| {
        apply_profile(&app);
        wire_resize(app);
    });
}

fn wire_resize(app: SharedApp) {
    let mut throttle = Throttle::new(Duration::from_millis(RESIZE_THROTTLE_MS));
    let closure = Closure::wrap(Box::new(move || {
        if throttle.ready(Instant::now()) {
            apply_profile(&app);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
