#![cfg(target_arch = "wasm32")]
use gallery_core::{lighting, room, OneShot, PAINTINGS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod device;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("gallery-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #gallery-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let app = Rc::new(RefCell::new(app::App::new(
        document.clone(),
        canvas.clone(),
        PAINTINGS.len(),
    )));
    let renderer_ready: OneShot<()> = OneShot::new();
    let loading_settled: OneShot<usize> = OneShot::new();

    // sizes the canvas before the surface is created
    device::wire_device_adaptation(app.clone(), &renderer_ready);

    let mut gpu = render::GpuState::new(&canvas, lighting()).await?;
    for object in room() {
        gpu.add_object(&object);
    }
    app.borrow_mut().gpu = Some(gpu);
    log::info!("[init] renderer ready");
    renderer_ready.fire(());

    {
        let app = app.clone();
        loading_settled.subscribe(move |loaded: &usize| {
            let app = app.borrow();
            log::info!(
                "[init] loading settled: {} of {} paintings ({} failed)",
                loaded,
                PAINTINGS.len(),
                app.loads.failed()
            );
            overlay::hide_loading(&app.document);
        });
    }
    loader::load_catalog(app.clone(), loading_settled);

    events::wire_global_keydown(app.clone());
    events::wire_pointer_handlers(app.clone());
    app.borrow().refresh_overlay();

    frame::start_loop(app);
    Ok(())
}
