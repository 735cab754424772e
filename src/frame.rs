use crate::app::{App, SharedApp};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

impl App {
    pub fn frame(&mut self) {
        let now = Instant::now();
        self.gallery.tick(now);

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gallery.set_viewport(w, h);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            g.sync_frame_colors(self.gallery.paintings());
            match g.render(self.gallery.camera()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Timeout) => log::warn!("render: surface timeout"),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(app: SharedApp) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
