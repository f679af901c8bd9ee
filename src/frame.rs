use site_core::FrameGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Runs a render callback on the next animation frame, at most once per
/// frame no matter how many times it is requested.
pub struct FrameScheduler {
    window: web::Window,
    gate: Rc<RefCell<FrameGate>>,
    tick: Closure<dyn FnMut()>,
}

impl FrameScheduler {
    pub fn new(window: web::Window, mut render: impl FnMut() + 'static) -> Self {
        let gate = Rc::new(RefCell::new(FrameGate::default()));
        let gate_tick = gate.clone();
        let tick = Closure::wrap(Box::new(move || {
            gate_tick.borrow_mut().begin_frame();
            render();
        }) as Box<dyn FnMut()>);
        Self { window, gate, tick }
    }

    pub fn request(&self) {
        let schedule = self.gate.borrow_mut().request();
        if !schedule {
            return;
        }
        if let Err(e) = self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
        {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            // Let the next event try again.
            self.gate.borrow_mut().begin_frame();
        }
    }
}
