use crate::render::CanvasRenderer;
use freight_core::{SceneGraph, Viewer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub viewer: Rc<RefCell<Viewer<SceneGraph>>>,
    pub renderer: CanvasRenderer,
}

impl FrameContext {
    /// Advance the controls and redraw. Runs every frame whether or not
    /// anything changed.
    pub fn frame(&mut self) {
        let mut viewer = self.viewer.borrow_mut();
        viewer.tick();
        self.renderer.render(viewer.scene(), viewer.camera());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &TickClosure) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
