use crate::input::{self, DragState};
use freight_core::{SceneGraph, Viewer, ZoomDirection};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub viewer: Rc<RefCell<Viewer<SceneGraph>>>,
    pub drag: Rc<RefCell<DragState>>,
}

/// Drag on the canvas orbits the camera; the wheel takes zoom steps.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    viewer: &Rc<RefCell<Viewer<SceneGraph>>>,
) {
    let w = PointerWiring {
        canvas: canvas.clone(),
        viewer: viewer.clone(),
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
    wire_wheel(&w);
}

fn wire_pointerdown(w: &PointerWiring) {
    let w_in = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w_in.canvas);
        *w_in.drag.borrow_mut() = DragState {
            active: true,
            pointer_id: ev.pointer_id(),
            last_px: pos,
        };
        _ = w_in.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w_in = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = {
            let mut drag = w_in.drag.borrow_mut();
            if !drag.active || drag.pointer_id != ev.pointer_id() {
                return;
            }
            drag.advance(input::pointer_canvas_px(&ev, &w_in.canvas))
        };
        let viewport_h = w_in.canvas.height() as f32;
        w_in.viewer.borrow_mut().orbit(delta.x, delta.y, viewport_h);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring, event: &str) {
    let w_in = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut drag = w_in.drag.borrow_mut();
        if drag.active && drag.pointer_id == ev.pointer_id() {
            drag.active = false;
            _ = w_in.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &PointerWiring) {
    let w_in = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        if let Some(direction) = ZoomDirection::from_wheel_delta(ev.delta_y()) {
            w_in.viewer.borrow_mut().zoom(direction);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
