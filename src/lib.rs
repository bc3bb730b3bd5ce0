#![cfg(target_arch = "wasm32")]
use freight_core::{SceneGraph, Viewer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod input;
mod render;
mod summary;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, viewer: &Rc<RefCell<Viewer<SceneGraph>>>) {
    let canvas_resize = canvas.clone();
    let viewer_resize = viewer.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        viewer_resize.borrow_mut().resize(
            canvas_resize.width() as f32,
            canvas_resize.height() as f32,
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("freight-viz starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Size the backing store before the first projection so the camera
    // aspect matches the canvas.
    dom::sync_canvas_backing_size(&canvas);
    let renderer = render::CanvasRenderer::new(canvas.clone())?;
    let viewport = renderer.viewport();

    let viewer = Rc::new(RefCell::new(Viewer::new(
        SceneGraph::new(),
        viewport.x / viewport.y.max(1.0),
    )));

    wire_canvas_resize(&canvas, &viewer);
    events::wire_zoom_buttons(&document, &viewer);
    events::wire_calculate_button(&document, &viewer);
    events::wire_pointer_handlers(&canvas, &viewer);

    log::info!(
        "[init] canvas {}x{}, camera distance {:.2}",
        viewport.x,
        viewport.y,
        viewer.borrow().camera().distance()
    );

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { viewer, renderer })));
    Ok(())
}
