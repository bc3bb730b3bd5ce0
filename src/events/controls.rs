use crate::constants::{
    CALCULATE_BUTTON_ID, RESULT_PANEL_ID, ZOOM_IN_BUTTON_ID, ZOOM_OUT_BUTTON_ID,
};
use crate::dom;
use crate::form;
use crate::summary;
use freight_core::{SceneGraph, Viewer, ZoomDirection};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_zoom_buttons(document: &web::Document, viewer: &Rc<RefCell<Viewer<SceneGraph>>>) {
    for (id, direction) in [
        (ZOOM_IN_BUTTON_ID, ZoomDirection::In),
        (ZOOM_OUT_BUTTON_ID, ZoomDirection::Out),
    ] {
        let viewer = viewer.clone();
        dom::add_click_listener(document, id, move || {
            viewer.borrow_mut().zoom(direction);
        });
    }
}

pub fn wire_calculate_button(
    document: &web::Document,
    viewer: &Rc<RefCell<Viewer<SceneGraph>>>,
) {
    let doc = document.clone();
    let viewer = viewer.clone();
    dom::add_click_listener(document, CALCULATE_BUTTON_ID, move || {
        calculate(&doc, &viewer);
    });
}

/// Read the form, reshape the box and publish the quote.
fn calculate(document: &web::Document, viewer: &Rc<RefCell<Viewer<SceneGraph>>>) {
    let input = form::read_freight_input(document);
    viewer.borrow_mut().update_dimensions(input.dimensions);

    let quote = input.quote();
    log::info!(
        "[freight] volume={:.2}cm³ chargeable={:.2}kg cost={:.2}",
        quote.volume_cm3,
        quote.chargeable_weight_kg,
        quote.cost
    );
    dom::set_inner_html(document, RESULT_PANEL_ID, &summary::summary_html(&quote));
}
