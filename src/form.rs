use crate::constants::{HEIGHT_INPUT_ID, LENGTH_INPUT_ID, WEIGHT_INPUT_ID, WIDTH_INPUT_ID};
use crate::dom;
use freight_core::FreightInput;
use web_sys as web;

/// Read the four freight fields; anything unparsable counts as 0.
pub fn read_freight_input(document: &web::Document) -> FreightInput {
    FreightInput::parse(
        &dom::input_value(document, LENGTH_INPUT_ID),
        &dom::input_value(document, WIDTH_INPUT_ID),
        &dom::input_value(document, HEIGHT_INPUT_ID),
        &dom::input_value(document, WEIGHT_INPUT_ID),
    )
}
