pub mod controls;
pub mod pointer;

pub use controls::{wire_calculate_button, wire_zoom_buttons};
pub use pointer::wire_pointer_handlers;
