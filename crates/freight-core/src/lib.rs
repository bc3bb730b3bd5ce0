//! Platform-free core of the freight viewer.
//!
//! Maps freight dimensions onto a scaled box with edge annotations, keeps the
//! camera inside its zoom interval and prices shipments. Nothing here touches
//! the DOM, so the whole crate builds and tests on the host.

pub mod camera;
pub mod constants;
pub mod dimensions;
pub mod freight;
pub mod measure;
pub mod orbit;
pub mod projector;
pub mod scene;
pub mod viewer;
pub mod zoom;

pub use camera::*;
pub use dimensions::*;
pub use freight::*;
pub use measure::*;
pub use orbit::*;
pub use projector::*;
pub use scene::*;
pub use viewer::*;
pub use zoom::*;
