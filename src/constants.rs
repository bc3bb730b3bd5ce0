//! DOM element ids and canvas styling for the web frontend.

// Element ids in index.html
pub const CANVAS_ID: &str = "visualization-canvas";
pub const LENGTH_INPUT_ID: &str = "length";
pub const WIDTH_INPUT_ID: &str = "width";
pub const HEIGHT_INPUT_ID: &str = "height";
pub const WEIGHT_INPUT_ID: &str = "weight";
pub const CALCULATE_BUTTON_ID: &str = "calculate";
pub const ZOOM_IN_BUTTON_ID: &str = "zoomIn";
pub const ZOOM_OUT_BUTTON_ID: &str = "zoomOut";
pub const RESULT_PANEL_ID: &str = "result";

// Grid strokes
pub const GRID_CENTER_COLOR: &str = "#444444";
pub const GRID_COLOR: &str = "#888888";
pub const GRID_LINE_WIDTH: f64 = 1.0;

// Annotations
pub const DIMENSION_LINE_WIDTH: f64 = 2.0;
pub const LABEL_FONT_PX: f64 = 12.0; // CSS pixels, scaled by devicePixelRatio
pub const LABEL_FONT_FAMILY: &str = "system-ui, sans-serif";
pub const LABEL_TEXT_COLOR: &str = "#333333";
pub const LABEL_BACKGROUND: &str = "rgba(255, 255, 255, 0.85)";
pub const LABEL_PADDING_PX: f64 = 4.0;
pub const LABEL_HEIGHT_EM: f64 = 1.5;
