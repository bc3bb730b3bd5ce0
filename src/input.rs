use glam::Vec2;
use web_sys as web;

/// Pointer drag in progress on the canvas.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_px: Vec2,
}

impl DragState {
    /// Pixel movement since the previous sample, recording `pos` as the new one.
    pub fn advance(&mut self, pos: Vec2) -> Vec2 {
        let delta = pos - self.last_px;
        self.last_px = pos;
        delta
    }
}

/// Pointer position in the canvas' backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}
