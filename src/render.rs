//! Canvas 2D painter for the retained scene.
//!
//! Draw order is grid, box faces, dimension lines, then labels so the
//! annotations always sit on top of the box, as an HTML label overlay would.

use crate::constants::{
    DIMENSION_LINE_WIDTH, GRID_CENTER_COLOR, GRID_COLOR, GRID_LINE_WIDTH, LABEL_BACKGROUND,
    LABEL_FONT_FAMILY, LABEL_FONT_PX, LABEL_HEIGHT_EM, LABEL_PADDING_PX, LABEL_TEXT_COLOR,
};
use anyhow::anyhow;
use freight_core::{
    BoxMesh, Camera, GridHelper, Light, LineSegment, Renderable, SceneGraph, TextLabel,
};
use glam::{Vec2, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

// Outward normal and corners of each face of the unit cube.
const CUBE_FACES: [(Vec3, [Vec3; 4]); 6] = [
    (
        Vec3::X,
        [
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
        ],
    ),
    (
        Vec3::NEG_X,
        [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, -0.5),
        ],
    ),
    (
        Vec3::Y,
        [
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.5, 0.5, -0.5),
        ],
    ),
    (
        Vec3::NEG_Y,
        [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(-0.5, -0.5, 0.5),
        ],
    ),
    (
        Vec3::Z,
        [
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ],
    ),
    (
        Vec3::NEG_Z,
        [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
        ],
    ),
];

pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Backing-store size in device pixels.
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn render(&self, scene: &SceneGraph, camera: &Camera) {
        let viewport = self.viewport();
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(viewport.x), f64::from(viewport.y));

        let items = scene.ordered();
        let lights: Vec<&Light> = scene.lights().collect();

        for (_, item) in &items {
            if let Renderable::Grid(grid) = item {
                self.draw_grid(grid, camera, viewport);
            }
        }
        for (_, item) in &items {
            if let Renderable::Box(mesh) = item {
                self.draw_box(mesh, &lights, camera, viewport);
            }
        }
        for (_, item) in &items {
            if let Renderable::Line(line) = item {
                self.draw_line(line, camera, viewport);
            }
        }
        let pixel_ratio = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        for (_, item) in &items {
            if let Renderable::Label(label) = item {
                self.draw_label(label, pixel_ratio, camera, viewport);
            }
        }
    }

    fn draw_grid(&self, grid: &GridHelper, camera: &Camera, viewport: Vec2) {
        let divisions = grid.divisions.max(1);
        let half = grid.size / 2.0;
        let step = grid.size / divisions as f32;
        for i in 0..=divisions {
            let k = -half + i as f32 * step;
            let color = if 2 * i == divisions {
                GRID_CENTER_COLOR
            } else {
                GRID_COLOR
            };
            let across_x = (Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k));
            let across_z = (Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half));
            for (a, b) in [across_x, across_z] {
                self.stroke_segment(a, b, color, GRID_LINE_WIDTH, camera, viewport);
            }
        }
    }

    fn draw_box(&self, mesh: &BoxMesh, lights: &[&Light], camera: &Camera, viewport: Vec2) {
        let mut faces: Vec<(f32, Vec3, [Vec3; 4])> = CUBE_FACES
            .iter()
            .filter_map(|(normal, corners)| {
                let center = *normal * 0.5 * mesh.scale;
                // Front faces only.
                if normal.dot(camera.eye - center) <= 0.0 {
                    return None;
                }
                let world = (*corners).map(|c| c * mesh.scale);
                Some((camera.eye.distance(center), *normal, world))
            })
            .collect();
        faces.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, normal, corners) in faces {
            let Some(points) = project_all(&corners, camera, viewport) else {
                continue;
            };
            let [r, g, b] = shade(mesh.color, normal, lights);
            self.ctx.set_fill_style_str(&format!(
                "rgba({}, {}, {}, {})",
                to_byte(r),
                to_byte(g),
                to_byte(b),
                mesh.opacity
            ));
            self.ctx.begin_path();
            self.ctx.move_to(points[0].x as f64, points[0].y as f64);
            for p in &points[1..] {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
            self.ctx.close_path();
            self.ctx.fill();
        }
    }

    fn draw_line(&self, line: &LineSegment, camera: &Camera, viewport: Vec2) {
        let [r, g, b] = line.color;
        let color = format!("rgb({}, {}, {})", to_byte(r), to_byte(g), to_byte(b));
        self.stroke_segment(
            line.start,
            line.end,
            &color,
            DIMENSION_LINE_WIDTH,
            camera,
            viewport,
        );
    }

    fn draw_label(&self, label: &TextLabel, pixel_ratio: f64, camera: &Camera, viewport: Vec2) {
        let Some(p) = camera.project(label.position, viewport) else {
            return;
        };
        let (x, y) = (p.x as f64, p.y as f64);
        let font_px = LABEL_FONT_PX * pixel_ratio;
        let pad = LABEL_PADDING_PX * pixel_ratio;
        let box_h = font_px * LABEL_HEIGHT_EM;

        self.ctx.set_font(&format!("{font_px:.0}px {LABEL_FONT_FAMILY}"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let text_w = self
            .ctx
            .measure_text(&label.text)
            .map(|m| m.width())
            .unwrap_or(0.0);

        self.ctx.set_fill_style_str(LABEL_BACKGROUND);
        self.ctx
            .fill_rect(x - text_w / 2.0 - pad, y - box_h / 2.0, text_w + 2.0 * pad, box_h);
        self.ctx.set_fill_style_str(LABEL_TEXT_COLOR);
        _ = self.ctx.fill_text(&label.text, x, y);
    }

    fn stroke_segment(
        &self,
        a: Vec3,
        b: Vec3,
        color: &str,
        width: f64,
        camera: &Camera,
        viewport: Vec2,
    ) {
        let (Some(pa), Some(pb)) = (camera.project(a, viewport), camera.project(b, viewport)) else {
            return;
        };
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(pa.x as f64, pa.y as f64);
        self.ctx.line_to(pb.x as f64, pb.y as f64);
        self.ctx.stroke();
    }
}

fn project_all(corners: &[Vec3; 4], camera: &Camera, viewport: Vec2) -> Option<[Vec3; 4]> {
    let mut out = [Vec3::ZERO; 4];
    for (slot, corner) in out.iter_mut().zip(corners) {
        *slot = camera.project(*corner, viewport)?;
    }
    Some(out)
}

/// Lambert shading: ambient plus each directional light facing the surface.
fn shade(base: [f32; 3], normal: Vec3, lights: &[&Light]) -> [f32; 3] {
    let mut light = Vec3::ZERO;
    for l in lights {
        match l {
            Light::Ambient { color, intensity } => {
                light += Vec3::from(*color) * *intensity;
            }
            Light::Directional {
                color,
                intensity,
                position,
            } => {
                let facing = normal.dot(position.normalize_or_zero()).max(0.0);
                light += Vec3::from(*color) * *intensity * facing;
            }
        }
    }
    (Vec3::from(base) * light).min(Vec3::ONE).to_array()
}

#[inline]
fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
