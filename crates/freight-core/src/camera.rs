//! Perspective camera orbiting a fixed target.
//!
//! The camera never owns a transform hierarchy: the eye moves and the view
//! always looks at `target`, which the viewer keeps at the origin.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_START, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_START,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    /// Distance from the eye to the look-at target.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Refresh the projection for a new viewport size in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width.max(1.0) / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to viewport pixels.
    ///
    /// Returns `(x, y, ndc_depth)` with `y` growing downwards, or `None` when
    /// the point sits behind the near plane.
    pub fn project(&self, point: Vec3, viewport: Vec2) -> Option<Vec3> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w < self.znear {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec3::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
            ndc.z,
        ))
    }
}
