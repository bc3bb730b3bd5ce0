//! Damped drag-to-orbit around the camera target.
//!
//! Drag deltas accumulate into a pending spherical rotation. Each frame
//! [`OrbitControls::update`] applies a `damping` fraction of it and decays the
//! rest, so the camera eases to a stop after the pointer is released.

use crate::camera::Camera;
use crate::constants::{MAX_ZOOM, MIN_ZOOM, ORBIT_DAMPING, ORBIT_POLAR_EPSILON};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

// Below this the pending rotation is treated as settled.
const SETTLE_EPSILON: f32 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pending (azimuth, polar) rotation in radians.
    pending: Vec2,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(MIN_ZOOM, MAX_ZOOM)
    }
}

impl OrbitControls {
    pub fn new(min_distance: f32, max_distance: f32) -> Self {
        Self {
            damping: ORBIT_DAMPING,
            min_distance,
            max_distance,
            pending: Vec2::ZERO,
        }
    }

    /// Queue a rotation for a pointer drag of `(dx, dy)` pixels.
    ///
    /// Dragging across the full viewport height turns the camera once.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        self.pending.x -= TAU * dx_px / h;
        self.pending.y -= TAU * dy_px / h;
    }

    pub fn is_settled(&self) -> bool {
        self.pending.length_squared() < SETTLE_EPSILON * SETTLE_EPSILON
    }

    /// Per-frame step. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        let clamped_radius = radius.clamp(self.min_distance, self.max_distance);
        if self.is_settled() {
            self.pending = Vec2::ZERO;
            if radius == clamped_radius {
                return false;
            }
        }
        if radius <= f32::EPSILON {
            self.pending = Vec2::ZERO;
            return false;
        }

        // Spherical coordinates around +Y: theta from +Z towards +X, phi from +Y.
        let theta = offset.x.atan2(offset.z) + self.pending.x * self.damping;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + self.pending.y * self.damping)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);

        let sin_phi = phi.sin();
        camera.eye = camera.target
            + Vec3::new(
                clamped_radius * sin_phi * theta.sin(),
                clamped_radius * phi.cos(),
                clamped_radius * sin_phi * theta.cos(),
            );
        self.pending *= 1.0 - self.damping;
        true
    }
}
