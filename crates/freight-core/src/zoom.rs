//! Button-driven zoom that keeps the camera inside a closed distance interval.

use crate::camera::Camera;
use crate::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_SPEED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Towards the target.
    In,
    /// Away from the target.
    Out,
}

impl ZoomDirection {
    /// `+1` for in, `-1` for out.
    pub fn sign(self) -> f32 {
        match self {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        }
    }

    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign.signum() {
            1 => Some(ZoomDirection::In),
            -1 => Some(ZoomDirection::Out),
            _ => None,
        }
    }

    /// Wheel scrolled up (negative delta) zooms in.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomController {
    pub min_distance: f32,
    pub max_distance: f32,
    pub step: f32,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(MIN_ZOOM, MAX_ZOOM, ZOOM_SPEED)
    }
}

impl ZoomController {
    pub fn new(min_distance: f32, max_distance: f32, step: f32) -> Self {
        Self {
            min_distance,
            max_distance,
            step,
        }
    }

    pub fn contains(&self, distance: f32) -> bool {
        (self.min_distance..=self.max_distance).contains(&distance)
    }

    /// Move the camera one step along its view direction.
    ///
    /// The bound check runs on the distance the move would produce. A move
    /// that would leave the interval is dropped entirely and returns `false`;
    /// the camera is never clamped onto the boundary.
    pub fn zoom(&self, camera: &mut Camera, direction: ZoomDirection) -> bool {
        let delta = direction.sign() * self.step;
        let distance = camera.distance();
        let prospective = distance - delta;
        if !self.contains(prospective) {
            log::trace!(
                "[zoom] rejected {:?}: {:.2} -> {:.2} outside [{}, {}]",
                direction,
                distance,
                prospective,
                self.min_distance,
                self.max_distance
            );
            return false;
        }
        let toward_target = (camera.target - camera.eye).normalize_or_zero();
        camera.eye += toward_target * delta;
        log::debug!("[zoom] {:?}: {:.2} -> {:.2}", direction, distance, prospective);
        true
    }
}
