//! Freight dimensions and the fixed mapping from freight axes to render axes.

use crate::constants::CM_PER_UNIT;
use glam::Vec3;

/// One of the three measured freight edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Length,
    Width,
    Height,
}

impl Axis {
    /// Annotation order: length, width, height.
    pub const ALL: [Axis; 3] = [Axis::Length, Axis::Width, Axis::Height];

    pub fn letter(self) -> char {
        match self {
            Axis::Length => 'L',
            Axis::Width => 'W',
            Axis::Height => 'H',
        }
    }

    /// Unit vector of the render axis this edge runs along.
    ///
    /// Height is always vertical (Y) and width runs into the screen (Z),
    /// whatever order the values were entered in.
    pub fn render_axis(self) -> Vec3 {
        match self {
            Axis::Length => Vec3::X,
            Axis::Height => Vec3::Y,
            Axis::Width => Vec3::Z,
        }
    }
}

/// Freight measurements in centimeters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Builds dimensions, replacing negative, NaN and infinite values with 0.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length: non_negative(length),
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length,
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Box scale in world units: `(length, height, width) / 100`.
    pub fn scale(&self) -> Vec3 {
        Vec3::new(
            to_units(self.length),
            to_units(self.height),
            to_units(self.width),
        )
    }

    pub fn volume_cm3(&self) -> f64 {
        self.length * self.width * self.height
    }
}

#[inline]
fn to_units(cm: f64) -> f32 {
    (cm / CM_PER_UNIT) as f32
}

#[inline]
fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
