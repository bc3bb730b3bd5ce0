//! Shipping cost from dimensions and actual weight.

use crate::constants::{RATE_PER_KG, VOLUMETRIC_DIVISOR};
use crate::dimensions::Dimensions;
use crate::measure::parse_or_zero;

/// Parsed form values. Every field is finite and non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FreightInput {
    pub dimensions: Dimensions,
    pub weight_kg: f64,
}

impl FreightInput {
    /// Parse raw field text, reading unparsable fields as 0.
    pub fn parse(length: &str, width: &str, height: &str, weight: &str) -> Self {
        Self {
            dimensions: Dimensions::new(
                parse_or_zero(length),
                parse_or_zero(width),
                parse_or_zero(height),
            ),
            weight_kg: parse_or_zero(weight),
        }
    }

    pub fn quote(&self) -> FreightQuote {
        FreightQuote::compute(&self.dimensions, self.weight_kg)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreightQuote {
    pub volume_cm3: f64,
    pub volumetric_weight_kg: f64,
    pub actual_weight_kg: f64,
    /// The larger of volumetric and actual weight.
    pub chargeable_weight_kg: f64,
    pub cost: f64,
}

impl FreightQuote {
    pub fn compute(dimensions: &Dimensions, actual_weight_kg: f64) -> Self {
        let volume_cm3 = dimensions.volume_cm3();
        let volumetric_weight_kg = volume_cm3 / VOLUMETRIC_DIVISOR;
        let chargeable_weight_kg = volumetric_weight_kg.max(actual_weight_kg);
        Self {
            volume_cm3,
            volumetric_weight_kg,
            actual_weight_kg,
            chargeable_weight_kg,
            cost: chargeable_weight_kg * RATE_PER_KG,
        }
    }
}
