use crate::prelude::{WaveError, WaveResult};
use log::warn;

/// Documented inclusive range for one numeric builder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
}

impl ParamSpec {
    pub const fn new(name: &'static str, label: &'static str, min: u8, max: u8) -> Self {
        Self {
            name,
            label,
            min,
            max,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}

pub const BRIGHTNESS: ParamSpec = ParamSpec::new("brightness", "Brightness", 0, 255);
pub const HUE: ParamSpec = ParamSpec::new("hue", "Hue", 0, 255);
pub const SATURATION: ParamSpec = ParamSpec::new("saturation", "Saturation", 0, 255);
pub const ALPHA: ParamSpec = ParamSpec::new("alpha", "Alpha", 0, 255);
pub const CYCLE_RATE: ParamSpec = ParamSpec::new("rate", "Rate", 1, 32);
/// A moving wave may stand still, so its rate starts at zero.
pub const MOVING_RATE: ParamSpec = ParamSpec::new("rate", "Rate", 0, 32);
pub const SPACING: ParamSpec = ParamSpec::new("spacing", "Spacing", 1, 16);

/// Checks `value` against `spec` and rounds it half away from zero.
pub fn validate(value: f64, spec: &ParamSpec) -> WaveResult<u8> {
    if !spec.contains(value) {
        warn!(
            "rejected {} {} outside [{}, {}]",
            spec.name, value, spec.min, spec.max
        );
        return Err(WaveError::InvalidParameter {
            name: spec.name,
            label: spec.label,
            value,
            min: spec.min,
            max: spec.max,
        });
    }
    // In range, so the cast cannot truncate.
    Ok(value.round() as u8)
}
