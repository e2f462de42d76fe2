use crate::builder::{
    create_color_cycle_wave, create_empty_wave, create_moving_wave, create_pulsing_wave,
    create_rainbow_wave, create_solid_color_wave,
};
use crate::prelude::{Wave, WaveResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serializable description of a preset and its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "preset", rename_all = "snake_case")]
pub enum Preset {
    Empty,
    SolidColor {
        brightness: f64,
        h: f64,
        s: f64,
        a: f64,
    },
    ColorCycle {
        brightness: f64,
        rate: f64,
        a: f64,
    },
    Moving {
        brightness: f64,
        h: f64,
        s: f64,
        rate: f64,
        spacing: f64,
    },
    Pulsing {
        brightness: f64,
        h: f64,
        s: f64,
        rate: f64,
    },
    Rainbow {
        brightness: f64,
        a: f64,
        rate: f64,
    },
}

impl Preset {
    pub fn build(&self) -> WaveResult<Wave> {
        match *self {
            Preset::Empty => Ok(create_empty_wave()),
            Preset::SolidColor { brightness, h, s, a } => {
                create_solid_color_wave(brightness, h, s, a)
            }
            Preset::ColorCycle { brightness, rate, a } => {
                create_color_cycle_wave(brightness, rate, a)
            }
            Preset::Moving {
                brightness,
                h,
                s,
                rate,
                spacing,
            } => create_moving_wave(brightness, h, s, rate, spacing),
            Preset::Pulsing {
                brightness,
                h,
                s,
                rate,
            } => create_pulsing_wave(brightness, h, s, rate),
            Preset::Rainbow { brightness, a, rate } => create_rainbow_wave(brightness, a, rate),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Empty => "empty",
            Preset::SolidColor { .. } => "solid_color",
            Preset::ColorCycle { .. } => "color_cycle",
            Preset::Moving { .. } => "moving",
            Preset::Pulsing { .. } => "pulsing",
            Preset::Rainbow { .. } => "rainbow",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{WaveError, EMPTY_WAVE};

    #[test]
    fn preset_builds_matching_wave() {
        let preset = Preset::Rainbow {
            brightness: 255.0,
            a: 255.0,
            rate: 32.0,
        };
        assert_eq!(
            preset.build().unwrap(),
            create_rainbow_wave(255.0, 255.0, 32.0).unwrap()
        );
        assert_eq!(Preset::Empty.build().unwrap(), EMPTY_WAVE);
    }

    #[test]
    fn preset_propagates_validation_error() {
        let preset = Preset::Pulsing {
            brightness: 255.0,
            h: 0.0,
            s: 0.0,
            rate: 64.0,
        };
        assert!(matches!(
            preset.build(),
            Err(WaveError::InvalidParameter { name: "rate", .. })
        ));
    }

    #[test]
    fn preset_deserializes_from_tagged_json() {
        let preset: Preset = serde_json::from_str(
            r#"{"preset": "moving", "brightness": 128, "h": 10, "s": 255, "rate": 4, "spacing": 2}"#,
        )
        .unwrap();
        assert_eq!(preset.name(), "moving");
        assert_eq!(preset.build().unwrap().a.w_x, 2);
    }

    #[test]
    fn preset_display_uses_tag() {
        let preset = Preset::ColorCycle {
            brightness: 1.0,
            rate: 1.0,
            a: 1.0,
        };
        assert_eq!(preset.to_string(), "color_cycle");
    }
}
