use serde::{Deserialize, Serialize};

/// Number of wave layers the renderer blends.
pub const WAVE_SLOTS: usize = 4;

/// One oscillator: `b + a * waveform(w_t * t + w_x * x + phi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Amplitude.
    pub a: u8,
    /// Temporal frequency.
    pub w_t: u8,
    /// Spatial frequency, per LED index.
    pub w_x: u8,
    /// Phase offset.
    pub phi: u8,
    /// Bias.
    pub b: u8,
}

impl Channel {
    pub const ZERO: Channel = Channel {
        a: 0,
        w_t: 0,
        w_x: 0,
        phi: 0,
        b: 0,
    };
}

/// Hue, saturation, value and alpha oscillators for one effect layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wave {
    pub h: Channel,
    pub s: Channel,
    pub v: Channel,
    pub a: Channel,
}

/// Prototype every builder starts from.
pub const EMPTY_WAVE: Wave = Wave {
    h: Channel::ZERO,
    s: Channel::ZERO,
    v: Channel::ZERO,
    a: Channel::ZERO,
};

/// The full set of layers handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WaveParameters {
    pub waves: [Wave; WAVE_SLOTS],
}

/// Common error type for wave construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    #[error("Invalid {name} {value}. {label} must be a number between {min} and {max}")]
    InvalidParameter {
        name: &'static str,
        label: &'static str,
        value: f64,
        min: u8,
        max: u8,
    },
    #[error("too many layers: {count} supplied, at most {} allowed", WAVE_SLOTS)]
    TooManyLayers { count: usize },
}

pub type WaveResult<T> = Result<T, WaveError>;
