//! Wave parameter construction for the Raver Lights animation renderer.
//!
//! A wave is four oscillators (hue, saturation, value, alpha). Presets fill
//! those oscillators to describe an effect; the renderer evaluates them
//! uniformly, so every effect is plain data.

pub mod builder;
pub mod prelude;
pub mod preset;
pub mod telemetry;

pub use builder::{
    create_color_cycle_wave, create_empty_wave, create_moving_wave, create_pulsing_wave,
    create_rainbow_wave, create_solid_color_wave, create_wave_parameters,
};
pub use prelude::{Channel, Wave, WaveError, WaveParameters, WaveResult, EMPTY_WAVE};
pub use preset::Preset;
