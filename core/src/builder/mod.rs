pub mod compose;
pub mod presets;
pub mod validate;

pub use compose::{create_empty_wave, create_wave_parameters};
pub use presets::{
    create_color_cycle_wave, create_moving_wave, create_pulsing_wave, create_rainbow_wave,
    create_solid_color_wave,
};
pub use validate::{validate, ParamSpec};
