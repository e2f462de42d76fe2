//! Named effects expressed as oscillator settings.
//!
//! Every builder validates its inputs in declaration order and returns the
//! first failure; no wave is produced unless all inputs are valid. Brightness
//! is always carried on the value channel's bias.

use crate::builder::compose::create_empty_wave;
use crate::builder::validate::{
    validate, ALPHA, BRIGHTNESS, CYCLE_RATE, HUE, MOVING_RATE, SATURATION, SPACING,
};
use crate::prelude::{Wave, WaveResult};
use log::debug;

const FULL: u8 = 255;
/// Spatial frequency that spreads the hue cycle along the strip.
const RAINBOW_SPREAD: u8 = 2;

/// A constant color.
pub fn create_solid_color_wave(brightness: f64, h: f64, s: f64, a: f64) -> WaveResult<Wave> {
    let brightness = validate(brightness, &BRIGHTNESS)?;
    let h = validate(h, &HUE)?;
    let s = validate(s, &SATURATION)?;
    let a = validate(a, &ALPHA)?;

    let mut wave = create_empty_wave();
    wave.h.b = h;
    wave.s.b = s;
    wave.v.b = brightness;
    wave.a.b = a;
    debug!("solid color wave h={} s={} v={} a={}", h, s, brightness, a);
    Ok(wave)
}

/// The whole strip cycles through the hue wheel in unison.
pub fn create_color_cycle_wave(brightness: f64, rate: f64, a: f64) -> WaveResult<Wave> {
    let brightness = validate(brightness, &BRIGHTNESS)?;
    let rate = validate(rate, &CYCLE_RATE)?;
    let a = validate(a, &ALPHA)?;

    let mut wave = create_empty_wave();
    wave.h.a = FULL;
    wave.h.w_t = rate;
    wave.h.w_x = 0;
    wave.s.b = FULL;
    wave.v.b = brightness;
    wave.a.b = a;
    debug!("color cycle wave rate={} v={} a={}", rate, brightness, a);
    Ok(wave)
}

/// Bands of a single color travelling along the strip.
pub fn create_moving_wave(
    brightness: f64,
    h: f64,
    s: f64,
    rate: f64,
    spacing: f64,
) -> WaveResult<Wave> {
    let brightness = validate(brightness, &BRIGHTNESS)?;
    let h = validate(h, &HUE)?;
    let s = validate(s, &SATURATION)?;
    let rate = validate(rate, &MOVING_RATE)?;
    let spacing = validate(spacing, &SPACING)?;

    let mut wave = create_empty_wave();
    wave.h.b = h;
    wave.s.b = s;
    wave.v.b = brightness;
    wave.a.a = FULL;
    wave.a.w_t = rate;
    wave.a.w_x = spacing;
    debug!(
        "moving wave h={} s={} v={} rate={} spacing={}",
        h, s, brightness, rate, spacing
    );
    Ok(wave)
}

/// A single color fading in and out.
pub fn create_pulsing_wave(brightness: f64, h: f64, s: f64, rate: f64) -> WaveResult<Wave> {
    let brightness = validate(brightness, &BRIGHTNESS)?;
    let h = validate(h, &HUE)?;
    let s = validate(s, &SATURATION)?;
    let rate = validate(rate, &CYCLE_RATE)?;

    let mut wave = create_empty_wave();
    wave.h.b = h;
    wave.s.b = s;
    wave.v.b = brightness;
    wave.a.w_t = rate;
    wave.a.a = FULL;
    debug!("pulsing wave h={} s={} v={} rate={}", h, s, brightness, rate);
    Ok(wave)
}

/// The hue wheel spread across the strip and scrolling over time.
pub fn create_rainbow_wave(brightness: f64, a: f64, rate: f64) -> WaveResult<Wave> {
    let brightness = validate(brightness, &BRIGHTNESS)?;
    let a = validate(a, &ALPHA)?;
    let rate = validate(rate, &CYCLE_RATE)?;

    let mut wave = create_empty_wave();
    wave.h.a = FULL;
    wave.h.w_t = rate;
    wave.h.w_x = RAINBOW_SPREAD;
    wave.s.b = FULL;
    wave.v.b = brightness;
    wave.a.b = a;
    debug!("rainbow wave rate={} v={} a={}", rate, brightness, a);
    Ok(wave)
}
