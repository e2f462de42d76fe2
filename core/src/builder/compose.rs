use crate::prelude::{Wave, WaveError, WaveParameters, WaveResult, EMPTY_WAVE, WAVE_SLOTS};

/// Returns a fresh all-zero wave.
pub fn create_empty_wave() -> Wave {
    EMPTY_WAVE
}

/// Places up to four waves in slot order, filling gaps with empty waves.
pub fn create_wave_parameters(
    wave1: Option<Wave>,
    wave2: Option<Wave>,
    wave3: Option<Wave>,
    wave4: Option<Wave>,
) -> WaveParameters {
    WaveParameters {
        waves: [
            wave1.unwrap_or_else(create_empty_wave),
            wave2.unwrap_or_else(create_empty_wave),
            wave3.unwrap_or_else(create_empty_wave),
            wave4.unwrap_or_else(create_empty_wave),
        ],
    }
}

impl WaveParameters {
    /// Composes layers in order; unused trailing slots stay empty.
    pub fn from_layers<I>(layers: I) -> WaveResult<Self>
    where
        I: IntoIterator<Item = Wave>,
    {
        let layers: Vec<Wave> = layers.into_iter().collect();
        if layers.len() > WAVE_SLOTS {
            return Err(WaveError::TooManyLayers {
                count: layers.len(),
            });
        }

        let mut slots = layers.into_iter();
        Ok(create_wave_parameters(
            slots.next(),
            slots.next(),
            slots.next(),
            slots.next(),
        ))
    }

    pub fn layer(&self, index: usize) -> Option<&Wave> {
        self.waves.get(index)
    }
}
