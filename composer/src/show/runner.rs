use crate::show::config::ShowConfig;
use anyhow::Context;
use wavecore::telemetry::{LogManager, MetricsRecorder};
use wavecore::WaveParameters;

pub struct ShowResult {
    pub name: Option<String>,
    pub parameters: WaveParameters,
    pub layers_built: usize,
}

pub struct Runner {
    config: ShowConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(config: ShowConfig) -> Self {
        let scope = config.name.clone().unwrap_or_else(|| "show".into());
        Self {
            config,
            logger: LogManager::new(scope),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn execute(&self) -> anyhow::Result<ShowResult> {
        let mut waves = Vec::with_capacity(self.config.layers.len());
        for (index, preset) in self.config.layers.iter().enumerate() {
            let wave = preset.build().map_err(|err| {
                self.metrics.record_rejected();
                err
            });
            let wave = wave.with_context(|| format!("building layer {} ({})", index + 1, preset))?;
            self.metrics.record_built();
            self.logger
                .record(&format!("layer {} built from {}", index + 1, preset));
            waves.push(wave);
        }

        let layers_built = waves.len();
        let parameters =
            WaveParameters::from_layers(waves).context("composing wave parameters")?;

        Ok(ShowResult {
            name: self.config.name.clone(),
            parameters,
            layers_built,
        })
    }

    /// Returns `(built, rejected)` across every `execute` call.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::{create_rainbow_wave, Preset, EMPTY_WAVE};

    #[test]
    fn runner_executes_show() {
        let cfg = ShowConfig::from_args(255.0, 32.0);
        let runner = Runner::new(cfg);
        let result = runner.execute().unwrap();
        assert_eq!(result.layers_built, 1);
        assert_eq!(
            result.parameters.waves[0],
            create_rainbow_wave(255.0, 255.0, 32.0).unwrap()
        );
        assert!(result.parameters.waves[1..].iter().all(|w| *w == EMPTY_WAVE));
        assert_eq!(runner.metrics(), (1, 0));
    }

    #[test]
    fn runner_names_failing_layer() {
        let cfg = ShowConfig {
            name: None,
            layers: vec![
                Preset::Empty,
                Preset::SolidColor {
                    brightness: 256.0,
                    h: 0.0,
                    s: 0.0,
                    a: 0.0,
                },
            ],
        };
        let runner = Runner::new(cfg);
        let err = runner.execute().err().unwrap();
        assert_eq!(err.to_string(), "building layer 2 (solid_color)");
        assert!(format!("{:#}", err).contains("brightness"));
        assert_eq!(runner.metrics(), (1, 1));
    }

    #[test]
    fn runner_rejects_fifth_layer() {
        let cfg = ShowConfig {
            name: Some("crowded".into()),
            layers: vec![Preset::Empty; 5],
        };
        let err = Runner::new(cfg).execute().err().unwrap();
        assert_eq!(err.to_string(), "composing wave parameters");
    }

    #[test]
    fn runner_builds_demo_show() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/dusk.yaml");
        let runner = Runner::new(ShowConfig::load(path).unwrap());
        let result = runner.execute().unwrap();
        assert_eq!(result.name.as_deref(), Some("dusk"));
        assert_eq!(result.layers_built, 3);
        assert_eq!(result.parameters.waves[1].a.w_x, 4);
        assert_eq!(result.parameters.waves[3], EMPTY_WAVE);
    }
}
