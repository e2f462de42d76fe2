use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wavecore::Preset;

/// A show: up to four preset layers, blended by the renderer in order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShowConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub layers: Vec<Preset>,
}

impl ShowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading show config {}", path_ref.display()))?;
        let config: ShowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing show config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Single full-opacity rainbow layer.
    pub fn from_args(brightness: f64, rate: f64) -> Self {
        Self {
            name: Some("rainbow".into()),
            layers: vec![Preset::Rainbow {
                brightness,
                a: 255.0,
                rate,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_rainbow_layer() {
        let cfg = ShowConfig::from_args(200.0, 8.0);
        assert_eq!(cfg.layers.len(), 1);
        assert_eq!(cfg.layers[0].name(), "rainbow");
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"name: dusk\nlayers:\n  - preset: solid_color\n    brightness: 128\n    h: 20\n    s: 255\n    a: 255\n  - preset: pulsing\n    brightness: 255\n    h: 200\n    s: 255\n    rate: 4\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ShowConfig::load(&path).unwrap();
        assert_eq!(cfg.name.as_deref(), Some("dusk"));
        assert_eq!(cfg.layers.len(), 2);
        assert_eq!(
            cfg.layers[1],
            Preset::Pulsing {
                brightness: 255.0,
                h: 200.0,
                s: 255.0,
                rate: 4.0,
            }
        );
    }

    #[test]
    fn config_load_reports_unknown_preset() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"layers:\n  - preset: strobe\n").unwrap();
        let path = temp.into_temp_path();
        let err = ShowConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("parsing show config"));
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = ShowConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(err.to_string().contains("reading show config"));
    }
}
