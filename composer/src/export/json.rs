use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use wavecore::WaveParameters;

pub fn render_json(parameters: &WaveParameters, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(parameters)
    } else {
        serde_json::to_string(parameters)
    };
    rendered.context("serializing wave parameters")
}

/// Writes to `path` when given, otherwise to stdout.
pub fn write_json(
    parameters: &WaveParameters,
    path: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let mut rendered = render_json(parameters, pretty)?;
    rendered.push('\n');

    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output directory {}", parent.display()))?;
            }
            fs::write(path, rendered)
                .with_context(|| format!("writing wave parameters to {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .context("writing wave parameters to stdout")?;
        }
    }
    Ok(())
}
