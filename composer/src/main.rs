use clap::Parser;
use export::json::write_json;
use log::info;
use show::config::ShowConfig;
use show::runner::Runner;
use std::path::PathBuf;

mod export;
mod show;

#[derive(Parser)]
#[command(author, version, about = "Builds wave parameters for the Raver Lights renderer")]
struct Args {
    /// Load a show (up to four preset layers) from YAML
    #[arg(long)]
    show: Option<PathBuf>,
    /// Brightness of the default rainbow show
    #[arg(long, default_value_t = 255.0)]
    brightness: f64,
    /// Rate of the default rainbow show
    #[arg(long, default_value_t = 16.0)]
    rate: f64,
    /// Write JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let show_config = if let Some(path) = args.show {
        ShowConfig::load(path)?
    } else {
        ShowConfig::from_args(args.brightness, args.rate)
    };

    let runner = Runner::new(show_config);
    let result = runner.execute()?;
    let (built, rejected) = runner.metrics();
    info!(
        "show {} -> {} layers ({} built, {} rejected)",
        result.name.as_deref().unwrap_or("<unnamed>"),
        result.layers_built,
        built,
        rejected
    );

    write_json(&result.parameters, args.output.as_deref(), args.pretty)?;
    Ok(())
}
