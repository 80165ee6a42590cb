//! gcodeplot - convert SVG shapes to G-code

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use gcodeplot::{
    convert_file, init_logging, Config, OutputTarget, SettingsOverrides, DEFAULT_OUTPUT,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "gcodeplot", version)]
#[command(about = "Convert SVG shapes to G-code for plotters and CNC machines", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// SVG file to convert
    #[arg(short = 'f', long = "file", value_name = "SVG")]
    file: PathBuf,

    /// Output file, `-` for stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<String>,

    /// Print area width in mm
    #[arg(short = 'w', long)]
    width: Option<f64>,

    /// Print area height in mm
    #[arg(short = 'h', long)]
    height: Option<f64>,

    /// Feed rate for cutting moves
    #[arg(short = 'r', long = "feed-rate")]
    feed_rate: Option<f64>,

    /// Straight segments per circle (at least 3)
    #[arg(short = 'A', long)]
    accuracy: Option<u32>,

    /// Fixed number of decimals for coordinates
    #[arg(long = "decimals", value_name = "N")]
    decimals: Option<usize>,

    /// Configuration file (.toml or .json)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            feed_rate: self.feed_rate,
            accuracy: self.accuracy,
            decimal_places: self.decimals,
            width: self.width,
            height: self.height,
        }
    }

    fn load_config(&self) -> Result<Config> {
        if let Some(path) = &self.config {
            return Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()));
        }
        Ok(Config::load_default()
            .context("Failed to load default config")?
            .unwrap_or_default())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = cli.load_config()?;
    config.merge(&cli.overrides());
    let params = config.to_parameters(cli.debug);

    init_logging(params.debug)?;
    debug!("gcodeplot {} (built {})", gcodeplot::VERSION, gcodeplot::BUILD_DATE);
    debug!("{:?}", params);

    let output = match cli.output.as_deref() {
        Some(arg) => OutputTarget::from_arg(arg),
        None => {
            info!("No output file given, writing to {}", DEFAULT_OUTPUT);
            OutputTarget::default()
        }
    };

    convert_file(&cli.file, &output, &params)
        .with_context(|| format!("Failed to convert {}", cli.file.display()))?;

    Ok(())
}
