use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use blockfall_engine::{GameConfig, PieceSeed};
use clap::Parser;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// JSON file with game settings (command-line flags take precedence)
    #[clap(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Arena width in cells
    #[clap(long)]
    width: Option<usize>,
    /// Arena height in cells
    #[clap(long)]
    height: Option<usize>,
    /// Gravity interval in milliseconds
    #[clap(long = "drop-interval", value_name = "MS")]
    drop_interval_ms: Option<u64>,
    /// Also clear the top row when it is full (`--sweep-top-row=false` turns it off)
    #[clap(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    sweep_top_row: Option<bool>,
    /// Seed for a reproducible piece sequence (32 hex digits)
    #[clap(long, value_name = "HEX")]
    seed: Option<PieceSeed>,
    /// Frames per second
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
    /// Print the resolved game settings as JSON and exit
    #[clap(long)]
    print_config: bool,
}

impl CommandArgs {
    /// Merges defaults, the config file and the flags, in increasing precedence.
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => read_config_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(drop_interval_ms) = self.drop_interval_ms {
            config.drop_interval_ms = drop_interval_ms;
        }
        if let Some(sweep_top_row) = self.sweep_top_row {
            config.sweep_top_row = sweep_top_row;
        }
        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> anyhow::Result<GameConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

fn write_config<W>(mut writer: W, config: &GameConfig) -> anyhow::Result<()>
where
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, config)
        .context("Failed to write game settings")?;
    writeln!(writer)?;
    Ok(())
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let config = args.game_config()?;

    if args.print_config {
        return write_config(io::stdout().lock(), &config);
    }

    play::run(config, args.seed, args.fps)
}
