use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tui_snake::game::{FoodPolicy, GameConfig};
use tui_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial snake length
    #[arg(long)]
    initial_length: Option<usize>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Game-over fade-in speed, in alpha units per second
    #[arg(long)]
    fade_speed: Option<f32>,

    /// Never spawn food on top of the snake
    #[arg(long)]
    exclude_occupied_food: bool,

    /// Write logs to this file (logging is off otherwise, the terminal is in use)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(length) = self.initial_length {
            config.initial_snake_length = length;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(fade_speed) = self.fade_speed {
            config.fade_speed = fade_speed;
        }
        if self.exclude_occupied_food {
            config.food_policy = FoodPolicy::ExcludeOccupied;
        }

        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    GameConfig::from_json(&json)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info).parse_default_env();

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.try_init().context("Failed to initialize logger")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    info!("starting with {:?}", config);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
