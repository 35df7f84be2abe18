use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use warp_snake::game::{FoodSelection, FoodType, GameConfig};
use warp_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "warp_snake")]
#[command(version, about = "Snake with teleport and reverse food")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Chance that new food is teleport food
    #[arg(long)]
    teleport_chance: Option<f64>,

    /// Chance that new food is reverse food
    #[arg(long)]
    reverse_chance: Option<f64>,

    /// Always spawn this food type instead of rolling
    #[arg(long, value_enum, conflicts_with_all = ["teleport_chance", "reverse_chance"])]
    food: Option<FoodArg>,

    /// Where to write the log; the terminal is taken by the game
    #[arg(long, default_value = "warp_snake.log")]
    log_file: PathBuf,

    /// Log level written to the log file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum FoodArg {
    Regular,
    Teleport,
    Reverse,
}

impl From<FoodArg> for FoodType {
    fn from(arg: FoodArg) -> Self {
        match arg {
            FoodArg::Regular => FoodType::Regular,
            FoodArg::Teleport => FoodType::Teleport,
            FoodArg::Reverse => FoodType::Reverse,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        if let Some(food) = self.food {
            config.food_selection = FoodSelection::Fixed { kind: food.into() };
        } else if self.teleport_chance.is_some() || self.reverse_chance.is_some() {
            let (teleport, reverse) = match config.food_selection {
                FoodSelection::Weighted { teleport, reverse } => (teleport, reverse),
                FoodSelection::Fixed { .. } => (0.0, 0.0),
            };
            config.food_selection = FoodSelection::Weighted {
                teleport: self.teleport_chance.unwrap_or(teleport),
                reverse: self.reverse_chance.unwrap_or(reverse),
            };
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
