use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::modes::{AgentConfig, AgentMode, HumanMode, PolicyKind};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake for humans and agents")]
struct Cli {
    /// Who controls the snake
    #[arg(long, value_enum, default_value = "human")]
    mode: Mode,

    /// JSON game configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Seed for food placement and the random policy
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds per game tick (human mode)
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Episodes to play (agent mode)
    #[arg(long, default_value = "100")]
    episodes: usize,

    /// Policy steering the snake (agent mode)
    #[arg(long, value_enum, default_value = "greedy")]
    policy: PolicyKind,

    /// Log progress every N episodes (agent mode)
    #[arg(long, default_value = "10")]
    log_every: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Let a built-in policy play headless episodes
    Agent,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    match cli.mode {
        Mode::Human => {
            // The TUI owns stderr, so no log subscriber in this mode
            let mut human_mode = HumanMode::new(config, Duration::from_millis(cli.tick_ms))?;
            human_mode.run().await?;
        }
        Mode::Agent => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();

            let mut agent_config = AgentConfig::new(cli.episodes, cli.policy);
            agent_config.log_frequency = cli.log_every;
            agent_config.game_config = config;

            let mut agent_mode = AgentMode::new(agent_config)?;
            agent_mode.run();
        }
    }

    Ok(())
}
