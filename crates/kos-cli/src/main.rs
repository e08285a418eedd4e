//! kOS GUI - CLI
//!
//! Runs line-based scenarios against a script-side GUI and a headless
//! render loop, printing what the script reads back.

mod scenario;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use kos_core::GuiConfig;

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "kos", version, about = "Headless kOS GUI scenario runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario file
    Run {
        scenario: PathBuf,

        /// JSON file with GUI settings; missing fields keep their defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Frames stepped by a bare `frame` command
        #[arg(long, default_value_t = 1)]
        frames_per_step: u32,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<GuiConfig> {
    let Some(path) = path else {
        return Ok(GuiConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            scenario,
            config,
            frames_per_step,
        } => {
            let config = load_config(config.as_ref())?;
            info!("running {} with {:?}", scenario.display(), config);
            let source = fs::read_to_string(&scenario)
                .with_context(|| format!("failed to read scenario {}", scenario.display()))?;

            let mut runner = Scenario::new(config, frames_per_step);
            let result = runner.run(&source);
            for line in runner.output() {
                println!("{}", line);
            }
            result
        }
    }
}
