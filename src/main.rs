use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::logging;
use grid_snake::modes::HumanMode;
use log::info;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic snake on a fixed 40x30 grid")]
struct Cli {
    /// Write log records to this file (logging is off without it)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Most verbose level written to the log file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level)?;
    }

    let config = GameConfig::default();
    config.validate()?;
    info!("starting with {:?}", config);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    info!("window closed, exiting");
    Ok(())
}
