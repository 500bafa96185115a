use std::fs::File;

use anyhow::{Context, Result};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use grid_snake::app::{self, Outcome};
use grid_snake::config::LOG_FILE_NAME;
use grid_snake::Status;

fn main() -> Result<()> {
    // stdout belongs to the game, so logs go to a file
    let log_path = std::env::temp_dir().join(LOG_FILE_NAME);
    let log_file = File::create(&log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .context("initializing logger")?;

    info!("starting grid-snake");

    match app::run().context("running the game")? {
        Outcome::Finished { status: Status::Won, score } => println!("You won! Score: {}", score),
        Outcome::Finished { score, .. } => println!("Game over! Score: {}", score),
        Outcome::Quit { score } => println!("Quit. Score: {}", score),
    }

    Ok(())
}
