//! Command-line options and logger setup for the terminal binary.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::types::FRAME_MS;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Clear full rows to score; the game speeds up every 10 lines.",
    long_about = "Blockfall is a falling-block puzzle for the terminal.\n\n\
        CONTROLS:\n  Left/Right  Move      Up     Rotate     Down   Soft drop\n  \
        Space       Hard drop R      Restart    Q/Esc  Quit"
)]
pub struct Args {
    /// Seed for the piece sequence (random if omitted).
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Frame period in milliseconds.
    #[arg(long, default_value_t = FRAME_MS, value_name = "MS")]
    pub frame_ms: u32,

    /// Terminal columns per board cell.
    #[arg(long, default_value_t = 2, value_name = "N")]
    pub cell_width: u16,

    /// Write logs to this file (filter via RUST_LOG, default "info").
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("frame period must be between 1 and 1000 ms, got {0}")]
    FrameMs(u32),
    #[error("cell width must be between 1 and 4, got {0}")]
    CellWidth(u16),
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validated runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub frame_ms: u32,
    pub cell_width: u16,
    pub log_file: Option<PathBuf>,
}

impl TryFrom<Args> for RunConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !(1..=1000).contains(&args.frame_ms) {
            return Err(ConfigError::FrameMs(args.frame_ms));
        }
        if !(1..=4).contains(&args.cell_width) {
            return Err(ConfigError::CellWidth(args.cell_width));
        }
        Ok(Self {
            seed: args.seed,
            frame_ms: args.frame_ms,
            cell_width: args.cell_width,
            log_file: args.log_file,
        })
    }
}

/// Install `env_logger` writing to the configured file.
///
/// The terminal itself shows the game, so without a log file no logger is
/// installed and `log` macros are no-ops.
pub fn init_logging(config: &RunConfig) -> Result<(), ConfigError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| ConfigError::LogFile {
        path: path.clone(),
        source,
    })?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
