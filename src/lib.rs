pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod screen;
pub mod stats;

pub use error::{AppError, AppResult};

use std::path::PathBuf;

/// Entrypoint used by the binary: installs logging and renders one screen.
pub fn run(cli: &cli::Cli) -> AppResult<PathBuf> {
    logging::init();
    tracing::debug!(?cli, "starting tierscreen");

    cli::run(cli)
}
