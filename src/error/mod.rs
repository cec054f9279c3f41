use crate::config::ConfigError;
use crate::screen::ScreenError;
use crate::stats::StatError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Stat(#[from] StatError),
    #[error(transparent)]
    Screen(#[from] ScreenError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
