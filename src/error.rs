use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Asset key file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid asset key file: {0}")]
    InvalidAssetKeys(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Terminal too small (minimum 60x24)")]
    TerminalTooSmall,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
