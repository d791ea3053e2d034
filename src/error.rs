use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Unknown role: {0} (expected one of top, jungle, mid, adc, support)")]
    UnknownRole(String),

    #[error("Pick rejected: {0}")]
    PickRejected(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}
