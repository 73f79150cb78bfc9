use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Data file not found: {0}")]
    SourceNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed bowling figure {value:?} in row {row} (match {match_id}), expected \"<wickets>--<runs>\"")]
    MalformedBowlingFigure {
        row: usize,
        match_id: u32,
        value: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
