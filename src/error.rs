use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid station id: '{0}'")]
    InvalidStationId(String),

    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Station {staid} not found")]
    StationNotFound { staid: u32 },

    #[error("Malformed record in {path} at line {line}: {message}")]
    RecordParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
