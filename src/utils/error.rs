use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("resource not found")]
    NotFound,

    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, WeatherError>;
