use thiserror::Error;

pub type Result<T> = std::result::Result<T, StarMapError>;

#[derive(Error, Debug)]
pub enum StarMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl StarMapError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        StarMapError::InvalidConfig {
            message: message.into(),
        }
    }
}
