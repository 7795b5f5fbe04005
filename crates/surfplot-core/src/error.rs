use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
