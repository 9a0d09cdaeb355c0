//! Error types for Dhanmitra

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Negative values are not allowed.")]
    NegativeValues,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than an
    /// internal fault
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NegativeValues | Self::InvalidData(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
