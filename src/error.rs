/**
* filename : error
* author : HAMA
* date: 2025. 8. 25.
* description: 
**/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TradingError {
    #[error("Invalid instrument: {0}")]
    InvalidInstrument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
