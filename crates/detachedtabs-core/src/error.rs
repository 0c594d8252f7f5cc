//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Tab error: {0}")]
    Tab(#[from] detachedtabs_registry::TabError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Orientation {0} not supported")]
    UnsupportedOrientation(String),

    #[error("Invalid size: {0}")]
    InvalidSize(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
