/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Error types for configuration loading

use std::io;
use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
