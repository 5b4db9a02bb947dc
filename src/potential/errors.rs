/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Error types for the potential catalog

use thiserror::Error;

/// Result type for potential operations
pub type Result<T> = std::result::Result<T, PotentialError>;

/// Error type for potential-related operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PotentialError {
    /// The requested shape name is not in the catalog
    #[error("unknown potential shape '{name}'; valid shapes are: {valid_names}")]
    UnknownShape { name: String, valid_names: String },
}
