/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Error types for Hamiltonian assembly

use thiserror::Error;

/// Result type for assembly operations
pub type Result<T> = std::result::Result<T, HamiltonianError>;

/// Errors raised while assembling the Hamiltonian matrix
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HamiltonianError {
    /// The potential samples and the basis do not share a grid
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}
