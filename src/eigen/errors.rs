/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Error types for the eigensolver

use thiserror::Error;

/// Result type for eigensolver operations
pub type Result<T> = std::result::Result<T, EigenError>;

/// Errors raised while diagonalizing a Hamiltonian
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EigenError {
    /// The QR iteration exhausted its sweep budget
    #[error("eigensolver failed to converge: {0}")]
    NonConvergent(String),

    /// A non-finite value appeared in the decomposition
    #[error("numerical failure: {0}")]
    NumericalFailure(String),

    /// Inputs do not describe one consistent problem
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}
