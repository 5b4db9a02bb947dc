/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Error taxonomy of the solver facade

use crate::eigen::EigenError;
use crate::hamiltonian::HamiltonianError;
use crate::potential::PotentialError;
use crate::well::WellError;
use thiserror::Error;

/// Result type for whole-problem solves
pub type Result<T> = std::result::Result<T, SolverError>;

/// Everything `solve_problem` can fail with
///
/// Each variant wraps the error of the pipeline stage that rejected the
/// request. A failed solve yields no partial solution and is never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The well parameters were rejected before any computation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] WellError),

    /// The requested shape name is not in the catalog
    #[error("{0}")]
    UnknownShape(#[from] PotentialError),

    /// Hamiltonian assembly failed
    #[error("assembly failed: {0}")]
    Assembly(#[from] HamiltonianError),

    /// Diagonalization failed
    #[error("eigensolve failed: {0}")]
    Numerical(#[from] EigenError),
}
