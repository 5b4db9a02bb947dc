/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Eigensolver and reconstructor module
//!
//! Diagonalizes assembled Hamiltonians with a general complex eigensolver
//! and rebuilds real-space wavefunctions in the well basis. The matrix is
//! treated as general because the discretized matrix elements are symmetric
//! only up to rounding and the solver deliberately does not symmetrize.

mod errors;
mod schur;
mod solver;

pub use errors::{EigenError, Result};
pub use solver::{reconstruct, EigenSolver, EigenState};
