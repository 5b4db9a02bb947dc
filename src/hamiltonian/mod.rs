/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Hamiltonian assembly in the infinite-well eigenbasis
//!
//! Builds the dense matrix `H[i][j] = <psi_i| V |psi_j> + delta_ij E_i`
//! from a sampled potential and a generated basis. Assembly parallelizes
//! across rows once the basis is large enough to pay for the fan-out.

mod assembler;
mod errors;

pub use assembler::{assemble, matrix_element};
pub use errors::{HamiltonianError, Result};
