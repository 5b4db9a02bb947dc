/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! # qwell-rs
//!
//! A Rayleigh-Ritz solver for the one-dimensional time-independent
//! Schrodinger equation inside an infinite square well.
//!
//! The well's own eigenfunctions form the expansion basis: an arbitrary
//! potential sampled on the grid is projected onto that basis, the resulting
//! Hamiltonian matrix is diagonalized, and the eigenvectors are mapped back
//! to position space. Nine built-in potential shapes cover wells, barriers,
//! ramps and a Kronig-Penney lattice.
//!
//! Typical use goes through [`SolveConfig`] and [`solve_problem`]; the inner
//! modules stay public for callers that want to assemble the pipeline by
//! hand.

pub mod cli;
pub mod eigen;
pub mod hamiltonian;
pub mod input;
pub mod potential;
pub mod solver;
pub mod utils;
pub mod well;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

pub use input::SolveConfig;
pub use solver::{solve_problem, Solution, SolverError};
