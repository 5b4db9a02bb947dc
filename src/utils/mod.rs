/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Shared numeric utilities
//!
//! Grid-weighted inner products and the ndarray/Faer interchange helpers
//! used by the assembler, the eigensolver, and the output renderers.

pub mod errors;
pub mod grid;
pub mod linear_algebra;

pub use errors::{Result, UtilsError};
pub use grid::{grid_inner_product, grid_norm, grid_overlap};
