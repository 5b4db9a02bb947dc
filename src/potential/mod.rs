/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Potential catalog module
//!
//! The solver supports a closed set of named potential shapes. A shape is
//! resolved from its string name once per solve, then sampled onto the well
//! grid with the caller's amplitude; the two boundary samples always carry
//! the finite wall sentinel that stands in for the well's infinite walls.

mod errors;
mod shapes;

pub use errors::{PotentialError, Result};
pub use shapes::{sample, PotentialShape, SampledPotential, WALL_POTENTIAL};
