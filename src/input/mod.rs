/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Solve configuration and JSON loading
//!
//! A [`SolveConfig`] names everything one solve needs: the well geometry,
//! the grid resolution, the basis size, the potential shape and amplitude,
//! and the physical constants. Every field has a default so partial JSON
//! files work; anything a file leaves out falls back to the default value.

mod errors;

pub use errors::{InputError, Result};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete description of one solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Left edge of the well
    pub well_min: f64,
    /// Right edge of the well
    pub well_max: f64,
    /// Number of grid intervals (the grid has `steps + 1` points)
    pub steps: usize,
    /// Number of basis states, also the number of solved states
    pub basis_size: usize,
    /// Potential shape name, e.g. "square" or "kronig_penney"
    pub shape: String,
    /// Potential amplitude, may be negative
    pub amplitude: f64,
    /// Reduced Planck constant in the chosen unit system
    pub hbar: f64,
    /// Particle mass in the chosen unit system
    pub mass: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            well_min: 0.0,
            well_max: 1.0,
            steps: 200,
            basis_size: 10,
            shape: "square".to_string(),
            amplitude: 100.0,
            hbar: 1.0,
            mass: 1.0,
        }
    }
}

impl SolveConfig {
    /// Load a configuration from a JSON file
    ///
    /// Missing fields take their defaults, so a file may specify only the
    /// values it wants to change.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
