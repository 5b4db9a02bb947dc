/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! The solver facade
//!
//! One logical operation: take a [`SolveConfig`](crate::input::SolveConfig),
//! run the whole pipeline (basis, potential samples, Hamiltonian,
//! diagonalization, reconstruction), and return a [`Solution`]. Every solve
//! is independent; nothing is cached between calls.

mod errors;

pub use errors::{Result, SolverError};

use crate::eigen::{EigenSolver, EigenState};
use crate::hamiltonian::assemble;
use crate::input::SolveConfig;
use crate::potential::{sample, PotentialShape, SampledPotential};
use crate::well::{Basis, Well};
use log::{debug, info};
use ndarray::Array1;

/// The complete output of one solve
///
/// Carries the shared grid, the sampled potential the Hamiltonian was built
/// from, and the solved states in ascending energy order. Wavefunctions and
/// the potential are aligned to `x_grid` index by index.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Grid of `steps + 1` points spanning the well
    pub x_grid: Array1<f64>,
    /// Potential samples, wall sentinel at both ends
    pub potential: SampledPotential,
    /// Solved states, ascending by `(energy.re, energy.im)`
    pub states: Vec<EigenState>,
}

impl Solution {
    /// Number of solved states
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The sorted energies alone
    pub fn energies(&self) -> Vec<num_complex::Complex64> {
        self.states.iter().map(|state| state.energy).collect()
    }
}

/// Solve one configuration end to end.
///
/// Resolves the shape name, validates the well, generates the basis,
/// samples the potential, assembles the Hamiltonian, and diagonalizes it.
/// Stages run strictly in order and the first failure is returned as is.
///
/// # Errors
///
/// See [`SolverError`]; each variant corresponds to one pipeline stage.
pub fn solve_problem(config: &SolveConfig) -> Result<Solution> {
    debug!("solve requested: {:?}", config);

    let shape = PotentialShape::from_name(&config.shape)?;
    let well = Well::with_constants(
        config.well_min,
        config.well_max,
        config.steps,
        config.basis_size,
        config.hbar,
        config.mass,
    )?;
    info!(
        "solving '{}' (amplitude {}) on [{}, {}] with {} steps and {} basis states",
        shape,
        config.amplitude,
        well.min(),
        well.max(),
        well.steps(),
        well.num_basis_states()
    );

    let basis = Basis::generate(&well);
    let potential = sample(shape, &well, config.amplitude);
    let hamiltonian = assemble(&potential, &basis, &well)?;
    debug!(
        "Hamiltonian assembled: {} x {}",
        hamiltonian.nrows(),
        hamiltonian.ncols()
    );

    let states = EigenSolver::new().solve(&hamiltonian, &basis)?;
    if let Some(ground) = states.first() {
        info!(
            "solve complete, ground state energy {:.6} + {:.1e}i",
            ground.energy.re, ground.energy.im
        );
    }

    Ok(Solution {
        x_grid: basis.x_grid().clone(),
        potential,
        states,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_solves() {
        let config = SolveConfig::default();
        let solution = solve_problem(&config).unwrap();
        assert_eq!(solution.num_states(), 10);
        assert_eq!(solution.x_grid.len(), 201);
        assert_eq!(solution.potential.len(), 201);
        assert_eq!(solution.energies().len(), 10);
        for state in &solution.states {
            assert_eq!(state.wavefunction.len(), 201);
        }
    }

    #[test]
    fn test_invalid_well_surfaces_as_configuration_error() {
        let config = SolveConfig {
            well_min: 1.0,
            well_max: 0.0,
            ..SolveConfig::default()
        };
        assert!(matches!(
            solve_problem(&config),
            Err(SolverError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_unknown_shape_surfaces_before_validation() {
        // Shape resolution happens first, so even an otherwise broken
        // request reports the unknown name.
        let config = SolveConfig {
            shape: "morse".to_string(),
            ..SolveConfig::default()
        };
        assert!(matches!(
            solve_problem(&config),
            Err(SolverError::UnknownShape(_))
        ));
    }
}
