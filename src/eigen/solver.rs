/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Eigensolver front end and real-space reconstruction
//!
//! This module owns the public face of diagonalization: promote the real
//! Hamiltonian to complex Faer storage, run the Schur reduction, turn the
//! triangular factor into normalized eigenvectors, rebuild real-space
//! wavefunctions in the well basis, and hand back states in a
//! deterministic energy order.

use super::errors::{EigenError, Result};
use super::schur::{schur, triangular_eigenvectors};
use crate::utils::linear_algebra::{
    col_to_ndarray, matrix_column, normalize_vector, promote_to_faer,
};
use crate::well::Basis;
use log::debug;
use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// A single stationary state of the solved problem
#[derive(Debug, Clone, PartialEq)]
pub struct EigenState {
    /// Energy eigenvalue; imaginary parts are rounding-scale artifacts of
    /// the general solver whenever the Hamiltonian is near-symmetric
    pub energy: Complex64,
    /// Real-space wavefunction samples on the shared grid
    pub wavefunction: Array1<Complex64>,
}

/// General eigensolver for assembled Hamiltonians
///
/// The matrix is diagonalized exactly as assembled, without symmetrizing
/// it first, so the solver handles arbitrary real square matrices and may
/// report complex eigenvalues. Energies are ordered ascending by
/// `(re, im)` under `total_cmp`, which is total and deterministic and
/// coincides with plain numeric order when imaginary parts vanish.
#[derive(Debug, Clone)]
pub struct EigenSolver {
    /// Relative deflation threshold for the QR iteration
    tolerance: f64,
    /// Sweep budget per eigenvalue
    max_sweeps: usize,
}

impl Default for EigenSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl EigenSolver {
    /// Create a solver with machine-precision deflation and the standard
    /// sweep budget.
    pub fn new() -> Self {
        Self {
            tolerance: f64::EPSILON,
            max_sweeps: 30,
        }
    }

    /// Set the relative deflation threshold
    pub fn set_tolerance(&mut self, tolerance: f64) -> &mut Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the sweep budget per eigenvalue
    pub fn set_max_sweeps(&mut self, max_sweeps: usize) -> &mut Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Diagonalize a Hamiltonian and reconstruct its eigenfunctions.
    ///
    /// Returns one state per basis function, sorted ascending by
    /// `(energy.re, energy.im)`. The expansion weights behind each
    /// wavefunction are normalized to unit Euclidean length, so with the
    /// discretely orthonormal well basis every returned wavefunction has
    /// unit discrete norm up to grid rounding.
    ///
    /// # Errors
    ///
    /// * [`EigenError::DimensionMismatch`] when the matrix is not square
    ///   or does not match the basis size
    /// * [`EigenError::NumericalFailure`] when a non-finite value enters
    ///   or leaves the decomposition
    /// * [`EigenError::NonConvergent`] when the QR iteration exhausts its
    ///   sweep budget
    pub fn solve(&self, hamiltonian: &Array2<f64>, basis: &Basis) -> Result<Vec<EigenState>> {
        let n = hamiltonian.nrows();
        if hamiltonian.ncols() != n {
            return Err(EigenError::DimensionMismatch(format!(
                "Hamiltonian is {}x{}, expected square",
                n,
                hamiltonian.ncols()
            )));
        }
        if basis.len() != n {
            return Err(EigenError::DimensionMismatch(format!(
                "Hamiltonian is {0}x{0} but the basis has {1} states",
                n,
                basis.len()
            )));
        }
        for &value in hamiltonian.iter() {
            if !value.is_finite() {
                return Err(EigenError::NumericalFailure(
                    "Hamiltonian contains non-finite entries".to_string(),
                ));
            }
        }

        let promoted = promote_to_faer(&hamiltonian.view());
        let decomposition = schur(promoted, self.tolerance, self.max_sweeps)?;
        debug!(
            "Schur iteration converged in {} sweeps for n = {}",
            decomposition.sweeps, n
        );
        let vectors = triangular_eigenvectors(&decomposition);

        let mut states = Vec::with_capacity(n);
        for k in 0..n {
            let energy = decomposition.t[(k, k)];
            if !(energy.re.is_finite() && energy.im.is_finite()) {
                return Err(EigenError::NumericalFailure(format!(
                    "eigenvalue {} is not finite",
                    k
                )));
            }

            let weights_col = normalize_vector(&matrix_column(&vectors, k));
            let weights = col_to_ndarray(&weights_col);
            let wavefunction = reconstruct(&weights, basis)?;
            states.push(EigenState {
                energy,
                wavefunction,
            });
        }

        states.sort_by(|left, right| {
            left.energy
                .re
                .total_cmp(&right.energy.re)
                .then_with(|| left.energy.im.total_cmp(&right.energy.im))
        });

        Ok(states)
    }
}

/// Rebuild a real-space wavefunction from basis-expansion weights.
///
/// The result is `sum_i weights[i] * psi_i` sampled on the shared grid:
/// complex weights applied to the real basis functions.
pub fn reconstruct(weights: &Array1<Complex64>, basis: &Basis) -> Result<Array1<Complex64>> {
    let n = basis.len();
    if weights.len() != n {
        return Err(EigenError::DimensionMismatch(format!(
            "{} weights for a {}-state basis",
            weights.len(),
            n
        )));
    }

    let num_points = basis.num_grid_points();
    let functions = basis.eigenfunctions();
    let mut wavefunction = Array1::<Complex64>::zeros(num_points);

    for i in 0..n {
        let weight = weights[i];
        if !(weight.re.is_finite() && weight.im.is_finite()) {
            return Err(EigenError::NumericalFailure(format!(
                "expansion weight {} is not finite",
                i
            )));
        }
        for g in 0..num_points {
            wavefunction[g] += weight * functions[(i, g)];
        }
    }

    Ok(wavefunction)
}
