/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Hamiltonian assembly in the square-well eigenbasis
//!
//! In the basis of the bare well the kinetic part of the Hamiltonian is
//! exactly diagonal (the analytic eigenvalues), so only the potential needs
//! a matrix element computation. Those elements are discretized with the
//! average value theorem: the mean of the elementwise product
//! `psi_i * V * psi_j` over all grid samples, scaled by the well width.
//!
//! The discretization sums over all `steps + 1` samples, boundary points
//! included. Because the evaluation order of the two triangle halves
//! differs, the assembled matrix is symmetric only up to rounding; the
//! eigensolver treats it as a general matrix.

use super::errors::{HamiltonianError, Result};
use crate::potential::SampledPotential;
use crate::well::{Basis, Well};
use log::debug;
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

/// Row count above which assembly switches to parallel rows
const PARALLEL_THRESHOLD: usize = 64;

/// Discrete potential matrix element between two basis states.
///
/// Computes `width * mean_k(psi_i[k] * v[k] * psi_j[k])` with the mean taken
/// over every sample, so the divisor is the number of grid points, not the
/// number of steps.
pub fn matrix_element(
    psi_i: ArrayView1<'_, f64>,
    v: ArrayView1<'_, f64>,
    psi_j: ArrayView1<'_, f64>,
    width: f64,
) -> f64 {
    let num_points = psi_i.len();
    let mut acc = 0.0;
    for k in 0..num_points {
        acc += psi_i[k] * v[k] * psi_j[k];
    }
    width * acc / num_points as f64
}

/// Assemble the dense Hamiltonian for one solve.
///
/// Entry `(i, j)` is the potential matrix element between basis states `i`
/// and `j`; the analytic kinetic eigenvalue of state `i` is added on the
/// diagonal. Entries are pure functions of the immutable inputs, so rows
/// are computed in parallel for larger bases.
///
/// # Errors
///
/// Fails with [`HamiltonianError::DimensionMismatch`] when the potential,
/// the basis, and the well do not agree on the grid.
pub fn assemble(
    potential: &SampledPotential,
    basis: &Basis,
    well: &Well,
) -> Result<Array2<f64>> {
    let n = basis.len();
    let num_points = basis.num_grid_points();

    if potential.len() != num_points {
        return Err(HamiltonianError::DimensionMismatch(format!(
            "potential has {} samples but the basis grid has {} points",
            potential.len(),
            num_points
        )));
    }
    if well.num_grid_points() != num_points || well.num_basis_states() != n {
        return Err(HamiltonianError::DimensionMismatch(format!(
            "well describes {} grid points and {} states, basis carries {} and {}",
            well.num_grid_points(),
            well.num_basis_states(),
            num_points,
            n
        )));
    }

    let width = well.width();
    let functions = basis.eigenfunctions();
    let v = potential.view();

    let mut hamiltonian = Array2::<f64>::zeros((n, n));

    if n > PARALLEL_THRESHOLD {
        debug!("assembling {}x{} Hamiltonian with parallel rows", n, n);
        let rows: Vec<(usize, Vec<f64>)> = (0..n)
            .into_par_iter()
            .map(|i| {
                let psi_i = functions.row(i);
                let mut row = vec![0.0; n];
                for (j, entry) in row.iter_mut().enumerate() {
                    *entry = matrix_element(psi_i, v, functions.row(j), width);
                }
                (i, row)
            })
            .collect();

        for (i, row) in rows {
            for (j, value) in row.into_iter().enumerate() {
                hamiltonian[(i, j)] = value;
            }
        }
    } else {
        debug!("assembling {}x{} Hamiltonian sequentially", n, n);
        for i in 0..n {
            let psi_i = functions.row(i);
            for j in 0..n {
                hamiltonian[(i, j)] = matrix_element(psi_i, v, functions.row(j), width);
            }
        }
    }

    let eigenvalues = basis.eigenvalues();
    for i in 0..n {
        hamiltonian[(i, i)] += eigenvalues[i];
    }

    Ok(hamiltonian)
}
