/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Analytic eigenbasis of the infinite square well
//!
//! For a well of width `W` the exact eigenpairs are known in closed form:
//!
//! ```text
//! E_n   = (n hbar pi / W)^2 / (2 m)
//! psi_n = sqrt(2 / W) sin(n pi (x - min) / W)      n = 1, 2, 3, ...
//! ```
//!
//! Generation samples these closed forms on the shared grid. No numerical
//! solving is involved; the only approximation downstream is the
//! discretization of integrals into grid sums.

use super::Well;
use ndarray::{Array1, Array2, ArrayView1};
use std::f64::consts::PI;

/// The expansion basis for one solve: eigenvalues and grid-sampled
/// eigenfunctions of the bare well.
///
/// Row `i` of the eigenfunction matrix holds basis state `i + 1` (quantum
/// numbers are 1-indexed) sampled at every point of the grid. Within the
/// tolerance of the grid sums the rows are orthonormal under the
/// `width / steps` weight.
#[derive(Debug, Clone)]
pub struct Basis {
    x_grid: Array1<f64>,
    eigenvalues: Array1<f64>,
    eigenfunctions: Array2<f64>,
}

impl Basis {
    /// Generate the basis for a validated well.
    ///
    /// Deterministic and pure: the same well always produces bitwise
    /// identical output. Boundary samples are whatever `sin` evaluates to
    /// there, which is zero at the lower edge and a rounding-sized value at
    /// the upper edge; they are deliberately not forced to zero.
    pub fn generate(well: &Well) -> Self {
        let num_states = well.num_basis_states();
        let num_points = well.num_grid_points();
        let width = well.width();
        let min = well.min();

        let x_grid = well.x_grid();
        let norm = (2.0 / width).sqrt();

        let mut eigenvalues = Array1::<f64>::zeros(num_states);
        let mut eigenfunctions = Array2::<f64>::zeros((num_states, num_points));

        for i in 0..num_states {
            let n = (i + 1) as f64;
            eigenvalues[i] = (n * well.hbar() * PI / width).powi(2) / (2.0 * well.mass());

            let wavenumber = n * PI / width;
            for (j, &x) in x_grid.iter().enumerate() {
                eigenfunctions[(i, j)] = norm * (wavenumber * (x - min)).sin();
            }
        }

        Self {
            x_grid,
            eigenvalues,
            eigenfunctions,
        }
    }

    /// The shared grid the eigenfunctions are sampled on
    pub fn x_grid(&self) -> &Array1<f64> {
        &self.x_grid
    }

    /// Analytic eigenvalues, strictly increasing in the quantum number
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// All eigenfunction samples, one basis state per row
    pub fn eigenfunctions(&self) -> &Array2<f64> {
        &self.eigenfunctions
    }

    /// Samples of basis state `i` (0-indexed, quantum number `i + 1`)
    pub fn eigenfunction(&self, i: usize) -> ArrayView1<'_, f64> {
        self.eigenfunctions.row(i)
    }

    /// Number of basis states
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Whether the basis holds no states; never true for a generated basis
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Number of grid points each eigenfunction is sampled on
    pub fn num_grid_points(&self) -> usize {
        self.x_grid.len()
    }
}
