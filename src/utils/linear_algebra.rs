/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Linear algebra utilities using the Faer library
//!
//! The Hamiltonian is assembled as a real ndarray matrix but diagonalized
//! over `faer::Mat<Complex64>` storage. This module provides the
//! conversions between the two worlds plus the complex vector helpers the
//! eigensolver relies on.

use faer::{col, Mat};
use ndarray::{Array1, ArrayView2};
use num_complex::Complex64;
use rayon::prelude::*;

/// Promote a real ndarray matrix to a complex Faer matrix.
///
/// Every entry becomes `value + 0i`. The eigensolver works in complex
/// arithmetic throughout because a non-symmetric real matrix can carry
/// complex eigenvalues.
pub fn promote_to_faer(array: &ArrayView2<f64>) -> Mat<Complex64> {
    let (rows, cols) = array.dim();
    let mut result = Mat::<Complex64>::zeros(rows, cols);

    if rows * cols > 4096 {
        // Large matrices: fill row blocks in parallel, then merge.
        let chunks = rows.min(16);
        let chunk_size = rows.div_ceil(chunks);

        // Clamp both ends: ceil division can push trailing chunks past the
        // last row, leaving them empty.
        let blocks: Vec<_> = (0..chunks)
            .map(|chunk_idx| {
                let start_row = (chunk_idx * chunk_size).min(rows);
                let end_row = (start_row + chunk_size).min(rows);
                (start_row, end_row)
            })
            .collect();

        let filled: Vec<_> = blocks
            .into_par_iter()
            .map(|(start_row, end_row)| {
                let mut partial = vec![vec![Complex64::new(0.0, 0.0); cols]; end_row - start_row];
                for (local_i, i) in (start_row..end_row).enumerate() {
                    for j in 0..cols {
                        partial[local_i][j] = Complex64::new(array[(i, j)], 0.0);
                    }
                }
                (start_row, partial)
            })
            .collect();

        for (start_row, partial) in filled {
            for (local_i, i) in (start_row..(start_row + partial.len())).enumerate() {
                for j in 0..cols {
                    result[(i, j)] = partial[local_i][j];
                }
            }
        }
    } else {
        for i in 0..rows {
            for j in 0..cols {
                result[(i, j)] = Complex64::new(array[(i, j)], 0.0);
            }
        }
    }

    result
}

/// Extract column `j` of a Faer matrix as an owned Faer column vector.
pub fn matrix_column(matrix: &Mat<Complex64>, j: usize) -> col::Col<Complex64> {
    let n = matrix.nrows();
    let mut result = col::Col::<Complex64>::zeros(n);
    for i in 0..n {
        result[i] = matrix[(i, j)];
    }
    result
}

/// Convert a Faer column vector to an ndarray vector.
pub fn col_to_ndarray(vector: &col::Col<Complex64>) -> Array1<Complex64> {
    let n = vector.nrows();
    let mut result = Array1::<Complex64>::zeros(n);
    for i in 0..n {
        result[i] = vector[i];
    }
    result
}

/// Create an identity complex matrix with Faer
pub fn eye(size: usize) -> Mat<Complex64> {
    Mat::<Complex64>::identity(size, size)
}

/// Compute the Euclidean norm of a complex vector.
pub fn vector_norm(v: &col::Col<Complex64>) -> f64 {
    let mut sum_squares: f64 = 0.0;
    for item in v.iter() {
        sum_squares += item.norm_sqr();
    }
    sum_squares.sqrt()
}

/// Normalize a vector to unit Euclidean length.
///
/// Returns the original vector unchanged when its norm is numerically zero,
/// so callers never divide by zero.
pub fn normalize_vector(v: &col::Col<Complex64>) -> col::Col<Complex64> {
    let n = v.nrows();
    let norm = vector_norm(v);

    if norm < 1e-300 {
        return v.clone();
    }

    let inv_norm = 1.0 / norm;
    let mut result = col::Col::<Complex64>::zeros(n);
    for i in 0..n {
        result[i] = v[i] * inv_norm;
    }
    result
}
