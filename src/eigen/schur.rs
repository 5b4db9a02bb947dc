/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Complex Schur decomposition by shifted QR iteration
//!
//! The assembled Hamiltonian is real but not exactly symmetric, so its
//! spectrum is computed with a general complex eigensolver: reduce to upper
//! Hessenberg form with Givens similarity transforms, then drive the
//! subdiagonal to zero with Wilkinson-shifted QR sweeps. The result is
//! `A = Q T Q^H` with `T` upper triangular and `Q` unitary; eigenvalues are
//! the diagonal of `T`, and eigenvectors come from back-substitution on the
//! triangular factor.
//!
//! Explicit-shift QR with full-width rotations is entirely adequate at the
//! basis sizes this solver runs (tens of states). Rotations are applied
//! across whole rows and columns so the already-deflated part of the matrix
//! stays consistent with the accumulated `Q`.

use super::errors::{EigenError, Result};
use crate::utils::linear_algebra::eye;
use faer::Mat;
use num_complex::Complex64;

/// How often a stalled block receives an exceptional shift
const EXCEPTIONAL_SHIFT_PERIOD: usize = 10;

/// Result of the Schur reduction: `A = Q T Q^H`
pub(super) struct SchurDecomposition {
    /// Upper triangular factor, eigenvalues on the diagonal
    pub t: Mat<Complex64>,
    /// Accumulated unitary factor
    pub q: Mat<Complex64>,
    /// QR sweeps spent across all blocks
    pub sweeps: usize,
}

/// Compute a Givens rotation `G = [[c, s], [-conj(s), c]]` with real `c`
/// such that `G * [a, b]^T` has a zero second component.
fn givens(a: Complex64, b: Complex64) -> (f64, Complex64) {
    let a_norm = a.norm();
    let b_norm = b.norm();
    if b_norm == 0.0 {
        return (1.0, Complex64::new(0.0, 0.0));
    }
    if a_norm == 0.0 {
        return (0.0, Complex64::new(1.0, 0.0));
    }
    let r = a_norm.hypot(b_norm);
    let c = a_norm / r;
    let s = (a / a_norm) * b.conj() / r;
    (c, s)
}

/// Apply the rotation to rows `p` and `q` from the left: `M <- G M`.
fn rotate_rows(m: &mut Mat<Complex64>, p: usize, q: usize, c: f64, s: Complex64) {
    let cols = m.ncols();
    for j in 0..cols {
        let mp = m[(p, j)];
        let mq = m[(q, j)];
        m[(p, j)] = mp * c + mq * s;
        m[(q, j)] = mq * c - mp * s.conj();
    }
}

/// Apply the adjoint rotation to columns `p` and `q` from the right:
/// `M <- M G^H`.
fn rotate_cols(m: &mut Mat<Complex64>, p: usize, q: usize, c: f64, s: Complex64) {
    let rows = m.nrows();
    for i in 0..rows {
        let mp = m[(i, p)];
        let mq = m[(i, q)];
        m[(i, p)] = mp * c + mq * s.conj();
        m[(i, q)] = mq * c - mp * s;
    }
}

/// Reduce `a` to upper Hessenberg form in place, accumulating the
/// similarity transforms into `q`.
fn hessenberg(a: &mut Mat<Complex64>, q: &mut Mat<Complex64>) {
    let n = a.nrows();
    for j in 0..n.saturating_sub(2) {
        for i in (j + 2)..n {
            if a[(i, j)].norm() == 0.0 {
                continue;
            }
            let (c, s) = givens(a[(j + 1, j)], a[(i, j)]);
            rotate_rows(a, j + 1, i, c, s);
            rotate_cols(a, j + 1, i, c, s);
            rotate_cols(q, j + 1, i, c, s);
            a[(i, j)] = Complex64::new(0.0, 0.0);
        }
    }
}

/// Wilkinson shift: the eigenvalue of the trailing 2x2 block closest to
/// the bottom-right entry.
fn wilkinson_shift(t: &Mat<Complex64>, hi: usize) -> Complex64 {
    let a = t[(hi - 1, hi - 1)];
    let b = t[(hi - 1, hi)];
    let c = t[(hi, hi - 1)];
    let d = t[(hi, hi)];

    let trace_half = (a + d) * 0.5;
    let disc = (trace_half * trace_half - (a * d - b * c)).sqrt();
    let lambda1 = trace_half + disc;
    let lambda2 = trace_half - disc;
    if (lambda1 - d).norm() <= (lambda2 - d).norm() {
        lambda1
    } else {
        lambda2
    }
}

/// One explicit-shift QR step on the active block `[lo..=hi]`.
///
/// Factors `T - shift I` with Givens rotations on adjacent row pairs, then
/// multiplies the factors back in reverse order and restores the shift.
/// Every rotation stays inside the block's index range, so subtracting and
/// re-adding the shift on the block diagonal is an exact similarity.
fn qr_sweep(
    a: &mut Mat<Complex64>,
    q: &mut Mat<Complex64>,
    lo: usize,
    hi: usize,
    shift: Complex64,
) {
    for k in lo..=hi {
        a[(k, k)] -= shift;
    }

    let mut rotations = Vec::with_capacity(hi - lo);
    for k in lo..hi {
        let (c, s) = givens(a[(k, k)], a[(k + 1, k)]);
        rotate_rows(a, k, k + 1, c, s);
        a[(k + 1, k)] = Complex64::new(0.0, 0.0);
        rotations.push((c, s));
    }

    for (offset, (c, s)) in rotations.into_iter().enumerate() {
        let k = lo + offset;
        rotate_cols(a, k, k + 1, c, s);
        rotate_cols(q, k, k + 1, c, s);
    }

    for k in lo..=hi {
        a[(k, k)] += shift;
    }
}

/// Drive a matrix to upper triangular (complex Schur) form.
///
/// `tolerance` scales the relative deflation test on subdiagonal entries;
/// `max_sweeps` bounds the total number of QR sweeps as `max_sweeps * n`.
pub(super) fn schur(
    mut a: Mat<Complex64>,
    tolerance: f64,
    max_sweeps: usize,
) -> Result<SchurDecomposition> {
    let n = a.nrows();
    let mut q = eye(n);

    if n < 2 {
        return Ok(SchurDecomposition { t: a, q, sweeps: 0 });
    }

    hessenberg(&mut a, &mut q);

    let budget = max_sweeps.saturating_mul(n);
    let mut sweeps = 0usize;
    let mut stalled = 0usize;
    let mut hi = n - 1;

    while hi > 0 {
        // Find the active block [lo..=hi]: walk up until a negligible
        // subdiagonal entry splits the matrix.
        let mut lo = hi;
        while lo > 0 {
            let sub = a[(lo, lo - 1)].norm();
            let scale = a[(lo - 1, lo - 1)].norm() + a[(lo, lo)].norm();
            let threshold = if scale > 0.0 {
                tolerance * scale
            } else {
                tolerance
            };
            if sub <= threshold {
                a[(lo, lo - 1)] = Complex64::new(0.0, 0.0);
                break;
            }
            lo -= 1;
        }

        if lo == hi {
            // Trailing 1x1 block: this eigenvalue is converged.
            hi -= 1;
            stalled = 0;
            continue;
        }

        sweeps += 1;
        if sweeps > budget {
            return Err(EigenError::NonConvergent(format!(
                "no deflation after {} sweeps on a {}x{} matrix (active block {}..={})",
                budget, n, n, lo, hi
            )));
        }

        stalled += 1;
        let shift = if stalled % EXCEPTIONAL_SHIFT_PERIOD == 0 {
            // Perturb a limit cycle with the size of the last subdiagonal.
            a[(hi, hi)] + 0.75 * a[(hi, hi - 1)].norm()
        } else {
            wilkinson_shift(&a, hi)
        };

        qr_sweep(&mut a, &mut q, lo, hi, shift);
    }

    Ok(SchurDecomposition { t: a, q, sweeps })
}

/// Eigenvectors from the triangular factor by back-substitution.
///
/// For each eigenvalue `lambda_k = T[k, k]` the system
/// `(T - lambda_k I) y = 0` with `y[k] = 1` is solved upward; near-zero
/// pivots are floored at rounding scale instead of dividing by zero, which
/// keeps clustered eigenvalues from blowing up the substitution. Column `k`
/// of the result is the unnormalized eigenvector already rotated back
/// through `Q`.
pub(super) fn triangular_eigenvectors(decomposition: &SchurDecomposition) -> Mat<Complex64> {
    let t = &decomposition.t;
    let q = &decomposition.q;
    let n = t.nrows();

    let mut t_scale = 0.0f64;
    for i in 0..n {
        for j in i..n {
            t_scale = t_scale.max(t[(i, j)].norm());
        }
    }
    let pivot_floor = f64::EPSILON * t_scale.max(1.0);

    let mut vectors = Mat::<Complex64>::zeros(n, n);
    let mut y = vec![Complex64::new(0.0, 0.0); n];

    for k in 0..n {
        let lambda = t[(k, k)];

        for entry in y.iter_mut() {
            *entry = Complex64::new(0.0, 0.0);
        }
        y[k] = Complex64::new(1.0, 0.0);

        for j in (0..k).rev() {
            let mut sum = Complex64::new(0.0, 0.0);
            for m in (j + 1)..=k {
                sum += t[(j, m)] * y[m];
            }
            let mut pivot = t[(j, j)] - lambda;
            if pivot.norm() < pivot_floor {
                pivot = Complex64::new(pivot_floor, 0.0);
            }
            y[j] = -sum / pivot;
        }

        for i in 0..n {
            let mut sum = Complex64::new(0.0, 0.0);
            for m in 0..=k {
                sum += q[(i, m)] * y[m];
            }
            vectors[(i, k)] = sum;
        }
    }

    vectors
}
