/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Discrete inner products and norms on the shared solver grid
//!
//! Every quantity in the solver lives on a uniform grid of `steps + 1`
//! samples spanning a well of width `W`. Sums over those samples approximate
//! integrals with the rectangle-rule weight `W / steps`, and the helpers here
//! keep that weighting in one place so the basis, the assembler, and the
//! output renderers all agree on what "norm" means.

use super::errors::{Result, UtilsError};
use ndarray::Array1;
use num_complex::Complex64;

/// Discrete overlap of two real sample vectors on a grid of width `width`.
///
/// Computes `(width / steps) * sum_k a[k] * b[k]` where `steps` is one less
/// than the number of samples. For the analytic square-well eigenfunctions
/// this reproduces the Kronecker delta to near machine precision.
pub fn grid_overlap(a: &Array1<f64>, b: &Array1<f64>, width: f64) -> Result<f64> {
    weight_for(a.len(), b.len(), width).map(|w| {
        let mut acc = 0.0;
        for k in 0..a.len() {
            acc += a[k] * b[k];
        }
        w * acc
    })
}

/// Discrete inner product `<a|b>` of two complex sample vectors.
///
/// The left argument is conjugated, matching the quantum-mechanical
/// convention, and the sum carries the same `width / steps` weight as
/// [`grid_overlap`].
pub fn grid_inner_product(
    a: &Array1<Complex64>,
    b: &Array1<Complex64>,
    width: f64,
) -> Result<Complex64> {
    weight_for(a.len(), b.len(), width).map(|w| {
        let mut acc = Complex64::new(0.0, 0.0);
        for k in 0..a.len() {
            acc += a[k].conj() * b[k];
        }
        acc * w
    })
}

/// Discrete norm `sqrt(<f|f>)` of a complex sample vector.
pub fn grid_norm(f: &Array1<Complex64>, width: f64) -> Result<f64> {
    weight_for(f.len(), f.len(), width).map(|w| {
        let mut acc = 0.0;
        for k in 0..f.len() {
            acc += f[k].norm_sqr();
        }
        (w * acc).sqrt()
    })
}

/// Shared validation: both vectors must cover the same grid of at least two
/// points, and the grid must have positive extent.
fn weight_for(len_a: usize, len_b: usize, width: f64) -> Result<f64> {
    if len_a != len_b {
        return Err(UtilsError::DimensionMismatch(format!(
            "sample vectors have {} and {} entries",
            len_a, len_b
        )));
    }
    if len_a < 2 {
        return Err(UtilsError::Generic(format!(
            "grid needs at least 2 samples, got {}",
            len_a
        )));
    }
    if !(width.is_finite() && width > 0.0) {
        return Err(UtilsError::Generic(format!(
            "grid width must be positive and finite, got {}",
            width
        )));
    }
    Ok(width / (len_a - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_overlap_of_square_well_modes() {
        // sqrt(2/W) sin(n pi x / W) sampled on [0, W] is discretely
        // orthonormal under the W/steps weight.
        let width = 2.0;
        let steps = 100;
        let sample = |n: usize| {
            Array1::from_shape_fn(steps + 1, |k| {
                let x = width * k as f64 / steps as f64;
                (2.0 / width).sqrt() * (n as f64 * PI * x / width).sin()
            })
        };

        let psi1 = sample(1);
        let psi2 = sample(2);
        assert_relative_eq!(grid_overlap(&psi1, &psi1, width).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(grid_overlap(&psi2, &psi2, width).unwrap(), 1.0, epsilon = 1e-12);
        let cross = grid_overlap(&psi1, &psi2, width).unwrap();
        assert!(cross.abs() < 1e-12, "cross overlap {} not negligible", cross);
    }

    #[test]
    fn test_inner_product_conjugates_left_argument() {
        let a = Array1::from_vec(vec![Complex64::new(0.0, 1.0), Complex64::new(1.0, 0.0)]);
        let b = Array1::from_vec(vec![Complex64::new(0.0, 1.0), Complex64::new(1.0, 0.0)]);
        // <a|a> = (W/steps) * (|i|^2 + |1|^2) = 1.0 * 2.0
        let ip = grid_inner_product(&a, &b, 1.0).unwrap();
        assert_relative_eq!(ip.re, 2.0, epsilon = 1e-14);
        assert_relative_eq!(ip.im, 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_matches_inner_product() {
        let f = Array1::from_vec(vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, -2.0),
            Complex64::new(0.5, 0.5),
        ]);
        let width = 3.0;
        let norm = grid_norm(&f, width).unwrap();
        let ip = grid_inner_product(&f, &f, width).unwrap();
        assert_relative_eq!(norm * norm, ip.re, epsilon = 1e-12);
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let a = Array1::zeros(4);
        let b = Array1::zeros(5);
        assert!(grid_overlap(&a, &b, 1.0).is_err());
    }

    #[test]
    fn test_degenerate_grid_is_rejected() {
        let f = Array1::from_vec(vec![Complex64::new(1.0, 0.0)]);
        assert!(grid_norm(&f, 1.0).is_err());
        let g = Array1::from_vec(vec![Complex64::new(1.0, 0.0); 3]);
        assert!(grid_norm(&g, 0.0).is_err());
        assert!(grid_norm(&g, -1.0).is_err());
    }
}
