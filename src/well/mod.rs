/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Infinite square well parameters and analytic eigenbasis
//!
//! A [`Well`] describes the solve domain: the interval `[min, max]`, the
//! uniform grid resolution, the number of expansion states, and the physical
//! constants. The well's exact eigenpairs, evaluated on the grid, form the
//! [`Basis`] every other stage of the solver works in.

mod basis;
mod errors;

pub use basis::Basis;
pub use errors::{Result, WellError};

use ndarray::Array1;

/// Geometry and discretization of a solve request
///
/// Construction validates every parameter, so a `Well` value always
/// describes a solvable configuration. All fields are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Well {
    min: f64,
    max: f64,
    steps: usize,
    num_basis_states: usize,
    hbar: f64,
    mass: f64,
}

impl Well {
    /// Create a well with the default physical constants `hbar = mass = 1`.
    ///
    /// # Arguments
    ///
    /// * `min` - Lower boundary of the well
    /// * `max` - Upper boundary of the well, must exceed `min`
    /// * `steps` - Number of grid steps; the grid has `steps + 1` points
    /// * `num_basis_states` - Number of expansion states to generate
    ///
    /// # Errors
    ///
    /// Returns a [`WellError`] when any parameter is out of range. Nothing
    /// is computed before validation passes.
    pub fn new(min: f64, max: f64, steps: usize, num_basis_states: usize) -> Result<Self> {
        Self::with_constants(min, max, steps, num_basis_states, 1.0, 1.0)
    }

    /// Create a well with explicit `hbar` and `mass`.
    pub fn with_constants(
        min: f64,
        max: f64,
        steps: usize,
        num_basis_states: usize,
        hbar: f64,
        mass: f64,
    ) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(WellError::InvalidDomain { min, max });
        }
        if steps < 1 {
            return Err(WellError::InvalidSteps(steps));
        }
        if num_basis_states < 1 {
            return Err(WellError::InvalidBasisSize(num_basis_states));
        }
        if !(hbar.is_finite() && hbar > 0.0) {
            return Err(WellError::InvalidConstant {
                name: "hbar",
                value: hbar,
            });
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(WellError::InvalidConstant {
                name: "mass",
                value: mass,
            });
        }

        Ok(Self {
            min,
            max,
            steps,
            num_basis_states,
            hbar,
            mass,
        })
    }

    /// Lower boundary of the well
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper boundary of the well
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the well, always positive
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the well
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Number of grid steps
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Spacing between adjacent grid points
    pub fn step_size(&self) -> f64 {
        self.width() / self.steps as f64
    }

    /// Number of grid points, one more than the number of steps
    pub fn num_grid_points(&self) -> usize {
        self.steps + 1
    }

    /// Number of expansion states
    pub fn num_basis_states(&self) -> usize {
        self.num_basis_states
    }

    /// Reduced Planck constant used for this solve
    pub fn hbar(&self) -> f64 {
        self.hbar
    }

    /// Particle mass used for this solve
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The shared uniform grid: `steps + 1` points spanning `[min, max]`,
    /// both endpoints included.
    pub fn x_grid(&self) -> Array1<f64> {
        Array1::linspace(self.min, self.max, self.num_grid_points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_well() {
        let well = Well::new(0.0, 1.0, 200, 10).unwrap();
        assert_relative_eq!(well.width(), 1.0);
        assert_relative_eq!(well.midpoint(), 0.5);
        assert_relative_eq!(well.step_size(), 0.005);
        assert_eq!(well.num_grid_points(), 201);
        assert_eq!(well.num_basis_states(), 10);
        assert_relative_eq!(well.hbar(), 1.0);
        assert_relative_eq!(well.mass(), 1.0);
    }

    #[test]
    fn test_grid_endpoints_are_exact() {
        let well = Well::new(-2.0, 3.0, 7, 3).unwrap();
        let grid = well.x_grid();
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0], -2.0);
        assert_eq!(grid[7], 3.0);
    }

    #[test]
    fn test_degenerate_domain_rejected() {
        assert!(matches!(
            Well::new(1.0, 1.0, 10, 2),
            Err(WellError::InvalidDomain { .. })
        ));
        assert!(matches!(
            Well::new(2.0, -2.0, 10, 2),
            Err(WellError::InvalidDomain { .. })
        ));
        assert!(matches!(
            Well::new(f64::NAN, 1.0, 10, 2),
            Err(WellError::InvalidDomain { .. })
        ));
        assert!(matches!(
            Well::new(0.0, f64::INFINITY, 10, 2),
            Err(WellError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(
            Well::new(0.0, 1.0, 0, 2),
            Err(WellError::InvalidSteps(0))
        ));
    }

    #[test]
    fn test_zero_basis_states_rejected() {
        assert!(matches!(
            Well::new(0.0, 1.0, 10, 0),
            Err(WellError::InvalidBasisSize(0))
        ));
    }

    #[test]
    fn test_nonpositive_constants_rejected() {
        assert!(matches!(
            Well::with_constants(0.0, 1.0, 10, 2, 0.0, 1.0),
            Err(WellError::InvalidConstant { name: "hbar", .. })
        ));
        assert!(matches!(
            Well::with_constants(0.0, 1.0, 10, 2, 1.0, -1.0),
            Err(WellError::InvalidConstant { name: "mass", .. })
        ));
        assert!(matches!(
            Well::with_constants(0.0, 1.0, 10, 2, f64::NAN, 1.0),
            Err(WellError::InvalidConstant { name: "hbar", .. })
        ));
    }
}
