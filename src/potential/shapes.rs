/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! The catalog of potential shapes
//!
//! Each shape is a closed-form scalar function of position, scaled by a
//! caller-supplied amplitude and sampled onto the well grid. The catalog is
//! a fixed enum: adding a shape means adding a variant, a formula, and a
//! registry entry, and the compiler points at every match that needs
//! updating.

use super::errors::{PotentialError, Result};
use crate::well::Well;
use ndarray::Array1;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Potential samples aligned to the well grid, wall sentinel at both ends
pub type SampledPotential = Array1<f64>;

/// Value assigned to both boundary samples of every sampled potential.
///
/// The infinite walls of the well are modeled by this large finite value at
/// the two edge grid points only; interior points always carry the shape's
/// own value.
pub const WALL_POTENTIAL: f64 = 10000.0;

/// The shapes the solver knows how to sample
///
/// Formulas are written in terms of the well width `W`, the midpoint `mid`,
/// the displacement `x' = x - min`, and the amplitude `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotentialShape {
    /// Constant `A` across the whole interior
    Square,
    /// Ramp `A x'` rising from zero at the lower wall
    Linear,
    /// Parabola `A x'^2` anchored at the lower wall
    Quadratic,
    /// Parabola `A (x - mid)^2` active only where `|x - mid| < W/4`
    CenteredQuadratic,
    /// Constant `A` inside the central region `|x - mid| < W/10`
    SquareBarrier,
    /// Zero up to the midpoint, then the ramp `A (x - mid)`
    SquarePlusLinear,
    /// Tent of peak height `A` at the midpoint, reaching zero at `|x - mid| = W/4`
    TriangleBarrier,
    /// Parabola `A (x - c)^2` about the nearer of the two well centers at
    /// the quarter and three-quarter points
    CoupledQuadratic,
    /// Five narrow rectangular barriers of height `A`, spaced `W/6` apart
    KronigPenney,
}

/// Name -> shape lookup, built once
static SHAPE_REGISTRY: Lazy<HashMap<&'static str, PotentialShape>> =
    Lazy::new(|| PotentialShape::ALL.iter().map(|s| (s.name(), *s)).collect());

impl PotentialShape {
    /// Every catalog entry, in canonical listing order
    pub const ALL: [PotentialShape; 9] = [
        PotentialShape::Square,
        PotentialShape::Linear,
        PotentialShape::Quadratic,
        PotentialShape::CenteredQuadratic,
        PotentialShape::SquareBarrier,
        PotentialShape::SquarePlusLinear,
        PotentialShape::TriangleBarrier,
        PotentialShape::CoupledQuadratic,
        PotentialShape::KronigPenney,
    ];

    /// The snake_case name the shape is requested by
    pub fn name(&self) -> &'static str {
        match self {
            PotentialShape::Square => "square",
            PotentialShape::Linear => "linear",
            PotentialShape::Quadratic => "quadratic",
            PotentialShape::CenteredQuadratic => "centered_quadratic",
            PotentialShape::SquareBarrier => "square_barrier",
            PotentialShape::SquarePlusLinear => "square_plus_linear",
            PotentialShape::TriangleBarrier => "triangle_barrier",
            PotentialShape::CoupledQuadratic => "coupled_quadratic",
            PotentialShape::KronigPenney => "kronig_penney",
        }
    }

    /// Resolve a shape from its name.
    ///
    /// Resolution happens once per solve, before any grid loop runs. An
    /// unknown name fails with an error that lists every valid name.
    pub fn from_name(name: &str) -> Result<Self> {
        SHAPE_REGISTRY
            .get(name)
            .copied()
            .ok_or_else(|| PotentialError::UnknownShape {
                name: name.to_string(),
                valid_names: Self::ALL
                    .iter()
                    .map(|s| s.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Evaluate the shape at a single interior position.
    fn value_at(self, x: f64, well: &Well, amplitude: f64) -> f64 {
        let width = well.width();
        let mid = well.midpoint();

        match self {
            PotentialShape::Square => amplitude,
            PotentialShape::Linear => amplitude * (x - well.min()),
            PotentialShape::Quadratic => {
                let dx = x - well.min();
                amplitude * dx * dx
            }
            PotentialShape::CenteredQuadratic => {
                let d = x - mid;
                if d.abs() < 0.25 * width {
                    amplitude * d * d
                } else {
                    0.0
                }
            }
            PotentialShape::SquareBarrier => {
                if (x - mid).abs() < 0.1 * width {
                    amplitude
                } else {
                    0.0
                }
            }
            PotentialShape::SquarePlusLinear => {
                if x <= mid {
                    0.0
                } else {
                    amplitude * (x - mid)
                }
            }
            PotentialShape::TriangleBarrier => {
                let half_base = 0.25 * width;
                let d = (x - mid).abs();
                if d < half_base {
                    amplitude * (1.0 - d / half_base)
                } else {
                    0.0
                }
            }
            PotentialShape::CoupledQuadratic => {
                let lower = well.min() + 0.25 * width;
                let upper = well.min() + 0.75 * width;
                let center = if (x - lower).abs() <= (x - upper).abs() {
                    lower
                } else {
                    upper
                };
                let d = x - center;
                amplitude * d * d
            }
            PotentialShape::KronigPenney => {
                // Five barriers keep the comb symmetric about the midpoint.
                let spacing = width / 6.0;
                let half_width = spacing / 8.0;
                for i in 1..=5 {
                    let center = well.min() + i as f64 * spacing;
                    if (x - center).abs() < half_width {
                        return amplitude;
                    }
                }
                0.0
            }
        }
    }
}

impl fmt::Display for PotentialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sample a shape onto the well grid.
///
/// Interior grid points carry `shape` evaluated at that position scaled by
/// `amplitude`; both boundary samples are always [`WALL_POTENTIAL`],
/// whatever the shape or amplitude. Each call is independent and touches no
/// shared state.
pub fn sample(shape: PotentialShape, well: &Well, amplitude: f64) -> SampledPotential {
    let num_points = well.num_grid_points();
    let x_grid = well.x_grid();

    let mut values = Array1::<f64>::zeros(num_points);
    for k in 1..num_points - 1 {
        values[k] = shape.value_at(x_grid[k], well, amplitude);
    }
    values[0] = WALL_POTENTIAL;
    values[num_points - 1] = WALL_POTENTIAL;

    values
}
