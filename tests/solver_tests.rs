/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

use approx::{assert_abs_diff_eq, assert_relative_eq};
use qwell_rs::{solve_problem, Solution, SolveConfig, SolverError};
use std::f64::consts::PI;

fn free_well_config(shape: &str) -> SolveConfig {
    SolveConfig {
        well_min: 0.0,
        well_max: 1.0,
        steps: 200,
        basis_size: 5,
        shape: shape.to_string(),
        amplitude: 0.0,
        hbar: 1.0,
        mass: 1.0,
    }
}

/// Fix the arbitrary overall sign so two unit-normalized real functions can
/// be compared pointwise.
fn aligned_sign(solution: &Solution, state: usize, reference: &[f64]) -> f64 {
    let overlap: f64 = solution.states[state]
        .wavefunction
        .iter()
        .zip(reference.iter())
        .map(|(w, r)| w.re * r)
        .sum();
    if overlap < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[test]
fn test_empty_well_recovers_the_analytic_solution() {
    let solution = solve_problem(&free_well_config("square")).unwrap();

    assert_eq!(solution.num_states(), 5);
    assert_eq!(solution.x_grid.len(), 201);

    for (index, state) in solution.states.iter().enumerate() {
        let n = (index + 1) as f64;
        assert_relative_eq!(
            state.energy.re,
            (n * PI) * (n * PI) / 2.0,
            max_relative = 1e-10
        );
        assert_abs_diff_eq!(state.energy.im, 0.0, epsilon = 1e-12);
    }

    // Wavefunctions match sqrt(2) sin(n pi x) up to overall sign.
    for index in 0..5 {
        let n = (index + 1) as f64;
        let reference: Vec<f64> = solution
            .x_grid
            .iter()
            .map(|&x| (2.0_f64).sqrt() * (n * PI * x).sin())
            .collect();
        let sign = aligned_sign(&solution, index, &reference);

        for (w, r) in solution.states[index]
            .wavefunction
            .iter()
            .zip(reference.iter())
        {
            assert_abs_diff_eq!(sign * w.re, *r, epsilon = 1e-8);
            assert_abs_diff_eq!(w.im, 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_flattened_linear_matches_the_empty_well() {
    // At zero amplitude every shape samples to the same flat interior, so
    // the whole pipeline must agree to the last bit.
    let square = solve_problem(&free_well_config("square")).unwrap();
    let linear = solve_problem(&free_well_config("linear")).unwrap();

    assert_eq!(square.energies(), linear.energies());
    assert_eq!(square.states, linear.states);
}

#[test]
fn test_identical_configs_solve_identically() {
    let config = SolveConfig {
        shape: "kronig_penney".to_string(),
        amplitude: 150.0,
        basis_size: 12,
        ..SolveConfig::default()
    };

    let first = solve_problem(&config).unwrap();
    let second = solve_problem(&config).unwrap();

    assert_eq!(first.states, second.states);
    assert_eq!(first.x_grid, second.x_grid);
    assert_eq!(first.potential, second.potential);
}

#[test]
fn test_barrier_raises_and_dip_lowers_the_ground_state() {
    let free = solve_problem(&free_well_config("square")).unwrap();

    let mut barrier_config = free_well_config("square_barrier");
    barrier_config.basis_size = 10;
    barrier_config.amplitude = 500.0;
    let barrier = solve_problem(&barrier_config).unwrap();

    let mut dip_config = barrier_config.clone();
    dip_config.amplitude = -500.0;
    let dip = solve_problem(&dip_config).unwrap();

    let free_ground = free.states[0].energy.re;
    assert!(barrier.states[0].energy.re > free_ground);
    assert!(dip.states[0].energy.re < free_ground);
}

#[test]
fn test_every_catalog_shape_solves_cleanly() {
    for shape in [
        "square",
        "linear",
        "quadratic",
        "centered_quadratic",
        "square_barrier",
        "square_plus_linear",
        "triangle_barrier",
        "coupled_quadratic",
        "kronig_penney",
    ] {
        let config = SolveConfig {
            shape: shape.to_string(),
            basis_size: 6,
            steps: 120,
            ..SolveConfig::default()
        };
        let solution = solve_problem(&config).unwrap();
        assert_eq!(solution.num_states(), 6, "shape {}", shape);

        for pair in solution.states.windows(2) {
            let a = pair[0].energy;
            let b = pair[1].energy;
            assert!(
                a.re < b.re || (a.re == b.re && a.im <= b.im),
                "{} energies out of order",
                shape
            );
        }
    }
}

#[test]
fn test_unknown_shape_fails_up_front() {
    let config = SolveConfig {
        shape: "coulomb".to_string(),
        ..SolveConfig::default()
    };
    let err = solve_problem(&config).unwrap_err();
    assert!(matches!(err, SolverError::UnknownShape(_)));
    assert!(err.to_string().contains("coulomb"));
}

#[test]
fn test_invalid_well_fails_as_configuration() {
    let config = SolveConfig {
        well_min: 2.0,
        well_max: 2.0,
        ..SolveConfig::default()
    };
    assert!(matches!(
        solve_problem(&config),
        Err(SolverError::InvalidConfiguration(_))
    ));

    let config = SolveConfig {
        steps: 0,
        ..SolveConfig::default()
    };
    assert!(matches!(
        solve_problem(&config),
        Err(SolverError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_non_finite_amplitude_fails_numerically() {
    let config = SolveConfig {
        amplitude: f64::INFINITY,
        ..SolveConfig::default()
    };
    assert!(matches!(
        solve_problem(&config),
        Err(SolverError::Numerical(_))
    ));
}
