/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

use approx::{assert_abs_diff_eq, assert_relative_eq};
use qwell_rs::utils::grid_overlap;
use qwell_rs::well::{Basis, Well, WellError};

fn unit_well() -> Well {
    Well::new(0.0, 1.0, 200, 10).unwrap()
}

#[test]
fn test_eigenvalues_scale_as_n_squared() {
    let basis = Basis::generate(&unit_well());
    let eigenvalues = basis.eigenvalues();

    let ground = eigenvalues[0];
    for (index, energy) in eigenvalues.iter().enumerate() {
        let n = (index + 1) as f64;
        assert_relative_eq!(energy / ground, n * n, max_relative = 1e-12);
    }
}

#[test]
fn test_eigenvalues_strictly_increase() {
    let basis = Basis::generate(&unit_well());
    let eigenvalues = basis.eigenvalues();

    for pair in eigenvalues.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_discrete_orthonormality() {
    let well = unit_well();
    let basis = Basis::generate(&well);

    for i in 0..basis.len() {
        for j in 0..basis.len() {
            let overlap = grid_overlap(
                &basis.eigenfunction(i).to_owned(),
                &basis.eigenfunction(j).to_owned(),
                well.width(),
            )
            .unwrap();
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(overlap, expected, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_orthonormality_survives_an_off_center_well() {
    let well = Well::new(-3.0, 2.0, 250, 8).unwrap();
    let basis = Basis::generate(&well);

    for i in 0..basis.len() {
        for j in 0..basis.len() {
            let overlap = grid_overlap(
                &basis.eigenfunction(i).to_owned(),
                &basis.eigenfunction(j).to_owned(),
                well.width(),
            )
            .unwrap();
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(overlap, expected, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_constants_rescale_the_spectrum() {
    let reference = Basis::generate(&unit_well());

    // Doubling the mass halves every energy.
    let heavy = Well::with_constants(0.0, 1.0, 200, 10, 1.0, 2.0).unwrap();
    let heavy_basis = Basis::generate(&heavy);
    for (base, scaled) in reference
        .eigenvalues()
        .iter()
        .zip(heavy_basis.eigenvalues().iter())
    {
        assert_relative_eq!(scaled * 2.0, *base, max_relative = 1e-12);
    }

    // Doubling hbar quadruples every energy.
    let stiff = Well::with_constants(0.0, 1.0, 200, 10, 2.0, 1.0).unwrap();
    let stiff_basis = Basis::generate(&stiff);
    for (base, scaled) in reference
        .eigenvalues()
        .iter()
        .zip(stiff_basis.eigenvalues().iter())
    {
        assert_relative_eq!(*scaled, base * 4.0, max_relative = 1e-12);
    }
}

#[test]
fn test_grid_spans_the_well() {
    let well = Well::new(-1.5, 2.5, 100, 4).unwrap();
    let grid = well.x_grid();

    assert_eq!(grid.len(), 101);
    assert_eq!(grid[0], -1.5);
    assert_eq!(grid[100], 2.5);
    assert_relative_eq!(grid[1] - grid[0], well.step_size(), max_relative = 1e-12);
}

#[test]
fn test_well_rejects_bad_geometry() {
    assert!(matches!(
        Well::new(1.0, 0.0, 100, 5),
        Err(WellError::InvalidDomain { .. })
    ));
    assert!(matches!(
        Well::new(0.0, 0.0, 100, 5),
        Err(WellError::InvalidDomain { .. })
    ));
    assert!(matches!(
        Well::new(f64::NAN, 1.0, 100, 5),
        Err(WellError::InvalidDomain { .. })
    ));
    assert!(matches!(
        Well::new(0.0, 1.0, 0, 5),
        Err(WellError::InvalidSteps(0))
    ));
    assert!(matches!(
        Well::new(0.0, 1.0, 100, 0),
        Err(WellError::InvalidBasisSize(0))
    ));
}

#[test]
fn test_well_rejects_bad_constants() {
    assert!(matches!(
        Well::with_constants(0.0, 1.0, 100, 5, 0.0, 1.0),
        Err(WellError::InvalidConstant { name: "hbar", .. })
    ));
    assert!(matches!(
        Well::with_constants(0.0, 1.0, 100, 5, 1.0, -1.0),
        Err(WellError::InvalidConstant { name: "mass", .. })
    ));
}
