/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Example scanning a square barrier from attractive to repulsive
//!
//! Solves the well repeatedly while stepping the barrier amplitude and
//! writes the lowest three energies at each step to a .dat file.

use qwell_rs::{solve_problem, SolveConfig};
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Square barrier amplitude scan");

    let mut file = File::create("barrier_scan.dat")?;
    writeln!(file, "# amplitude E1 E2 E3")?;

    for step in -10..=10 {
        let amplitude = step as f64 * 100.0;
        let config = SolveConfig {
            shape: "square_barrier".to_string(),
            amplitude,
            basis_size: 12,
            ..SolveConfig::default()
        };

        let solution = solve_problem(&config)?;
        let energies = solution.energies();
        writeln!(
            file,
            "{:8.1} {:14.8} {:14.8} {:14.8}",
            amplitude, energies[0].re, energies[1].re, energies[2].re
        )?;
        println!(
            "A = {:7.1}  ->  E1 = {:12.6}  E2 = {:12.6}",
            amplitude, energies[0].re, energies[1].re
        );
    }

    println!("Scan written to barrier_scan.dat");
    Ok(())
}
