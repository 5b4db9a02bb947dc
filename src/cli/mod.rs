/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Command line interface
//!
//! Thin wrapper over [`solve_problem`](crate::solver::solve_problem): parse
//! arguments, resolve the configuration (file first, flags override), solve,
//! print. The text report is meant for eyeballing energies; `--json` emits
//! the full solution for downstream tooling.

use crate::input::SolveConfig;
use crate::solver::{solve_problem, Solution};
use crate::utils::grid_norm;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Command line arguments
///
/// Every physical parameter is optional; unset values come from the
/// configuration file when one is given, otherwise from the defaults.
#[derive(Parser, Debug)]
#[command(
    name = "qwell",
    version,
    about = "Rayleigh-Ritz solver for the 1D time-independent Schrodinger equation"
)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Left edge of the well
    #[arg(long, allow_negative_numbers = true)]
    pub well_min: Option<f64>,

    /// Right edge of the well
    #[arg(long, allow_negative_numbers = true)]
    pub well_max: Option<f64>,

    /// Number of grid intervals
    #[arg(long)]
    pub steps: Option<usize>,

    /// Number of basis states to expand over (and states to report)
    #[arg(long)]
    pub states: Option<usize>,

    /// Potential shape name (see the documentation for the full list)
    #[arg(long)]
    pub shape: Option<String>,

    /// Potential amplitude, negative values invert the shape
    #[arg(long, allow_negative_numbers = true)]
    pub amplitude: Option<f64>,

    /// Reduced Planck constant
    #[arg(long)]
    pub hbar: Option<f64>,

    /// Particle mass
    #[arg(long)]
    pub mass: Option<f64>,

    /// Emit the full solution as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Build the effective configuration from a parsed command line
///
/// Starts from the file named by `--config` (or the defaults when absent),
/// then applies each explicit flag on top.
pub fn resolve_config(cli: &Cli) -> crate::input::Result<SolveConfig> {
    let mut config = match &cli.config {
        Some(path) => SolveConfig::from_file(path)?,
        None => SolveConfig::default(),
    };

    if let Some(well_min) = cli.well_min {
        config.well_min = well_min;
    }
    if let Some(well_max) = cli.well_max {
        config.well_max = well_max;
    }
    if let Some(steps) = cli.steps {
        config.steps = steps;
    }
    if let Some(states) = cli.states {
        config.basis_size = states;
    }
    if let Some(shape) = &cli.shape {
        config.shape = shape.clone();
    }
    if let Some(amplitude) = cli.amplitude {
        config.amplitude = amplitude;
    }
    if let Some(hbar) = cli.hbar {
        config.hbar = hbar;
    }
    if let Some(mass) = cli.mass {
        config.mass = mass;
    }

    Ok(config)
}

#[derive(Serialize)]
struct JsonState {
    energy_re: f64,
    energy_im: f64,
    wavefunction_re: Vec<f64>,
    wavefunction_im: Vec<f64>,
}

#[derive(Serialize)]
struct JsonSolution {
    x_grid: Vec<f64>,
    potential: Vec<f64>,
    states: Vec<JsonState>,
}

fn print_json(solution: &Solution) -> anyhow::Result<()> {
    let payload = JsonSolution {
        x_grid: solution.x_grid.to_vec(),
        potential: solution.potential.to_vec(),
        states: solution
            .states
            .iter()
            .map(|state| JsonState {
                energy_re: state.energy.re,
                energy_im: state.energy.im,
                wavefunction_re: state.wavefunction.iter().map(|w| w.re).collect(),
                wavefunction_im: state.wavefunction.iter().map(|w| w.im).collect(),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_text(config: &SolveConfig, solution: &Solution) -> anyhow::Result<()> {
    let width = config.well_max - config.well_min;
    println!("qwell-rs v{}", crate::VERSION);
    println!(
        "well [{}, {}], {} steps, potential '{}' with amplitude {}",
        config.well_min, config.well_max, config.steps, config.shape, config.amplitude
    );
    println!();
    for (index, state) in solution.states.iter().enumerate() {
        let norm = grid_norm(&state.wavefunction, width)?;
        println!(
            "  E_{:<3} = {:>16.8}   (im {:+10.3e}, norm {:.6})",
            index + 1,
            state.energy.re,
            state.energy.im,
            norm
        );
    }
    Ok(())
}

/// Entry point for the `qwell` binary
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let solution = solve_problem(&config)?;

    if cli.json {
        print_json(&solution)?;
    } else {
        print_text(&config, &solution)?;
    }

    Ok(())
}
