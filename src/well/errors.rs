/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Error types for the well module

use thiserror::Error;

/// Result type for well operations
pub type Result<T> = std::result::Result<T, WellError>;

/// Errors raised while validating well parameters
///
/// All of these are detected by the `Well` constructor before any
/// computation happens, so the rest of the pipeline can assume a valid
/// configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WellError {
    /// The well boundaries do not describe a positive-width interval
    #[error("invalid well domain: min={min}, max={max} (max must exceed min and both must be finite)")]
    InvalidDomain { min: f64, max: f64 },

    /// The grid must contain at least one step
    #[error("invalid grid resolution: {0} steps (at least 1 required)")]
    InvalidSteps(usize),

    /// The expansion basis must contain at least one state
    #[error("invalid basis size: {0} states (at least 1 required)")]
    InvalidBasisSize(usize),

    /// A physical constant must be positive and finite
    #[error("invalid physical constant: {name}={value} (must be positive and finite)")]
    InvalidConstant { name: &'static str, value: f64 },
}
