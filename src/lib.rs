//! Crystal symmetry kernel for EBSD orientation data
//!
//! This library provides the symmetry operator tables of the eleven Laue classes and the
//! orientation algorithms built on them: fundamental zone reduction, misorientation,
//! ODF/MDF binning and sampling, IPF/Rodrigues/Schuh coloring, pole figure rendering, Schmid
//! factors and slip transmission metrics.

pub mod batch;
pub mod coloring;
pub mod config;
pub mod fundamental_zone;
pub mod interfaces;
pub mod misorientation;
pub mod orientation;
pub mod parallel;
pub mod pole_figures;
pub mod slip;
pub mod symmetries;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
