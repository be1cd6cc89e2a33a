//! Algorithm enum for selecting the evolution implementation.
//!
//! Both steppers compute a whole generation from the previous one into a
//! fresh buffer, so they always agree; they differ only in how the per-cell
//! work is scheduled.

use std::str::FromStr;

/// Available evolution algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell by cell on the calling thread
    Serial,
    /// Cells spread over the rayon thread pool
    #[default]
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Short description for help output
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "one cell at a time, single thread",
            Algorithm::Parallel => "rayon parallel iterator over all cells",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| format!("unknown algorithm '{s}' (expected serial or parallel)"))
    }
}
