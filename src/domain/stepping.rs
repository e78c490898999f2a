//! Stepping strategy for advancing a grid one generation.
//!
//! Both strategies produce identical grids; parallel stepping only pays off
//! on grids much larger than the default window.

use super::{Grid, rules::Rule};

/// How the transition rule is evaluated across the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stepping {
    /// Cell by cell on the calling thread
    #[default]
    Serial,
    /// Rows evaluated on the rayon thread pool
    Parallel,
}

impl Stepping {
    /// Get all available strategies
    pub fn all() -> [Stepping; 2] {
        [Stepping::Serial, Stepping::Parallel]
    }

    /// Display name for logs and benchmark output
    pub fn name(&self) -> &'static str {
        match self {
            Stepping::Serial => "Serial",
            Stepping::Parallel => "Parallel",
        }
    }

    /// Write the next generation of `current` into `next`
    pub fn step_into<R: Rule + ?Sized>(
        &self,
        current: &Grid<R::Cell>,
        rule: &R,
        next: &mut Grid<R::Cell>,
    ) {
        match self {
            Stepping::Serial => current.step_into(rule, next),
            Stepping::Parallel => current.step_into_parallel(rule, next),
        }
    }
}
