// Domain layer - Cells, grids and transition rules
pub mod domain;

// Application layer - Tick loop and fuel sampler
pub mod application;

// Infrastructure layer - Display surface, rendering, input
pub mod surface;
pub mod rendering;
pub mod input;

// Ambient concerns
pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use domain::{CellState, LifeCell, FireCell, Grid, Rule, LifeRule, FireRule, Stepping};
pub use application::{Simulation, SimulationState};
pub use config::{SimConfig, Variant};
pub use error::AppError;
