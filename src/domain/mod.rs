mod cell;
mod grid;
mod rules;
#[cfg(test)]
mod patterns;
mod stepping;

pub use cell::{CellState, LifeCell, FireCell};
pub use grid::Grid;
pub use rules::{Rule, LifeRule, FireRule};
#[cfg(test)]
pub use patterns::presets;
pub use stepping::Stepping;
