use macroquad::color::{Color, BLACK, GREEN, RED, WHITE};

/// Common behaviour for every cell state a grid can hold.
/// The default value is the "blank" state a fresh grid is filled with.
pub trait CellState: Copy + PartialEq + Default + Send + Sync + std::fmt::Debug {
    /// Fixed state-to-color mapping used by the renderer
    fn color(self) -> Color;
}

/// LifeCell is the state of a cell in Conway's Game of Life.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LifeCell {
    #[default]
    Dead,
    Alive,
}

impl LifeCell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, LifeCell::Alive)
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (LifeCell::Alive, 2 | 3) => LifeCell::Alive,
            (LifeCell::Dead, 3) => LifeCell::Alive,
            _ => LifeCell::Dead,
        }
    }
}

impl CellState for LifeCell {
    fn color(self) -> Color {
        match self {
            LifeCell::Dead => BLACK,
            LifeCell::Alive => WHITE,
        }
    }
}

/// FireCell is the state of a cell in the fire-spread simulations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FireCell {
    #[default]
    Empty,
    Fuel,
    Fire,
}

impl FireCell {
    pub const fn is_burning(self) -> bool {
        matches!(self, FireCell::Fire)
    }

    /// Fire burns out after exactly one tick; fuel ignites on the same
    /// tick it sees a burning neighbor.
    pub const fn evolve(self, burning_neighbor: bool) -> Self {
        match (self, burning_neighbor) {
            (FireCell::Fuel, true) => FireCell::Fire,
            (FireCell::Fuel, false) => FireCell::Fuel,
            (FireCell::Fire, _) | (FireCell::Empty, _) => FireCell::Empty,
        }
    }
}

impl CellState for FireCell {
    fn color(self) -> Color {
        match self {
            FireCell::Empty => BLACK,
            FireCell::Fuel => GREEN,
            FireCell::Fire => RED,
        }
    }
}
