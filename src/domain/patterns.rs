use super::{CellState, Grid};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of set cells
}

impl Pattern {
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        Self { cells }
    }

    /// Write `cell` at every pattern coordinate, offset by (x, y).
    /// Parts that fall off the grid are dropped.
    pub fn place_on<C: CellState>(&self, grid: &mut Grid<C>, x: usize, y: usize, cell: C) {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, cell);
        }
    }
}

/// Small fixtures with well-known evolution
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Plus - a center cell and its four orthogonal neighbors
    pub fn plus() -> Pattern {
        Pattern::new(
            vec![
                (1, 0),
                (0, 1), (1, 1), (2, 1),
                (1, 2),
            ]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifeCell;

    #[test]
    fn test_place_at_offset() {
        let mut grid = Grid::new(6, 6);
        presets::glider().place_on(&mut grid, 2, 1, LifeCell::Alive);
        assert_eq!(grid.count(LifeCell::Alive), 5);
        assert_eq!(grid.get(3, 1), Some(LifeCell::Alive));
        assert_eq!(grid.get(4, 3), Some(LifeCell::Alive));
        assert_eq!(grid.get(2, 1), Some(LifeCell::Dead));
    }

    #[test]
    fn test_place_clips_at_edge() {
        let mut grid = Grid::new(3, 3);
        presets::block().place_on(&mut grid, 2, 2, LifeCell::Alive);
        assert_eq!(grid.count(LifeCell::Alive), 1);
        assert_eq!(grid.get(2, 2), Some(LifeCell::Alive));
    }
}
