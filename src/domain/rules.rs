use super::{CellState, FireCell, Grid, LifeCell};

/// Trait for cellular automaton transition rules.
/// A rule maps the current grid and a coordinate to that cell's next state.
pub trait Rule: Send + Sync {
    type Cell: CellState;

    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Next state of the cell at (x, y). Must only read `grid`.
    fn next_state(&self, grid: &Grid<Self::Cell>, x: usize, y: usize) -> Self::Cell;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct LifeRule;

impl Rule for LifeRule {
    type Cell = LifeCell;

    fn name(&self) -> &'static str {
        "Conway"
    }

    fn next_state(&self, grid: &Grid<LifeCell>, x: usize, y: usize) -> LifeCell {
        let current = grid.get(x, y).unwrap_or_default();
        current.evolve(grid.count_neighbors(x, y, LifeCell::is_alive))
    }
}

/// Fire spread: fuel next to fire ignites, fire burns out in one tick
#[derive(Clone, Copy, Debug, Default)]
pub struct FireRule;

impl Rule for FireRule {
    type Cell = FireCell;

    fn name(&self) -> &'static str {
        "Fire"
    }

    fn next_state(&self, grid: &Grid<FireCell>, x: usize, y: usize) -> FireCell {
        match grid.get(x, y).unwrap_or_default() {
            FireCell::Fuel => FireCell::Fuel.evolve(grid.any_neighbor(x, y, FireCell::is_burning)),
            other => other.evolve(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use crate::domain::FireCell::{Empty as E, Fire as X, Fuel as F};
    use crate::domain::LifeCell::{Alive as A, Dead as D};

    #[test]
    fn test_block_is_fixed_point() {
        let mut grid = Grid::new(6, 6);
        presets::block().place_on(&mut grid, 2, 2, A);
        assert_eq!(grid.evolve(&LifeRule), grid);
    }

    #[test]
    fn test_blinker_has_period_two() {
        let mut grid = Grid::new(5, 5);
        presets::blinker().place_on(&mut grid, 1, 1, A);
        let once = grid.evolve(&LifeRule);
        assert_ne!(once, grid);
        assert_eq!(once.count(A), 3);
        assert_eq!(once.evolve(&LifeRule), grid);
    }

    #[test]
    fn test_glider_translates_after_four_steps() {
        let mut grid = Grid::new(10, 10);
        presets::glider().place_on(&mut grid, 1, 1, A);
        let mut expected = Grid::new(10, 10);
        presets::glider().place_on(&mut expected, 2, 2, A);

        let evolved = (0..4).fold(grid, |g, _| g.evolve(&LifeRule));
        assert_eq!(evolved, expected);
    }

    #[test]
    fn test_plus_shape_one_step() {
        let mut grid = Grid::new(3, 3);
        presets::plus().place_on(&mut grid, 0, 0, A);

        // Center has 4 neighbors and dies; each arm has 3 and survives;
        // each corner has 3 and is born.
        let expected = Grid::from_rows(&[&[A, A, A], &[A, D, A], &[A, A, A]]);
        assert_eq!(grid.evolve(&LifeRule), expected);
    }

    #[test]
    fn test_corner_cell_counts_at_most_three() {
        let grid = Grid::filled(4, 4, A);
        let next = grid.evolve(&LifeRule);
        // Corners see exactly 3 live neighbors and survive
        assert_eq!(next.get(0, 0), Some(A));
        assert_eq!(next.get(3, 3), Some(A));
        // Edges see 5 and die
        assert_eq!(next.get(1, 0), Some(D));
    }

    #[test]
    fn test_evolve_does_not_mutate_input() {
        let mut grid = Grid::new(5, 5);
        presets::blinker().place_on(&mut grid, 1, 1, A);
        let before = grid.clone();
        let _ = grid.evolve(&LifeRule);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fire_always_burns_out() {
        let grid = Grid::filled(4, 4, X);
        assert_eq!(grid.evolve(&FireRule).count(E), 16);
    }

    #[test]
    fn test_fuel_without_fire_is_unchanged() {
        let grid = Grid::from_rows(&[&[F, E, F], &[E, F, E], &[F, E, F]]);
        assert_eq!(grid.evolve(&FireRule), grid);
    }

    #[test]
    fn test_fire_spreads_to_moore_neighbors() {
        let mut grid = Grid::filled(5, 5, F);
        grid.set(2, 2, X);

        let expected = Grid::from_rows(&[
            &[F, F, F, F, F],
            &[F, X, X, X, F],
            &[F, X, E, X, F],
            &[F, X, X, X, F],
            &[F, F, F, F, F],
        ]);
        assert_eq!(grid.evolve(&FireRule), expected);
    }

    #[test]
    fn test_fire_does_not_jump_gaps() {
        let grid = Grid::from_rows(&[&[X, E, F]]);
        assert_eq!(grid.evolve(&FireRule), Grid::from_rows(&[&[E, E, F]]));
    }

    #[test]
    fn test_fire_front_burns_through_row() {
        let mut grid = Grid::from_rows(&[&[X, F, F, F]]);
        grid = grid.evolve(&FireRule);
        assert_eq!(grid, Grid::from_rows(&[&[E, X, F, F]]));
        grid = grid.evolve(&FireRule);
        assert_eq!(grid, Grid::from_rows(&[&[E, E, X, F]]));
        grid = grid.evolve(&FireRule);
        grid = grid.evolve(&FireRule);
        assert_eq!(grid.count(E), 4);
    }

    #[test]
    fn test_parallel_matches_serial() {
        use rand::{SeedableRng, rngs::StdRng};
        let mut rng = StdRng::seed_from_u64(42);

        let mut life = Grid::new(64, 48);
        life.randomize(&mut rng, A, 0.4);
        assert_eq!(life.evolve(&LifeRule), life.evolve_parallel(&LifeRule));

        let mut fire = Grid::new(64, 48);
        fire.randomize(&mut rng, F, 0.6);
        fire.set(32, 24, X);
        assert_eq!(fire.evolve(&FireRule), fire.evolve_parallel(&FireRule));
    }

    #[test]
    fn test_names() {
        assert_eq!(LifeRule.name(), "Conway");
        assert_eq!(FireRule.name(), "Fire");
    }
}
