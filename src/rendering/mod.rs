use macroquad::color::BLACK;

use crate::domain::{CellState, Grid};
use crate::surface::DisplaySurface;

/// Draw the whole grid: clear to black, then one square per cell.
/// Presenting the frame is left to the caller.
pub fn draw_grid<C: CellState>(grid: &Grid<C>, surface: &mut impl DisplaySurface, cell_size: f32) {
    surface.clear(BLACK);
    grid.iter_cells().for_each(|(x, y, cell)| {
        surface.fill_rect(x as f32 * cell_size, y as f32 * cell_size, cell_size, cell.color());
    });
}
