use std::sync::mpsc::Receiver;

use rand::Rng;
use tracing::trace;

use crate::domain::{CellState, FireCell, Grid, LifeCell, Rule, Stepping};
use crate::input::{self, Controls};
use crate::rendering;
use crate::surface::DisplaySurface;

use super::sampler::{PaintIntent, PointerSnapshot, SharedPointer};

/// SimulationState is the double-buffered grid plus loop bookkeeping.
pub struct SimulationState<C> {
    pub grid: Grid<C>,
    next: Grid<C>,
    pub is_running: bool,
    pub generation: u64,
}

impl<C: CellState> SimulationState<C> {
    pub fn new(grid: Grid<C>) -> Self {
        let (width, height) = grid.dimensions();
        Self {
            next: Grid::new(width, height),
            grid,
            is_running: true,
            generation: 0,
        }
    }

    /// Compute the next generation into the scratch buffer, then swap
    pub fn advance<R>(&mut self, rule: &R, stepping: Stepping)
    where
        R: Rule<Cell = C> + ?Sized,
    {
        stepping.step_into(&self.grid, rule, &mut self.next);
        std::mem::swap(&mut self.grid, &mut self.next);
        self.generation += 1;
    }

    /// Clear the running flag. There is no way back.
    pub fn stop(&mut self) {
        self.is_running = false;
    }
}

/// Random Life soup: each cell alive with probability `density`
pub fn seed_life(
    (width, height): (usize, usize),
    density: f64,
    rng: &mut impl Rng,
) -> Grid<LifeCell> {
    let mut grid = Grid::new(width, height);
    grid.randomize(rng, LifeCell::Alive, density);
    grid
}

/// Random fuel with a single ignition point at the grid center
pub fn seed_fire(
    (width, height): (usize, usize),
    density: f64,
    rng: &mut impl Rng,
) -> Grid<FireCell> {
    let mut grid = Grid::new(width, height);
    grid.randomize(rng, FireCell::Fuel, density);
    grid.set(width / 2, height / 2, FireCell::Fire);
    grid
}

/// Connects the tick loop to a fuel sampler: publishes pointer snapshots
/// and drains queued paint intents.
pub struct PaintChannel<C> {
    pub pointer: SharedPointer,
    pub intents: Receiver<PaintIntent>,
    /// State written under the pointer
    pub cell: C,
}

impl<C: CellState> PaintChannel<C> {
    fn publish(&self, snapshot: PointerSnapshot) {
        *self.pointer.lock() = snapshot;
    }

    /// Write every queued intent into `grid`, returns how many were applied
    fn apply(&self, grid: &mut Grid<C>) -> usize {
        let mut applied = 0;
        for PaintIntent { x, y } in self.intents.try_iter() {
            grid.set(x, y, self.cell);
            applied += 1;
        }
        applied
    }
}

/// Whether the tick loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Simulation owns everything one variant needs per tick.
pub struct Simulation<R: Rule> {
    rule: R,
    pub state: SimulationState<R::Cell>,
    controls: Controls,
    stepping: Stepping,
    cell_size: f32,
    paint: Option<PaintChannel<R::Cell>>,
}

impl<R: Rule> Simulation<R> {
    pub fn new(rule: R, grid: Grid<R::Cell>, stepping: Stepping, cell_size: f32) -> Self {
        Self {
            rule,
            state: SimulationState::new(grid),
            controls: Controls::default(),
            stepping,
            cell_size,
            paint: None,
        }
    }

    /// Enable pointer-driven painting (builder pattern)
    pub fn with_paint(mut self, paint: PaintChannel<R::Cell>) -> Self {
        self.paint = Some(paint);
        self
    }

    /// One iteration of the tick loop: input, painting, update, render.
    /// A quit only clears the running flag; the iteration still finishes and
    /// the flag is checked at the boundary. Presenting the frame and any
    /// delay are the caller's job.
    pub fn frame(&mut self, surface: &mut impl DisplaySurface) -> Flow {
        if !self.state.is_running {
            return Flow::Stop;
        }

        self.controls = input::process_intents(self.controls, surface.poll_events());
        if self.controls.quit {
            self.state.stop();
        }

        if let Some(paint) = &self.paint {
            paint.publish(PointerSnapshot {
                paint: self.controls.paint,
                position: surface.pointer_position(),
                tick: self.state.generation,
            });
            let painted = paint.apply(&mut self.state.grid);
            if painted > 0 {
                trace!(painted, "applied queued paint");
            }
        }

        self.state.advance(&self.rule, self.stepping);
        trace!(generation = self.state.generation, "tick");

        rendering::draw_grid(&self.state.grid, surface, self.cell_size);
        if self.state.is_running {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }
}
