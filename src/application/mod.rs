//! Application layer: the tick loop and the threads around it.

mod sampler;
mod simulation;
mod startup;

pub use sampler::{FuelSampler, PaintIntent, PointerSnapshot, SamplerSettings, SharedPointer};
pub use simulation::{
    Flow, PaintChannel, Simulation, SimulationState, seed_fire, seed_life,
};
pub use startup::{install_window_failure_hook, mark_window_ready};

use std::thread;
use std::time::Duration;

use macroquad::window::next_frame;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};

use crate::config::{SimConfig, Variant};
use crate::domain::{FireCell, FireRule, LifeRule, Rule};
use crate::error::AppError;
use crate::surface::MacroquadSurface;

/// Run the configured variant until the window is closed
pub async fn run(config: SimConfig) -> Result<(), AppError> {
    let dimensions = config.grid_dimensions()?;
    let cell_size = config.cell_size as f32;
    let mut rng = StdRng::seed_from_u64(config.seed);

    info!(
        variant = config.variant.title(),
        width = dimensions.0,
        height = dimensions.1,
        seed = config.seed,
        frame_delay_ms = config.frame_delay.as_millis() as u64,
        stepping = config.stepping.name(),
        "starting simulation"
    );

    let generations = match config.variant {
        Variant::Life => {
            let grid = seed_life(dimensions, config.density, &mut rng);
            let sim = Simulation::new(LifeRule, grid, config.stepping, cell_size);
            tick_loop(sim, config.frame_delay).await
        }
        Variant::Fire => {
            let grid = seed_fire(dimensions, config.density, &mut rng);
            let sim = Simulation::new(FireRule, grid, config.stepping, cell_size);
            tick_loop(sim, config.frame_delay).await
        }
        Variant::FirePaint => {
            let pointer = SharedPointer::default();
            let (mut sampler, intents) = FuelSampler::spawn(
                pointer.clone(),
                SamplerSettings {
                    interval: config.sample_interval,
                    cell_size,
                    dimensions,
                },
            )?;
            let grid = seed_fire(dimensions, config.density, &mut rng);
            let sim = Simulation::new(FireRule, grid, config.stepping, cell_size).with_paint(
                PaintChannel {
                    pointer,
                    intents,
                    cell: FireCell::Fuel,
                },
            );
            let generations = tick_loop(sim, config.frame_delay).await;
            sampler.stop();
            generations
        }
    };

    info!(generations, "simulation stopped");
    Ok(())
}

/// Run and map the outcome to a process exit status
pub async fn run_to_exit_code(config: SimConfig) -> i32 {
    mark_window_ready();
    match run(config).await {
        Ok(()) => 0,
        Err(err) => {
            error!("{err}");
            err.exit_code()
        }
    }
}

/// Frame, present, delay; until the simulation stops.
/// Returns the number of generations computed.
async fn tick_loop<R: Rule>(mut sim: Simulation<R>, frame_delay: Duration) -> u64 {
    let mut surface = MacroquadSurface::new();
    while sim.frame(&mut surface) == Flow::Continue {
        next_frame().await;
        if !frame_delay.is_zero() {
            thread::sleep(frame_delay);
        }
    }
    sim.state.generation
}
