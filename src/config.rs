//! Compiled-in configuration for the three simulations.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use macroquad::window::Conf;

use crate::domain::Stepping;
use crate::error::AppError;

pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;
pub const CELL_SIZE: u32 = 10;

/// Delay after each rendered frame of the fire simulations
pub const FIRE_FRAME_DELAY: Duration = Duration::from_millis(100);

/// How often the fuel sampler looks at the pointer
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(5);

/// Which simulation to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Conway's Game of Life
    Life,
    /// Fire spreading through random fuel
    Fire,
    /// Fire spreading, with fuel painted by holding the left mouse button
    FirePaint,
}

impl Variant {
    pub fn title(&self) -> &'static str {
        match self {
            Variant::Life => "Game of Life",
            Variant::Fire => "Fire Simulation",
            Variant::FirePaint => "Fire Simulation - Paint Fuel",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimConfig {
    pub variant: Variant,
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    /// Sleep after presenting each frame
    pub frame_delay: Duration,
    pub seed: u64,
    /// Probability that a cell starts Alive (Life) or as Fuel (fire variants)
    pub density: f64,
    pub sample_interval: Duration,
    pub stepping: Stepping,
}

impl SimConfig {
    /// Defaults for the given variant, seeded from the wall clock
    pub fn for_variant(variant: Variant) -> Self {
        let frame_delay = match variant {
            Variant::Life => Duration::ZERO,
            Variant::Fire | Variant::FirePaint => FIRE_FRAME_DELAY,
        };
        Self {
            variant,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            frame_delay,
            seed: wall_clock_seed(),
            density: 0.5,
            sample_interval: SAMPLE_INTERVAL,
            stepping: Stepping::Serial,
        }
    }

    pub fn life() -> Self {
        Self::for_variant(Variant::Life)
    }

    pub fn fire() -> Self {
        Self::for_variant(Variant::Fire)
    }

    pub fn fire_paint() -> Self {
        Self::for_variant(Variant::FirePaint)
    }

    /// Set the random seed (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Grid size in cells, after validating the configuration
    pub fn grid_dimensions(&self) -> Result<(usize, usize), AppError> {
        if self.cell_size == 0 {
            return Err(AppError::InvalidConfig("cell size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(AppError::InvalidConfig(format!(
                "density {} is outside [0, 1]",
                self.density
            )));
        }
        let width = (self.screen_width / self.cell_size) as usize;
        let height = (self.screen_height / self.cell_size) as usize;
        if width == 0 || height == 0 {
            return Err(AppError::InvalidConfig(format!(
                "screen {}x{} is smaller than one {}px cell",
                self.screen_width, self.screen_height, self.cell_size
            )));
        }
        Ok((width, height))
    }

    /// Fixed-size window matching the configured resolution
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.variant.title().to_owned(),
            window_width: self.screen_width as i32,
            window_height: self.screen_height as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}

/// Seed derived from the current time
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
