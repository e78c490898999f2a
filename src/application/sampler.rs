//! Background fuel sampler.
//!
//! Wakes at a fixed interval, looks at the most recently published pointer
//! snapshot and, while painting, queues the cell under the pointer. The
//! sampler never touches the grid: queued intents are drained by the tick
//! loop at the start of each tick.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::input::{PaintState, pointer_to_cell};

/// Grid coordinate to receive fuel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintIntent {
    pub x: usize,
    pub y: usize,
}

/// Pointer state as last seen by the main thread
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSnapshot {
    pub paint: PaintState,
    pub position: (f32, f32),
    /// Tick the snapshot was published on
    pub tick: u64,
}

/// Intent tagged with the tick of the snapshot it came from
type Stamped = (u64, PaintIntent);

/// Pointer snapshot shared between the main thread and the sampler
pub type SharedPointer = Arc<Mutex<PointerSnapshot>>;

/// Sampling geometry, fixed for the life of the sampler
#[derive(Clone, Copy, Debug)]
pub struct SamplerSettings {
    pub interval: Duration,
    pub cell_size: f32,
    pub dimensions: (usize, usize),
}

/// Dedicated fuel sampler thread.
pub struct FuelSampler {
    handle: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl FuelSampler {
    /// Spawn the sampler thread.
    /// Returns the sampler and the receiving end of its paint queue.
    pub fn spawn(
        pointer: SharedPointer,
        settings: SamplerSettings,
    ) -> io::Result<(Self, Receiver<PaintIntent>)> {
        let (tx, rx) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = thread::Builder::new()
            .name("fuel-sampler".to_string())
            .spawn(move || {
                Self::sample_loop(running_clone, pointer, tx, settings);
            })?;
        debug!(interval_ms = settings.interval.as_millis() as u64, "fuel sampler started");

        Ok((
            Self {
                handle: Some(handle),
                running,
            },
            rx,
        ))
    }

    fn sample_loop(
        running: Arc<AtomicBool>,
        pointer: SharedPointer,
        tx: Sender<PaintIntent>,
        settings: SamplerSettings,
    ) {
        let mut last_sent = None;
        while running.load(Ordering::Acquire) {
            let sampled = Self::sample(&pointer, &settings);
            if let Some(intent) = Self::dedupe(&mut last_sent, sampled) {
                if tx.send(intent).is_err() {
                    break; // Tick loop is gone
                }
            }
            thread::sleep(settings.interval);
        }
    }

    /// One sampling pass
    fn sample(pointer: &SharedPointer, settings: &SamplerSettings) -> Option<Stamped> {
        let snapshot = *pointer.lock();
        if snapshot.paint != PaintState::Painting {
            return None;
        }
        pointer_to_cell(snapshot.position, settings.cell_size, settings.dimensions)
            .map(|(x, y)| (snapshot.tick, PaintIntent { x, y }))
    }

    /// The snapshot only changes once per tick, so a repeat of the last
    /// sent intent from the same tick is dropped. A new tick re-sends,
    /// which repaints fuel that burned under a resting pointer.
    fn dedupe(last_sent: &mut Option<Stamped>, sampled: Option<Stamped>) -> Option<PaintIntent> {
        match sampled {
            Some(stamped) if *last_sent == Some(stamped) => None,
            Some(stamped) => {
                *last_sent = Some(stamped);
                Some(stamped.1)
            }
            None => {
                *last_sent = None;
                None
            }
        }
    }

    /// Signal the thread and wait for it to finish its current pass.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("fuel sampler thread panicked");
            }
            debug!("fuel sampler stopped");
        }
    }
}

impl Drop for FuelSampler {
    fn drop(&mut self) {
        self.stop();
    }
}
