//! Test doubles shared by unit tests.

use std::collections::VecDeque;

use macroquad::color::Color;

use crate::surface::{DisplaySurface, InputIntent};

/// DisplaySurface that records draw calls and replays scripted events,
/// one batch per poll.
#[derive(Default)]
pub struct RecordingSurface {
    pub events: VecDeque<Vec<InputIntent>>,
    pub pointer: (f32, f32),
    pub clears: Vec<Color>,
    pub rects: Vec<(f32, f32, f32, Color)>,
}

impl RecordingSurface {
    pub fn with_events(batches: Vec<Vec<InputIntent>>) -> Self {
        Self {
            events: batches.into(),
            ..Default::default()
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn poll_events(&mut self) -> Vec<InputIntent> {
        self.events.pop_front().unwrap_or_default()
    }

    fn pointer_position(&self) -> (f32, f32) {
        self.pointer
    }

    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Color) {
        self.rects.push((x, y, size, color));
    }
}
