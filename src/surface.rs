//! The narrow display capability the simulations depend on.

use macroquad::color::Color;
use macroquad::input::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, is_mouse_button_released,
    is_quit_requested, mouse_position, prevent_quit,
};
use macroquad::shapes::draw_rectangle;
use macroquad::window::clear_background;

/// External event detected since the last poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIntent {
    Quit,
    PointerDown,
    PointerUp,
}

/// What the tick loop needs from a window
pub trait DisplaySurface {
    /// Drain pending events without blocking
    fn poll_events(&mut self) -> Vec<InputIntent>;

    /// Current pointer position in pixels
    fn pointer_position(&self) -> (f32, f32);

    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Color);

    /// Fill a `size`×`size` square with its top-left corner at (x, y)
    fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Color);
}

/// DisplaySurface backed by the macroquad window.
/// Must only be used from the main thread.
pub struct MacroquadSurface;

impl MacroquadSurface {
    /// Take over window-close handling so it arrives as [`InputIntent::Quit`]
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for MacroquadSurface {
    fn poll_events(&mut self) -> Vec<InputIntent> {
        let events = [
            (is_quit_requested() || is_key_pressed(KeyCode::Escape), InputIntent::Quit),
            (is_mouse_button_pressed(MouseButton::Left), InputIntent::PointerDown),
            (is_mouse_button_released(MouseButton::Left), InputIntent::PointerUp),
        ];
        events
            .into_iter()
            .filter_map(|(happened, intent)| happened.then_some(intent))
            .collect()
    }

    fn pointer_position(&self) -> (f32, f32) {
        mouse_position()
    }

    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Color) {
        draw_rectangle(x, y, size, size, color);
    }
}
