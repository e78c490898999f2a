use crate::surface::InputIntent;

/// Whether the left mouse button is currently painting fuel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintState {
    #[default]
    Idle,
    Painting,
}

impl PaintState {
    /// Idle --down--> Painting, Painting --up--> Idle, everything else is a no-op
    pub const fn on_intent(self, intent: InputIntent) -> Self {
        match (self, intent) {
            (PaintState::Idle, InputIntent::PointerDown) => PaintState::Painting,
            (PaintState::Painting, InputIntent::PointerUp) => PaintState::Idle,
            (state, _) => state,
        }
    }
}

/// Input-derived flags carried from tick to tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Controls {
    /// Set once a quit intent arrives, never cleared
    pub quit: bool,
    pub paint: PaintState,
}

impl Controls {
    pub const fn apply(self, intent: InputIntent) -> Self {
        Self {
            quit: self.quit || matches!(intent, InputIntent::Quit),
            paint: self.paint.on_intent(intent),
        }
    }
}

/// Process one tick's worth of intents functionally
pub fn process_intents(
    controls: Controls,
    intents: impl IntoIterator<Item = InputIntent>,
) -> Controls {
    intents.into_iter().fold(controls, Controls::apply)
}

/// Convert a pointer position in pixels to the grid cell under it.
/// Returns None when the pointer is outside the grid.
pub fn pointer_to_cell(
    position: (f32, f32),
    cell_size: f32,
    dimensions: (usize, usize),
) -> Option<(usize, usize)> {
    let (px, py) = position;
    if px < 0.0 || py < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let x = (px / cell_size) as usize;
    let y = (py / cell_size) as usize;
    (x < dimensions.0 && y < dimensions.1).then_some((x, y))
}
