//! Pointer input as seen by the slider.
//!
//! Hosts either poll the cursor themselves and fill in a [`PointerState`]
//! each frame, or feed their window events through [`PointerState::apply`].

use crate::layout::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Pointer events a host may forward.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Mouse moved.
    MouseMoved { position: Point },
}

/// Polled pointer state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Point,
    /// Whether the primary (left) button is held.
    pub primary_down: bool,
}

impl PointerState {
    pub fn new(position: Point, primary_down: bool) -> Self {
        Self {
            position,
            primary_down,
        }
    }

    /// Fold an event into the polled state.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::MousePressed { button, position } => {
                self.position = *position;
                if *button == MouseButton::Left {
                    self.primary_down = true;
                }
            }
            Event::MouseReleased { button, position } => {
                self.position = *position;
                if *button == MouseButton::Left {
                    self.primary_down = false;
                }
            }
            Event::MouseMoved { position } => self.position = *position,
        }
    }
}
