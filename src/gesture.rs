//! Scripted pointer input.

use slidebar_ui::{Point, PointerState};

/// Pointer state for each frame of a press-drag-release gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    frames: Vec<PointerState>,
}

impl Gesture {
    /// Hover at `from`, press, move horizontally to `to_x`, release.
    ///
    /// Needs at least three frames (hover, press, release); shorter requests
    /// are padded to three.
    pub fn drag(from: Point, to_x: f32, frames: usize) -> Self {
        let frames = frames.max(3);
        let moves = frames - 2;
        let mut states = Vec::with_capacity(frames);

        states.push(PointerState::new(from, false));
        for step in 0..moves {
            let t = step as f32 / (moves - 1).max(1) as f32;
            let x = from.x + (to_x - from.x) * t;
            states.push(PointerState::new(Point::new(x, from.y), true));
        }
        states.push(PointerState::new(Point::new(to_x, from.y), false));

        Self { frames: states }
    }

    pub fn frames(&self) -> &[PointerState] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
