//! Widget implementations.

mod bar;
mod config;
mod slider;

pub use bar::{compose_bar, BarSource, FitMode};
pub use config::{ConfigError, SliderConfig};
pub use slider::{HorizontalSlider, InteractionState};
