//! Headless host for the slidebar slider.
//!
//! Plays a scripted drag gesture against a [`HorizontalSlider`] and writes
//! every rendered frame to disk, standing in for a real window and event
//! loop.
//!
//! [`HorizontalSlider`]: slidebar_ui::HorizontalSlider

pub mod app;
pub mod gesture;
pub mod settings;

pub use app::{run, simulate, AppError};
pub use gesture::Gesture;
pub use settings::{LogLevel, Settings};
