//! slidebar_ui - a horizontal value slider for 2D software-rendered frames
//!
//! The slider pre-renders its bar and knob into [`Surface`]s and composites
//! them onto a host-supplied frame. Hosts feed it polled pointer state once
//! per frame and read back an integer value.

pub mod colour;
pub mod constants;
mod error;
mod event;
mod layout;
pub mod resize;
mod surface;
mod widgets;

pub use colour::{ColourError, Rgb};
pub use error::{Result, SliderError};
pub use event::{Event, MouseButton, PointerState};
pub use layout::{Point, Rectangle};
pub use surface::Surface;
pub use widgets::{
    compose_bar, BarSource, ConfigError, FitMode, HorizontalSlider, InteractionState, SliderConfig,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::colour::Rgb;
    pub use crate::event::{Event, MouseButton, PointerState};
    pub use crate::layout::Point;
    pub use crate::surface::Surface;
    pub use crate::widgets::{FitMode, HorizontalSlider, SliderConfig};
}
