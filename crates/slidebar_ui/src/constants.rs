//! Centralized constants for slidebar_ui
//!
//! Default look of a freshly constructed slider.

use crate::colour::Rgb;

// =============================================================================
// Bar
// =============================================================================

/// Default bar thickness in pixels
pub const DEFAULT_BAR_THICKNESS: i32 = 10;

/// Colour of the bar beyond the knob
pub const DEFAULT_BAR_UNFILLED_COLOUR: Rgb = Rgb::new(255, 255, 255);

/// Colour of the bar up to the knob
pub const DEFAULT_BAR_FILLED_COLOUR: Rgb = Rgb::new(200, 200, 200);

// =============================================================================
// Knob
// =============================================================================

/// Default knob radius in pixels
pub const DEFAULT_SLIDER_RADIUS: i32 = 20;

pub const DEFAULT_SLIDER_COLOUR: Rgb = Rgb::new(100, 100, 100);

/// Width of the anti-aliased rim drawn around the knob disc and the bar caps
pub const RIM_WIDTH: f32 = 1.0;
