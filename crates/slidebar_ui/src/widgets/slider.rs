//! A horizontal slider for picking an integer within a range.
//!
//! The slider lives in two coordinate systems: the value range
//! `[lowest_value, highest_value]` and the pixel range `[low_x, high_x]` on
//! the target surface. The knob position `current_x` and `current_value` are
//! kept consistent through a fixed linear mapping.
//!
//! Hosts drive it once per frame:
//!
//! ```ignore
//! slider.update(&pointer);
//! slider.render(&mut frame, 40);
//! ```
//!
//! `render` records where the knob was drawn; `update` hit-tests against that
//! box, so drags can only start after the first render.

use crate::colour::Rgb;
use crate::constants::RIM_WIDTH;
use crate::error::{Result, SliderError};
use crate::event::PointerState;
use crate::layout::Rectangle;
use crate::surface::Surface;

use super::bar::{compose_bar, BarSource, FitMode};
use super::config::SliderConfig;

/// Who owns the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Button up.
    #[default]
    Idle,
    /// Button went down on the knob; the knob follows the pointer.
    Dragging,
    /// Button went down elsewhere; ignored until released.
    ArmedOutside,
}

/// What the knob is rendered from.
#[derive(Debug, Clone)]
enum KnobSource {
    Colour(Rgb),
    Image(Surface),
}

/// A horizontal value slider with pre-rendered bar and knob images.
#[derive(Debug, Clone)]
pub struct HorizontalSlider {
    lowest_value: i32,
    highest_value: i32,
    low_x: i32,
    high_x: i32,
    current_value: i32,
    current_x: f32,
    interaction: InteractionState,
    bar_thickness: i32,
    slider_radius: i32,
    unfilled_source: BarSource,
    filled_source: BarSource,
    knob_source: KnobSource,
    bar_unfilled: Surface,
    bar_filled: Surface,
    knob: Surface,
    /// Where the knob was last drawn. `None` until the first render.
    knob_bounds: Option<Rectangle>,
}

impl HorizontalSlider {
    /// Create a slider with the default look.
    pub fn new(
        lowest_value: i32,
        highest_value: i32,
        initial_value: i32,
        low_x: i32,
        high_x: i32,
    ) -> Result<Self> {
        Self::with_config(
            lowest_value,
            highest_value,
            initial_value,
            low_x,
            high_x,
            &SliderConfig::default(),
        )
    }

    /// Create a slider whose look comes from `config`.
    pub fn with_config(
        lowest_value: i32,
        highest_value: i32,
        initial_value: i32,
        low_x: i32,
        high_x: i32,
        config: &SliderConfig,
    ) -> Result<Self> {
        let value_width = i64::from(highest_value) - i64::from(lowest_value);
        let pixel_width = i64::from(high_x) - i64::from(low_x);
        if value_width <= 0 || pixel_width <= 0 {
            return Err(SliderError::InvalidRange {
                value_width,
                pixel_width,
            });
        }
        if initial_value < lowest_value || initial_value > highest_value {
            return Err(SliderError::OutOfRange {
                value: initial_value,
                lowest: lowest_value,
                highest: highest_value,
            });
        }
        config.validate()?;

        let unfilled_source = BarSource::Colour(config.bar_unfilled_colour);
        let filled_source = BarSource::Colour(config.bar_filled_colour);
        let knob_source = KnobSource::Colour(config.slider_colour);

        let bar_width = pixel_width as u32;
        let thickness = config.bar_thickness as u32;
        let bar_unfilled = compose_bar(&unfilled_source, bar_width, thickness)?;
        let bar_filled = compose_bar(&filled_source, bar_width, thickness)?;
        let knob = render_knob(&knob_source, config.slider_radius)?;

        let mut slider = Self {
            lowest_value,
            highest_value,
            low_x,
            high_x,
            current_value: initial_value,
            current_x: low_x as f32,
            interaction: InteractionState::Idle,
            bar_thickness: config.bar_thickness,
            slider_radius: config.slider_radius,
            unfilled_source,
            filled_source,
            knob_source,
            bar_unfilled,
            bar_filled,
            knob,
            knob_bounds: None,
        };
        slider.current_x = slider.value_to_x(initial_value);

        log::debug!(
            "Created slider: values [{}, {}] at {}, pixels [{}, {}]",
            lowest_value,
            highest_value,
            initial_value,
            low_x,
            high_x
        );
        Ok(slider)
    }

    fn value_width(&self) -> f64 {
        f64::from(self.highest_value) - f64::from(self.lowest_value)
    }

    fn pixel_width(&self) -> f64 {
        f64::from(self.high_x) - f64::from(self.low_x)
    }

    fn bar_width(&self) -> u32 {
        (i64::from(self.high_x) - i64::from(self.low_x)) as u32
    }

    /// Pixel position of `value`.
    fn value_to_x(&self, value: i32) -> f32 {
        let offset = f64::from(value) - f64::from(self.lowest_value);
        (f64::from(self.low_x) + self.pixel_width() * offset / self.value_width()) as f32
    }

    /// Value at pixel position `x`, truncated toward zero.
    fn x_to_value(&self, x: f32) -> i32 {
        let offset = f64::from(x) - f64::from(self.low_x);
        let steps = (self.value_width() * offset / self.pixel_width()).trunc();
        (f64::from(self.lowest_value) + steps) as i32
    }

    /// Advance the interaction state machine by one frame.
    ///
    /// Returns `true` when the value changed.
    pub fn update(&mut self, pointer: &PointerState) -> bool {
        let Some(knob) = self.knob_bounds else {
            log::trace!("Slider update skipped: not rendered yet");
            return false;
        };

        let previous_state = self.interaction;
        if pointer.primary_down {
            if self.interaction == InteractionState::Idle {
                self.interaction = if knob.contains(pointer.position) {
                    InteractionState::Dragging
                } else {
                    InteractionState::ArmedOutside
                };
            }
        } else {
            self.interaction = InteractionState::Idle;
        }
        if self.interaction != previous_state {
            log::trace!(
                "Slider interaction {:?} -> {:?}",
                previous_state,
                self.interaction
            );
        }

        if self.interaction != InteractionState::Dragging || !pointer.position.x.is_finite() {
            return false;
        }

        let x = pointer
            .position
            .x
            .clamp(self.low_x as f32, self.high_x as f32);
        if x == self.current_x {
            return false;
        }
        let previous_value = self.current_value;
        self.current_x = x;
        self.current_value = self.x_to_value(x);
        self.current_value != previous_value
    }

    /// Draw the bar and knob onto `target` with the bar's top edge at `y`.
    pub fn render(&mut self, target: &mut Surface, y: i32) {
        let thickness = self.bar_thickness as u32;
        let bar_width = self.bar_width();
        let split = ((self.current_x - self.low_x as f32) as u32).min(bar_width);

        if let Some(filled) = self.bar_filled.sub_surface(0, 0, split, thickness) {
            target.blit(&filled, self.low_x, y);
        }
        if let Some(unfilled) =
            self.bar_unfilled
                .sub_surface(split as i32, 0, bar_width - split, thickness)
        {
            target.blit(&unfilled, self.low_x + split as i32, y);
        }

        let knob_x = self.current_x as i32 - self.knob.width() as i32 / 2;
        let knob_y = y + self.bar_thickness / 2 - self.knob.height() as i32 / 2;
        target.blit(&self.knob, knob_x, knob_y);

        self.knob_bounds = Some(Rectangle::new(
            knob_x as f32,
            knob_y as f32,
            self.knob.width() as f32,
            self.knob.height() as f32,
        ));
    }

    pub fn set_bar_unfilled_colour<C>(&mut self, colour: C) -> Result<()>
    where
        C: TryInto<Rgb>,
        SliderError: From<<C as TryInto<Rgb>>::Error>,
    {
        let source = BarSource::Colour(colour.try_into()?);
        self.bar_unfilled = compose_bar(&source, self.bar_width(), self.bar_thickness as u32)?;
        self.unfilled_source = source;
        log::debug!("Regenerated unfilled bar: {:?}", self.unfilled_source);
        Ok(())
    }

    pub fn set_bar_filled_colour<C>(&mut self, colour: C) -> Result<()>
    where
        C: TryInto<Rgb>,
        SliderError: From<<C as TryInto<Rgb>>::Error>,
    {
        let source = BarSource::Colour(colour.try_into()?);
        self.bar_filled = compose_bar(&source, self.bar_width(), self.bar_thickness as u32)?;
        self.filled_source = source;
        log::debug!("Regenerated filled bar: {:?}", self.filled_source);
        Ok(())
    }

    /// Set the knob colour.
    pub fn set_slider_colour<C>(&mut self, colour: C) -> Result<()>
    where
        C: TryInto<Rgb>,
        SliderError: From<<C as TryInto<Rgb>>::Error>,
    {
        let source = KnobSource::Colour(colour.try_into()?);
        self.knob = render_knob(&source, self.slider_radius)?;
        self.knob_source = source;
        log::debug!("Regenerated knob: {:?}", self.knob_source);
        Ok(())
    }

    /// Replace the knob with an image stretched to the knob's diameter.
    ///
    /// The image is not used at its own size: the knob, and so its hit box,
    /// always measures `2 * slider_radius` on each side.
    pub fn set_slider_image(&mut self, image: Surface) -> Result<()> {
        let source = KnobSource::Image(image);
        self.knob = render_knob(&source, self.slider_radius)?;
        self.knob_source = source;
        log::debug!("Regenerated knob from image");
        Ok(())
    }

    /// Texture both halves of the bar with images.
    pub fn set_bar_image(
        &mut self,
        unfilled_image: Surface,
        filled_image: Surface,
        fit_mode: FitMode,
    ) -> Result<()> {
        let unfilled_source = BarSource::Image {
            image: unfilled_image,
            fit_mode,
        };
        let filled_source = BarSource::Image {
            image: filled_image,
            fit_mode,
        };
        let (width, thickness) = (self.bar_width(), self.bar_thickness as u32);
        let bar_unfilled = compose_bar(&unfilled_source, width, thickness)?;
        let bar_filled = compose_bar(&filled_source, width, thickness)?;

        self.unfilled_source = unfilled_source;
        self.filled_source = filled_source;
        self.bar_unfilled = bar_unfilled;
        self.bar_filled = bar_filled;
        log::debug!("Regenerated bar images with fit mode {}", fit_mode);
        Ok(())
    }

    /// Move the knob to `value`.
    pub fn set_current_value(&mut self, value: i32) -> Result<()> {
        if value < self.lowest_value || value > self.highest_value {
            return Err(SliderError::OutOfRange {
                value,
                lowest: self.lowest_value,
                highest: self.highest_value,
            });
        }
        self.current_value = value;
        self.current_x = self.value_to_x(value);
        Ok(())
    }

    pub fn set_bar_thickness(&mut self, value: i32) -> Result<()> {
        if value <= 0 {
            return Err(SliderError::InvalidDimension(format!(
                "bar thickness must be positive, got {value}"
            )));
        }
        let width = self.bar_width();
        let bar_unfilled = compose_bar(&self.unfilled_source, width, value as u32)?;
        let bar_filled = compose_bar(&self.filled_source, width, value as u32)?;

        self.bar_thickness = value;
        self.bar_unfilled = bar_unfilled;
        self.bar_filled = bar_filled;
        log::debug!("Bar thickness set to {}", value);
        Ok(())
    }

    /// Set the knob radius.
    pub fn set_slider_radius(&mut self, value: i32) -> Result<()> {
        if value <= 0 {
            return Err(SliderError::InvalidDimension(format!(
                "slider radius must be positive, got {value}"
            )));
        }
        self.knob = render_knob(&self.knob_source, value)?;
        self.slider_radius = value;
        log::debug!("Slider radius set to {}", value);
        Ok(())
    }

    pub fn current_value(&self) -> i32 {
        self.current_value
    }

    pub fn lowest_value(&self) -> i32 {
        self.lowest_value
    }

    pub fn highest_value(&self) -> i32 {
        self.highest_value
    }

    pub fn current_x(&self) -> f32 {
        self.current_x
    }

    pub fn low_x(&self) -> i32 {
        self.low_x
    }

    pub fn high_x(&self) -> i32 {
        self.high_x
    }

    pub fn bar_thickness(&self) -> i32 {
        self.bar_thickness
    }

    pub fn slider_radius(&self) -> i32 {
        self.slider_radius
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Knob box recorded by the last render.
    pub fn knob_bounds(&self) -> Option<Rectangle> {
        self.knob_bounds
    }

    pub fn bar_unfilled(&self) -> &Surface {
        &self.bar_unfilled
    }

    pub fn bar_filled(&self) -> &Surface {
        &self.bar_filled
    }

    pub fn knob(&self) -> &Surface {
        &self.knob
    }
}

fn render_knob(source: &KnobSource, radius: i32) -> Result<Surface> {
    let diameter = (radius as u32) * 2;
    match source {
        KnobSource::Colour(colour) => {
            let mut knob = Surface::new(diameter, diameter)?;
            let r = radius as f32;
            knob.fill_circle(r, r, r - RIM_WIDTH / 2.0, *colour);
            knob.stroke_circle(r, r, r - RIM_WIDTH / 2.0, RIM_WIDTH, *colour);
            Ok(knob)
        }
        KnobSource::Image(image) => image.scaled(diameter, diameter),
    }
}
