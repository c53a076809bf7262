//! Slider configuration.
//!
//! Centralizes the slider's appearance so hosts can keep it in a JSON file
//! instead of hardcoding colours and sizes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::colour::Rgb;
use crate::constants::{
    DEFAULT_BAR_FILLED_COLOUR, DEFAULT_BAR_THICKNESS, DEFAULT_BAR_UNFILLED_COLOUR,
    DEFAULT_SLIDER_COLOUR, DEFAULT_SLIDER_RADIUS,
};
use crate::error::SliderError;

/// Configuration for slider appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Height of the bar
    pub bar_thickness: i32,
    /// Bar colour beyond the knob
    pub bar_unfilled_colour: Rgb,
    /// Bar colour up to the knob
    pub bar_filled_colour: Rgb,
    /// Knob radius
    pub slider_radius: i32,
    /// Knob colour
    pub slider_colour: Rgb,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            bar_thickness: DEFAULT_BAR_THICKNESS,
            bar_unfilled_colour: DEFAULT_BAR_UNFILLED_COLOUR,
            bar_filled_colour: DEFAULT_BAR_FILLED_COLOUR,
            slider_radius: DEFAULT_SLIDER_RADIUS,
            slider_colour: DEFAULT_SLIDER_COLOUR,
        }
    }
}

impl SliderConfig {
    /// Create a new slider configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bar thickness.
    pub fn bar_thickness(mut self, thickness: i32) -> Self {
        self.bar_thickness = thickness;
        self
    }

    /// Set the unfilled bar colour.
    pub fn bar_unfilled_colour(mut self, colour: Rgb) -> Self {
        self.bar_unfilled_colour = colour;
        self
    }

    /// Set the filled bar colour.
    pub fn bar_filled_colour(mut self, colour: Rgb) -> Self {
        self.bar_filled_colour = colour;
        self
    }

    /// Set the knob radius.
    pub fn slider_radius(mut self, radius: i32) -> Self {
        self.slider_radius = radius;
        self
    }

    /// Set the knob colour.
    pub fn slider_colour(mut self, colour: Rgb) -> Self {
        self.slider_colour = colour;
        self
    }

    /// Check the dimensions. Colours are already valid by construction.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.bar_thickness <= 0 {
            return Err(SliderError::InvalidDimension(format!(
                "bar thickness must be positive, got {}",
                self.bar_thickness
            )));
        }
        if self.slider_radius <= 0 {
            return Err(SliderError::InvalidDimension(format!(
                "slider radius must be positive, got {}",
                self.slider_radius
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded slider configuration from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error, including rejected colours
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Parsed, but the values are unusable
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] SliderError),

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.bar_thickness, 10);
        assert_eq!(config.bar_unfilled_colour, Rgb::new(255, 255, 255));
        assert_eq!(config.bar_filled_colour, Rgb::new(200, 200, 200));
        assert_eq!(config.slider_radius, 20);
        assert_eq!(config.slider_colour, Rgb::new(100, 100, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SliderConfig::from_json(r#"{ "bar_thickness": 4, "slider_colour": [1, 2, 3] }"#)
                .unwrap();
        assert_eq!(config.bar_thickness, 4);
        assert_eq!(config.slider_colour, Rgb::new(1, 2, 3));
        assert_eq!(config.slider_radius, 20);
    }

    #[test]
    fn test_bad_colour_is_parse_error() {
        let err = SliderConfig::from_json(r#"{ "bar_filled_colour": [300, 0, 0] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().contains("0..=255"));

        let err = SliderConfig::from_json(r#"{ "bar_filled_colour": [0, "x", 0] }"#).unwrap_err();
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let err = SliderConfig::from_json(r#"{ "slider_radius": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SliderError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SliderConfig::new()
            .bar_thickness(6)
            .bar_filled_colour(Rgb::new(0, 128, 255));
        let json = config.to_json().unwrap();
        assert_eq!(SliderConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SliderConfig::load("/nonexistent/slider.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
