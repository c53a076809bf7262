//! RGB colours accepted by the slider's colour setters.
//!
//! Colours arrive from several places: literal tuples in host code, integer
//! slices, and JSON arrays from configuration files. All of them go through
//! the same validation so that a bad colour is reported with the precise
//! reason it was rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a colour was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColourError {
    /// Not exactly three components.
    #[error("expected 3 components, found {found}")]
    WrongArity { found: usize },

    /// A component that is not an integer.
    #[error("component {index} is not an integer: {found}")]
    WrongType { index: usize, found: String },

    /// A component outside 0..=255.
    #[error("component {index} is {value}, expected 0..=255")]
    OutOfRange { index: usize, value: i64 },
}

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from arbitrary integer components.
    pub fn from_components(components: &[i64]) -> Result<Self, ColourError> {
        let [r, g, b] = components else {
            return Err(ColourError::WrongArity {
                found: components.len(),
            });
        };
        Ok(Self::new(channel(0, *r)?, channel(1, *g)?, channel(2, *b)?))
    }

    pub fn to_tiny_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

fn channel(index: usize, value: i64) -> Result<u8, ColourError> {
    u8::try_from(value).map_err(|_| ColourError::OutOfRange { index, value })
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl TryFrom<(i32, i32, i32)> for Rgb {
    type Error = ColourError;

    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::from_components(&[r.into(), g.into(), b.into()])
    }
}

impl TryFrom<&[i32]> for Rgb {
    type Error = ColourError;

    fn try_from(components: &[i32]) -> Result<Self, Self::Error> {
        let widened: Vec<i64> = components.iter().map(|&c| i64::from(c)).collect();
        Self::from_components(&widened)
    }
}

impl TryFrom<Vec<i32>> for Rgb {
    type Error = ColourError;

    fn try_from(components: Vec<i32>) -> Result<Self, Self::Error> {
        Self::try_from(components.as_slice())
    }
}

impl TryFrom<&serde_json::Value> for Rgb {
    type Error = ColourError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(ColourError::WrongType {
                    index: 0,
                    found: other.to_string(),
                })
            }
        };
        if items.len() != 3 {
            return Err(ColourError::WrongArity { found: items.len() });
        }
        let mut components = [0i64; 3];
        for (index, item) in items.iter().enumerate() {
            components[index] = item.as_i64().ok_or_else(|| ColourError::WrongType {
                index,
                found: item.to_string(),
            })?;
        }
        Self::from_components(&components)
    }
}

impl TryFrom<serde_json::Value> for Rgb {
    type Error = ColourError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}
