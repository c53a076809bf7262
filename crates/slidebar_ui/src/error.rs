use thiserror::Error;

use crate::colour::ColourError;

#[derive(Debug, Error, PartialEq)]
pub enum SliderError {
    #[error("Invalid range: value span {value_width} and pixel span {pixel_width} must both be positive")]
    InvalidRange { value_width: i64, pixel_width: i64 },

    #[error("Invalid colour: {0}")]
    InvalidColour(#[from] ColourError),

    #[error("Invalid stretch type: {0}")]
    InvalidStretchType(String),

    #[error("Value {value} is outside the slider range [{lowest}, {highest}]")]
    OutOfRange { value: i32, lowest: i32, highest: i32 },

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
}

impl From<std::convert::Infallible> for SliderError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, SliderError>;
