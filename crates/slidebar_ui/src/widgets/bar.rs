//! Bar canvas compositing.
//!
//! Each half of the bar (filled and unfilled) is pre-rendered into a canvas
//! the size of the whole bar. The slider later cuts the visible part out of
//! each canvas when it renders.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::colour::Rgb;
use crate::constants::RIM_WIDTH;
use crate::error::{Result, SliderError};
use crate::layout::Rectangle;
use crate::resize;
use crate::surface::Surface;

/// How a user image is mapped onto the bar canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Scale to exactly the canvas size, ignoring aspect ratio.
    Stretch,
    /// Repeat from the top-left corner; partial tiles are clipped.
    Tile,
    /// Largest aspect-preserving fit, centred.
    FitAspect,
    /// Unscaled, centred. Larger images are clipped.
    Center,
}

impl FitMode {
    /// All fit modes in code order.
    pub fn all() -> &'static [FitMode] {
        &[
            FitMode::Stretch,
            FitMode::Tile,
            FitMode::FitAspect,
            FitMode::Center,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FitMode::Stretch => "stretch",
            FitMode::Tile => "tile",
            FitMode::FitAspect => "fit_aspect",
            FitMode::Center => "center",
        }
    }
}

/// Legacy integer codes: 0 stretch, 1 tile, 2 fit-aspect, 3 center.
impl TryFrom<i64> for FitMode {
    type Error = SliderError;

    fn try_from(code: i64) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
            .ok_or_else(|| SliderError::InvalidStretchType(code.to_string()))
    }
}

impl FromStr for FitMode {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| SliderError::InvalidStretchType(s.to_string()))
    }
}

impl std::fmt::Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a bar canvas is rendered from.
#[derive(Debug, Clone)]
pub enum BarSource {
    Colour(Rgb),
    Image { image: Surface, fit_mode: FitMode },
}

/// Render a `width` x `height` bar canvas from `source`.
///
/// A solid colour becomes a capsule with round caps of diameter `height`;
/// the canvas corners stay transparent.
pub fn compose_bar(source: &BarSource, width: u32, height: u32) -> Result<Surface> {
    let mut canvas = Surface::new(width, height)?;
    match source {
        BarSource::Colour(colour) => capsule(&mut canvas, *colour),
        BarSource::Image { image, fit_mode } => match fit_mode {
            FitMode::Stretch => canvas = image.scaled(width, height)?,
            FitMode::Tile => tile(&mut canvas, image),
            FitMode::FitAspect => {
                let fitted = resize::resize(image, width, height)?;
                blit_centered(&mut canvas, &fitted);
            }
            FitMode::Center => blit_centered(&mut canvas, image),
        },
    }
    Ok(canvas)
}

fn capsule(canvas: &mut Surface, colour: Rgb) {
    let width = canvas.width() as f32;
    let radius = canvas.height() as f32 / 2.0;
    canvas.fill_rect(
        Rectangle::new(radius, 0.0, (width - 2.0 * radius).max(0.0), radius * 2.0),
        colour,
    );
    for cx in [radius, width - radius] {
        canvas.fill_circle(cx, radius, radius, colour);
        canvas.stroke_circle(cx, radius, radius - RIM_WIDTH / 2.0, RIM_WIDTH, colour);
    }
}

fn tile(canvas: &mut Surface, image: &Surface) {
    let (tile_w, tile_h) = (image.width() as usize, image.height() as usize);
    for y in (0..canvas.height() as usize).step_by(tile_h) {
        for x in (0..canvas.width() as usize).step_by(tile_w) {
            canvas.blit(image, x as i32, y as i32);
        }
    }
}

fn blit_centered(canvas: &mut Surface, image: &Surface) {
    let x = (i64::from(canvas.width()) - i64::from(image.width())) / 2;
    let y = (i64::from(canvas.height()) - i64::from(image.height())) / 2;
    canvas.blit(image, x as i32, y as i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const CLEAR: Option<[u8; 4]> = Some([0, 0, 0, 0]);

    fn solid(width: u32, height: u32, colour: Rgb) -> Surface {
        let mut s = Surface::new(width, height).unwrap();
        s.fill(colour);
        s
    }

    fn image(image: Surface, fit_mode: FitMode) -> BarSource {
        BarSource::Image { image, fit_mode }
    }

    #[test]
    fn test_fit_mode_codes() {
        assert_eq!(FitMode::try_from(0i64), Ok(FitMode::Stretch));
        assert_eq!(FitMode::try_from(3i64), Ok(FitMode::Center));
        assert_eq!(
            FitMode::try_from(4i64),
            Err(SliderError::InvalidStretchType("4".to_string()))
        );
        assert!(FitMode::try_from(-1i64).is_err());
    }

    #[test]
    fn test_fit_mode_names() {
        assert_eq!("fit-aspect".parse::<FitMode>(), Ok(FitMode::FitAspect));
        assert_eq!(" Tile ".parse::<FitMode>(), Ok(FitMode::Tile));
        assert!(matches!(
            "squash".parse::<FitMode>(),
            Err(SliderError::InvalidStretchType(_))
        ));
        for mode in FitMode::all() {
            assert_eq!(mode.to_string().parse::<FitMode>(), Ok(*mode));
        }
    }

    #[test]
    fn test_colour_canvas_is_capsule() {
        let bar = compose_bar(&BarSource::Colour(RED), 100, 10).unwrap();
        assert_eq!((bar.width(), bar.height()), (100, 10));
        for (x, y) in [(0, 0), (99, 0), (0, 9), (99, 9)] {
            assert_eq!(bar.pixel(x, y), CLEAR, "corner ({x}, {y})");
        }
        for x in [2, 50, 97] {
            assert_eq!(bar.pixel(x, 5), Some([255, 0, 0, 255]), "midline {x}");
        }
        assert_eq!(bar.pixel(0, 5).map(|p| p[3]), Some(255));
        assert_eq!(bar.pixel(50, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_stretch_fills_canvas() {
        let bar = compose_bar(&image(solid(4, 2, RED), FitMode::Stretch), 100, 10).unwrap();
        assert_eq!((bar.width(), bar.height()), (100, 10));
        let [r, _, _, a] = bar.pixel(50, 5).unwrap();
        assert!(r >= 254);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_tile_repeats_and_clips() {
        // 2x2 tile: red top-left, blue elsewhere.
        let mut tile = solid(2, 2, BLUE);
        tile.fill_rect(Rectangle::new(0.0, 0.0, 1.0, 1.0), RED);

        let bar = compose_bar(&image(tile, FitMode::Tile), 5, 3).unwrap();
        assert_eq!(bar.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(bar.pixel(2, 0), Some([255, 0, 0, 255]));
        assert_eq!(bar.pixel(4, 2), Some([255, 0, 0, 255]));
        assert_eq!(bar.pixel(3, 2), Some([0, 0, 255, 255]));
        assert_eq!(bar.pixel(1, 1), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_center_unscaled() {
        let bar = compose_bar(&image(solid(2, 2, RED), FitMode::Center), 10, 4).unwrap();
        assert_eq!(bar.pixel(4, 1), Some([255, 0, 0, 255]));
        assert_eq!(bar.pixel(5, 2), Some([255, 0, 0, 255]));
        assert_eq!(bar.pixel(3, 1), CLEAR);
        assert_eq!(bar.pixel(6, 1), CLEAR);
    }

    #[test]
    fn test_center_overflow_is_clipped() {
        let bar = compose_bar(&image(solid(20, 8, BLUE), FitMode::Center), 10, 4).unwrap();
        assert_eq!(bar.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(bar.pixel(9, 3), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_fit_aspect_centres_letterboxed_image() {
        // 200x100 into 100x10 fits as 20x10, centred at x = 40..60.
        let bar = compose_bar(&image(solid(200, 100, BLUE), FitMode::FitAspect), 100, 10).unwrap();
        assert_eq!(bar.pixel(10, 5), CLEAR);
        assert_eq!(bar.pixel(90, 5), CLEAR);
        let [_, _, b, a] = bar.pixel(50, 5).unwrap();
        assert!(b >= 254);
        assert_eq!(a, 255);
    }
}
