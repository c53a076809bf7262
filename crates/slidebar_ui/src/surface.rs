//! Software drawing surface.
//!
//! [`Surface`] is the only graphics type the slider touches. It wraps a
//! `tiny_skia::Pixmap`, so pixel data is stored as premultiplied RGBA8.
//! Conversions to and from `image::RgbaImage` (straight alpha) are provided
//! for hosts that load textures from disk or write frames out.

use tiny_skia::{
    ColorU8, FillRule, FilterQuality, IntRect, Paint, PathBuilder, Pixmap, PixmapPaint,
    Rect, Stroke, Transform,
};

use crate::colour::Rgb;
use crate::error::{Result, SliderError};
use crate::layout::Rectangle;

/// An RGBA image that can be drawn on and composited.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Pixmap::new(width, height)
            .map(|pixmap| Self { pixmap })
            .ok_or_else(|| {
                SliderError::InvalidDimension(format!("cannot create a {width}x{height} surface"))
            })
    }

    /// Create a surface from straight-alpha RGBA8 data.
    pub fn from_rgba8(data: &[u8], width: u32, height: u32) -> Result<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(SliderError::InvalidDimension(format!(
                "{} bytes do not describe a {width}x{height} RGBA image",
                data.len()
            )));
        }
        let mut surface = Self::new(width, height)?;
        for (dst, src) in surface.pixmap.pixels_mut().iter_mut().zip(data.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }
        Ok(surface)
    }

    pub fn from_image(image: &image::RgbaImage) -> Result<Self> {
        Self::from_rgba8(image.as_raw(), image.width(), image.height())
    }

    /// Straight-alpha copy of the pixels.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image::RgbaImage::from_raw(self.width(), self.height(), data)
            .unwrap_or_else(|| image::RgbaImage::new(self.width(), self.height()))
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA of one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Copy of a sub-rectangle, clipped to the surface.
    ///
    /// Returns `None` when nothing of it remains.
    pub fn sub_surface(&self, x: i32, y: i32, width: u32, height: u32) -> Option<Surface> {
        let rect = IntRect::from_xywh(x, y, width, height)?;
        self.pixmap.clone_rect(rect).map(|pixmap| Surface { pixmap })
    }

    /// Composite `source` onto this surface with its top-left at `(x, y)`.
    ///
    /// The source is clipped to this surface first and always drawn at a
    /// non-negative offset.
    pub fn blit(&mut self, source: &Surface, x: i32, y: i32) {
        let (x, y) = (i64::from(x), i64::from(y));
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(source.width())).min(i64::from(self.width()));
        let y1 = (y + i64::from(source.height())).min(i64::from(self.height()));
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        // All four values fit in i32/u32: they are bounded by surface sizes.
        let Some(visible) = source.sub_surface(
            (x0 - x) as i32,
            (y0 - y) as i32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        ) else {
            return;
        };
        self.pixmap.draw_pixmap(
            x0 as i32,
            y0 as i32,
            visible.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Scaled copy of exactly `width` x `height`, ignoring aspect ratio.
    pub fn scaled(&self, width: u32, height: u32) -> Result<Surface> {
        let mut out = Surface::new(width, height)?;
        let sx = width as f32 / self.width() as f32;
        let sy = height as f32 / self.height() as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        out.pixmap.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &paint,
            Transform::from_scale(sx, sy),
            None,
        );
        Ok(out)
    }

    pub fn fill(&mut self, colour: Rgb) {
        self.pixmap.fill(colour.to_tiny_skia());
    }

    pub fn fill_rect(&mut self, rect: Rectangle, colour: Rgb) {
        let Some(rect) = Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &solid_paint(colour, false), Transform::identity(), None);
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, colour: Rgb) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid_paint(colour, false),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Anti-aliased circle outline.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, width: f32, colour: Rgb) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &solid_paint(colour, true),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

fn solid_paint(colour: Rgb, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(colour.r, colour.g, colour.b, 255);
    paint.anti_alias = anti_alias;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(SliderError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_fill_rect_and_pixel() {
        let mut s = Surface::new(10, 10).unwrap();
        s.fill_rect(Rectangle::new(0.0, 0.0, 5.0, 10.0), Rgb::new(255, 0, 0));
        assert_eq!(s.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel(7, 2), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(10, 2), None);
        assert_eq!(s.pixel(0, 10), None);
    }

    #[test]
    fn test_blit_with_offset_clips() {
        let mut src = Surface::new(4, 4).unwrap();
        src.fill(Rgb::new(0, 0, 255));
        let mut dst = Surface::new(6, 6).unwrap();
        dst.blit(&src, 4, -2);
        assert_eq!(dst.pixel(5, 0), Some([0, 0, 255, 255]));
        assert_eq!(dst.pixel(5, 2), Some([0, 0, 0, 0]));
        assert_eq!(dst.pixel(3, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_blit_negative_offset_keeps_footprint() {
        let mut src = Surface::new(4, 4).unwrap();
        src.fill(Rgb::new(0, 0, 255));
        let mut dst = Surface::new(6, 6).unwrap();
        dst.blit(&src, -3, -1);
        // Only source column 3, rows 1..4, lands on the target.
        for y in 0..3 {
            assert_eq!(dst.pixel(0, y), Some([0, 0, 255, 255]), "row {y}");
        }
        assert_eq!(dst.pixel(0, 3), Some([0, 0, 0, 0]));
        assert_eq!(dst.pixel(1, 0), Some([0, 0, 0, 0]));

        let mut untouched = Surface::new(6, 6).unwrap();
        untouched.blit(&src, -4, 0);
        untouched.blit(&src, 6, 6);
        assert!(untouched.to_rgba_image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_sub_surface() {
        let mut s = Surface::new(10, 4).unwrap();
        s.fill_rect(Rectangle::new(5.0, 0.0, 5.0, 4.0), Rgb::new(0, 255, 0));
        let right = s.sub_surface(5, 0, 5, 4).unwrap();
        assert_eq!((right.width(), right.height()), (5, 4));
        assert_eq!(right.pixel(0, 0), Some([0, 255, 0, 255]));
        assert!(s.sub_surface(0, 0, 0, 4).is_none());
    }

    #[test]
    fn test_scaled_dimensions() {
        let mut s = Surface::new(8, 2).unwrap();
        s.fill(Rgb::new(10, 20, 30));
        let big = s.scaled(16, 16).unwrap();
        assert_eq!((big.width(), big.height()), (16, 16));
        let [r, g, b, a] = big.pixel(8, 8).unwrap();
        assert!(r.abs_diff(10) <= 1 && g.abs_diff(20) <= 1 && b.abs_diff(30) <= 1);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_fill_circle_center() {
        let mut s = Surface::new(20, 20).unwrap();
        s.fill_circle(10.0, 10.0, 8.0, Rgb::new(100, 100, 100));
        assert_eq!(s.pixel(10, 10), Some([100, 100, 100, 255]));
        assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_image_round_trip_keeps_alpha() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([200, 100, 50, 255]));
        let s = Surface::from_image(&img).unwrap();
        assert_eq!(s.to_rgba_image(), img);
        assert!(Surface::from_rgba8(&[0; 7], 1, 2).is_err());
    }
}
