//! Aspect-preserving image resize.
//!
//! Used by [`FitMode::FitAspect`](crate::FitMode::FitAspect). Centring the
//! result inside the target box is the caller's job.

use crate::error::{Result, SliderError};
use crate::surface::Surface;

/// Largest size with the source's aspect ratio that fits the target box.
///
/// The dominant axis of the source is matched to the target first; if the
/// other axis then overflows, the binding axis is used instead. Results are
/// truncated and never drop below one pixel.
pub fn aspect_fit_size(
    src_width: u32,
    src_height: u32,
    target_width: u32,
    target_height: u32,
) -> Result<(u32, u32)> {
    if src_width == 0 || src_height == 0 {
        return Err(SliderError::InvalidDimension(format!(
            "source image is {src_width}x{src_height}"
        )));
    }
    if target_width == 0 || target_height == 0 {
        return Err(SliderError::InvalidDimension(format!(
            "target box is {target_width}x{target_height}"
        )));
    }

    let (sw, sh) = (u64::from(src_width), u64::from(src_height));
    let (tw, th) = (u64::from(target_width), u64::from(target_height));

    // Cross-multiplied so that the bound axis lands exactly on the box edge.
    let width_bound = if sw >= sh {
        sh * tw <= th * sw
    } else {
        sw * th > tw * sh
    };

    let (width, height) = if width_bound {
        (tw, sh * tw / sw)
    } else {
        (sw * th / sh, th)
    };

    let width = (width as u32).clamp(1, target_width);
    let height = (height as u32).clamp(1, target_height);
    Ok((width, height))
}

/// Scaled copy of `image` that fits within `target_width` x `target_height`.
pub fn resize(image: &Surface, target_width: u32, target_height: u32) -> Result<Surface> {
    let (width, height) =
        aspect_fit_size(image.width(), image.height(), target_width, target_height)?;
    log::trace!(
        "Aspect fit {}x{} into {}x{} -> {}x{}",
        image.width(),
        image.height(),
        target_width,
        target_height,
        width,
        height
    );
    image.scaled(width, height)
}
