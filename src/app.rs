//! Demo host: builds a slider from [`Settings`] and plays a gesture on it.

use std::path::{Path, PathBuf};

use slidebar_ui::{ConfigError, HorizontalSlider, Rgb, SliderConfig, SliderError, Surface};

use crate::gesture::Gesture;
use crate::settings::Settings;

/// Frame background.
const BACKGROUND: Rgb = Rgb::new(40, 44, 52);

/// How far past the right end of the bar the gesture drags.
const OVERSHOOT: f32 = 30.0;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Slider error: {0}")]
    Slider(#[from] SliderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image error for {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the slider, play the drag gesture and write each frame as PNG.
pub fn run(settings: &Settings) -> Result<(), AppError> {
    let mut slider = build_slider(settings)?;
    let frames = simulate(&mut slider, settings)?;

    std::fs::create_dir_all(&settings.out_dir)?;
    for (i, frame) in frames.iter().enumerate() {
        let path = settings.out_dir.join(format!("frame_{i:03}.png"));
        frame
            .to_rgba_image()
            .save(&path)
            .map_err(|source| AppError::Image {
                path: path.clone(),
                source,
            })?;
        log::debug!("Wrote {}", path.display());
    }

    log::info!(
        "Wrote {} frames to {}; final value {}",
        frames.len(),
        settings.out_dir.display(),
        slider.current_value()
    );
    Ok(())
}

/// Construct the slider described by `settings`, loading any images.
pub fn build_slider(settings: &Settings) -> Result<HorizontalSlider, AppError> {
    let config = match &settings.config {
        Some(path) => SliderConfig::load(path)?,
        None => SliderConfig::default(),
    };
    let mut slider = HorizontalSlider::with_config(
        settings.lowest,
        settings.highest,
        settings.initial,
        settings.low_x,
        settings.high_x,
        &config,
    )?;

    if let (Some(unfilled), Some(filled)) = (&settings.unfilled_image, &settings.filled_image) {
        slider.set_bar_image(load_surface(unfilled)?, load_surface(filled)?, settings.fit_mode)?;
    }
    if let Some(knob) = &settings.knob_image {
        slider.set_slider_image(load_surface(knob)?)?;
    }
    Ok(slider)
}

/// Render one warm-up frame, then one frame per gesture step.
///
/// The warm-up render gives the slider its knob hit box, and the gesture
/// grabs the knob at its centre.
pub fn simulate(
    slider: &mut HorizontalSlider,
    settings: &Settings,
) -> Result<Vec<Surface>, AppError> {
    let (width, height) = settings.frame_size();
    let mut frame = blank_frame(width, height)?;
    slider.render(&mut frame, settings.bar_y);

    let Some(knob) = slider.knob_bounds() else {
        return Ok(vec![frame]);
    };
    let gesture = Gesture::drag(
        knob.center(),
        slider.high_x() as f32 + OVERSHOOT,
        settings.frames,
    );

    let mut frames = Vec::with_capacity(gesture.len() + 1);
    frames.push(frame);
    for pointer in gesture.frames() {
        if slider.update(pointer) {
            log::info!("Slider value: {}", slider.current_value());
        }
        let mut frame = blank_frame(width, height)?;
        slider.render(&mut frame, settings.bar_y);
        frames.push(frame);
    }
    Ok(frames)
}

fn blank_frame(width: u32, height: u32) -> Result<Surface, SliderError> {
    let mut frame = Surface::new(width, height)?;
    frame.fill(BACKGROUND);
    Ok(frame)
}

fn load_surface(path: &Path) -> Result<Surface, AppError> {
    let image = image::open(path)
        .map_err(|source| AppError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Surface::from_image(&image)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(args: &[&str]) -> Settings {
        let mut argv = vec!["slidebar"];
        argv.extend_from_slice(args);
        Settings::parse_from(argv)
    }

    #[test]
    fn test_simulated_drag_reaches_highest() {
        let settings = settings(&["--frames", "8"]);
        let mut slider = build_slider(&settings).unwrap();
        let frames = simulate(&mut slider, &settings).unwrap();

        assert_eq!(frames.len(), 9);
        assert_eq!(slider.current_value(), 100);
        assert_eq!(slider.current_x(), 360.0);
        assert_eq!(frames[0].width(), 400);
    }

    #[test]
    fn test_simulated_drag_with_offset_range() {
        let settings = settings(&["--lowest", "-20", "--highest", "20", "--initial", "-5"]);
        let mut slider = build_slider(&settings).unwrap();
        assert_eq!(slider.current_value(), -5);
        simulate(&mut slider, &settings).unwrap();
        assert_eq!(slider.current_value(), 20);
    }

    #[test]
    fn test_invalid_range_reported() {
        let settings = settings(&["--low-x", "200", "--high-x", "100"]);
        assert!(matches!(
            build_slider(&settings),
            Err(AppError::Slider(SliderError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let settings = settings(&["--config", "/nonexistent/slider.json"]);
        assert!(matches!(
            build_slider(&settings),
            Err(AppError::Config(ConfigError::IoError(_)))
        ));
    }

    #[test]
    fn test_missing_bar_image() {
        let settings = settings(&[
            "--unfilled-image",
            "/nonexistent/a.png",
            "--filled-image",
            "/nonexistent/b.png",
        ]);
        assert!(matches!(
            build_slider(&settings),
            Err(AppError::Image { .. })
        ));
    }
}
