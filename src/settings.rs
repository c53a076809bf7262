//! Command-line settings for the demo host.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use slidebar_ui::FitMode;

/// Render a scripted slider drag to PNG frames.
#[derive(Debug, Clone, Parser)]
#[command(name = "slidebar", version, about)]
pub struct Settings {
    /// Slider appearance as JSON (see `SliderConfig`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the frames are written to
    #[arg(long, default_value = "frames")]
    pub out_dir: PathBuf,

    /// Number of frames in the gesture
    #[arg(long, default_value_t = 12)]
    pub frames: usize,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub lowest: i32,

    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    pub highest: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub initial: i32,

    /// Left end of the bar in frame pixels
    #[arg(long, default_value_t = 40)]
    pub low_x: i32,

    /// Right end of the bar in frame pixels
    #[arg(long, default_value_t = 360)]
    pub high_x: i32,

    /// Vertical offset of the bar
    #[arg(long, default_value_t = 45)]
    pub bar_y: i32,

    /// Image for the unfilled part of the bar
    #[arg(long, requires = "filled_image")]
    pub unfilled_image: Option<PathBuf>,

    /// Image for the filled part of the bar
    #[arg(long, requires = "unfilled_image")]
    pub filled_image: Option<PathBuf>,

    /// How bar images are fitted (stretch, tile, fit_aspect, center)
    #[arg(long, default_value = "stretch")]
    pub fit_mode: FitMode,

    /// Image used for the knob
    #[arg(long)]
    pub knob_image: Option<PathBuf>,
}

/// Log level setting for the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Settings {
    /// Frame size that leaves room for the knob on both ends.
    pub fn frame_size(&self) -> (u32, u32) {
        let width = self.high_x.max(0) as u32 + self.low_x.max(0) as u32;
        (width.max(1), (self.bar_y.max(0) as u32 * 2).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse_from(["slidebar"]);
        assert_eq!(settings.frames, 12);
        assert_eq!(settings.fit_mode, FitMode::Stretch);
        assert_eq!(settings.log_level.to_level_filter(), log::LevelFilter::Info);
        assert_eq!(settings.frame_size(), (400, 90));
    }

    #[test]
    fn test_parse_overrides() {
        let settings = Settings::parse_from([
            "slidebar",
            "--lowest",
            "-10",
            "--fit-mode",
            "tile",
            "--log-level",
            "trace",
        ]);
        assert_eq!(settings.lowest, -10);
        assert_eq!(settings.fit_mode, FitMode::Tile);
        assert_eq!(settings.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_bad_fit_mode_rejected() {
        assert!(Settings::try_parse_from(["slidebar", "--fit-mode", "squash"]).is_err());
    }

    #[test]
    fn test_images_come_in_pairs() {
        assert!(Settings::try_parse_from(["slidebar", "--filled-image", "a.png"]).is_err());
    }
}
