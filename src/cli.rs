//! Command-line argument parsing.

use std::time::Duration;

use clap::Parser;

use crate::error::Result;
use crate::params::{FieldPhysics, RecordingConfig, RenderConfig, RippleParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavefield")]
#[command(about = "Interactive wave-field hero background", long_about = None)]
pub struct Args {
    /// Points per side of the grid
    #[arg(long, value_name = "POINTS", default_value_t = 250)]
    pub grid_size: usize,

    /// Spacing between grid points (world units)
    #[arg(long, value_name = "UNITS", default_value_t = 0.25)]
    pub spacing: f32,

    /// Ripple lifetime (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 3.0)]
    pub ripple_lifetime: f32,

    /// Ripple propagation speed (world units per second)
    #[arg(long, value_name = "UNITS_PER_S", default_value_t = 8.0)]
    pub ripple_speed: f32,

    /// Window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 1280)]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 720)]
    pub height: u32,

    /// Record frames to PNG (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

impl Args {
    pub fn field_physics(&self) -> FieldPhysics {
        FieldPhysics {
            grid_size: self.grid_size,
            grid_spacing: self.spacing,
            ..FieldPhysics::default()
        }
    }

    pub fn ripple_params(&self) -> RippleParams {
        RippleParams {
            // Negative or non-finite input collapses to zero and fails validation
            lifetime: Duration::try_from_secs_f32(self.ripple_lifetime).unwrap_or(Duration::ZERO),
            propagation_speed: self.ripple_speed,
            ..RippleParams::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            ..RenderConfig::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Result<Option<RecordingConfig>> {
        let Some(duration) = self.record else {
            return Ok(None);
        };

        let config = RecordingConfig::new(duration);
        config.validate()?;
        std::fs::create_dir_all(config.frames_dir())?;
        log::info!(
            "Recording {} frames to {}",
            config.total_frames(),
            config.frames_dir()
        );

        Ok(Some(config))
    }
}
