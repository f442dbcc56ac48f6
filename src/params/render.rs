//! Rendering and recording configuration.

use crate::error::{Result, WavefieldError};

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Point sprite size (world units, shrinks with distance)
    pub point_size: f32,

    /// Point sprite opacity
    pub point_opacity: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 60.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            point_size: 0.06,
            point_opacity: 0.5,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(WavefieldError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if !(self.near_plane > 0.0) || self.far_plane <= self.near_plane {
            return Err(WavefieldError::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got {} / {}",
                self.near_plane, self.far_plane
            )));
        }
        Ok(())
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(WavefieldError::InvalidConfig(format!(
                "recording duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        if self.fps == 0 {
            return Err(WavefieldError::InvalidConfig(
                "recording frame rate must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Field time of a captured frame (fixed step, independent of wall clock)
    pub fn frame_time_s(&self, frame_num: usize) -> f32 {
        frame_num as f32 / self.fps as f32
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }

    /// PNG path for one frame
    pub fn frame_path(&self, frame_num: usize) -> String {
        format!("{}/frame_{:05}.png", self.frames_dir(), frame_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_frame_count() {
        let config = RecordingConfig::new(2.5);
        assert_eq!(config.total_frames(), 150);
        assert_eq!(config.frame_path(7), "recording/frames/frame_00007.png");
        assert!((config.frame_time_s(30) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_recording_duration_validation() {
        assert!(RecordingConfig::new(2.5).validate().is_ok());
        assert!(RecordingConfig::new(0.0).validate().is_err());
        assert!(RecordingConfig::new(-2.0).validate().is_err());
        assert!(RecordingConfig::new(f32::NAN).validate().is_err());
        assert!(RecordingConfig::new(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_render_config_validation() {
        assert!(RenderConfig::default().validate().is_ok());

        let mut config = RenderConfig::default();
        config.window_height = 0;
        assert!(config.validate().is_err());

        let mut config = RenderConfig::default();
        config.far_plane = 0.05;
        assert!(config.validate().is_err());
    }
}
