//! Wave field physics: grid layout, base wave terms and ripple tuning.

use std::time::Duration;

use crate::error::{Result, WavefieldError};

/// Which planar quantity a wave term samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveInput {
    /// Travels along X
    X,
    /// Travels along Z
    Z,
    /// Travels diagonally (x + z)
    Diagonal,
    /// Travels radially outward from the origin
    Radial,
}

impl WaveInput {
    /// Planar coordinate fed into the sine for a point at (x, z)
    pub fn sample(self, x: f32, z: f32) -> f32 {
        match self {
            WaveInput::X => x,
            WaveInput::Z => z,
            WaveInput::Diagonal => x + z,
            WaveInput::Radial => (x * x + z * z).sqrt(),
        }
    }
}

/// One sinusoidal traveling wave: `amplitude * sin(input * frequency + t * speed)`
#[derive(Debug, Clone, Copy)]
pub struct WaveTerm {
    pub input: WaveInput,

    /// Spatial frequency (radians per world unit)
    pub frequency: f32,

    /// Phase speed (radians per second)
    pub speed: f32,

    /// Peak height (world units, before `FieldPhysics::wave_scale`)
    pub amplitude: f32,
}

impl WaveTerm {
    pub const fn new(input: WaveInput, frequency: f32, speed: f32, amplitude: f32) -> Self {
        Self {
            input,
            frequency,
            speed,
            amplitude,
        }
    }

    pub fn evaluate(&self, x: f32, z: f32, time_s: f32) -> f32 {
        (self.input.sample(x, z) * self.frequency + time_s * self.speed).sin() * self.amplitude
    }
}

/// Grid layout, base wave motion and color gradient
#[derive(Debug, Clone)]
pub struct FieldPhysics {
    /// Points per side (N×N points total)
    pub grid_size: usize,

    /// Distance between neighbouring points (world units)
    pub grid_spacing: f32,

    /// Ocean-like base motion, summed then multiplied by `wave_scale`
    pub wave_terms: [WaveTerm; 4],

    /// Overall multiplier applied to the summed base waves
    pub wave_scale: f32,

    /// Minimum brightness so edge points stay faintly visible
    pub brightness_floor: f32,

    /// Brightness lost per unit of normalized radial distance
    pub brightness_falloff: f32,

    /// RGB multipliers applied to brightness (slightly blue)
    pub tint: [f32; 3],

    /// Rotation of the whole field group about the world X axis (radians)
    pub tilt_x_rad: f32,
}

impl Default for FieldPhysics {
    fn default() -> Self {
        Self {
            grid_size: 250,
            grid_spacing: 0.25,
            wave_terms: [
                WaveTerm::new(WaveInput::X, 0.3, 1.2, 0.8),
                WaveTerm::new(WaveInput::Z, 0.4, 0.8, 0.6),
                WaveTerm::new(WaveInput::Diagonal, 0.2, 1.5, 0.4),
                WaveTerm::new(WaveInput::Radial, 0.1, 2.0, 0.3),
            ],
            wave_scale: 0.5,
            brightness_floor: 0.1,
            brightness_falloff: 0.7,
            tint: [0.8, 0.8, 0.9],
            tilt_x_rad: -0.1,
        }
    }
}

impl FieldPhysics {
    /// Side length of the square grid (world units)
    pub fn extent(&self) -> f32 {
        self.grid_size as f32 * self.grid_spacing
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 {
            return Err(WavefieldError::InvalidConfig(format!(
                "grid size must be at least 2, got {}",
                self.grid_size
            )));
        }
        if !(self.grid_spacing > 0.0) {
            return Err(WavefieldError::InvalidConfig(format!(
                "grid spacing must be > 0, got {}",
                self.grid_spacing
            )));
        }

        // The whole position buffer is one GPU vertex buffer
        let buffer_bytes = (self.grid_size as u64)
            .saturating_mul(self.grid_size as u64)
            .saturating_mul(std::mem::size_of::<[f32; 3]>() as u64);
        let max_bytes = wgpu::Limits::default().max_buffer_size;
        if buffer_bytes > max_bytes {
            return Err(WavefieldError::InvalidConfig(format!(
                "grid size {} needs a {} byte position buffer, limit is {}",
                self.grid_size, buffer_bytes, max_bytes
            )));
        }
        Ok(())
    }
}

/// Click-seeded ripple tuning
#[derive(Debug, Clone)]
pub struct RippleParams {
    /// Time until a ripple fades out and is removed
    pub lifetime: Duration,

    /// Ring expansion speed (world units per second)
    pub propagation_speed: f32,

    /// Thickness of the band trailing the ring radius (world units)
    pub band_width: f32,

    /// Strength given to click-seeded ripples
    pub default_strength: f32,

    /// Denominator of the Gaussian ring profile: exp(-(d - r)^2 / width)
    pub gaussian_width: f32,

    /// Spatial oscillation of the ring (radians per world unit)
    pub ring_wavenumber: f32,

    /// Temporal oscillation of the ring (radians per second)
    pub ring_angular_speed: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            lifetime: Duration::from_secs(3),
            propagation_speed: 8.0,
            band_width: 2.0,
            default_strength: 0.5,
            gaussian_width: 0.5,
            ring_wavenumber: 2.0,
            ring_angular_speed: 10.0,
        }
    }
}

impl RippleParams {
    pub fn validate(&self) -> Result<()> {
        if self.lifetime.is_zero() {
            return Err(WavefieldError::InvalidConfig(
                "ripple lifetime must be > 0".to_string(),
            ));
        }
        if !(self.propagation_speed > 0.0) {
            return Err(WavefieldError::InvalidConfig(format!(
                "ripple propagation speed must be > 0, got {}",
                self.propagation_speed
            )));
        }
        if !(self.band_width > 0.0) || !(self.gaussian_width > 0.0) {
            return Err(WavefieldError::InvalidConfig(
                "ripple band and gaussian widths must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FieldPhysics::default().validate().is_ok());
        assert!(RippleParams::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_values_rejected() {
        let mut physics = FieldPhysics::default();
        physics.grid_size = 1;
        assert!(physics.validate().is_err());

        let mut physics = FieldPhysics::default();
        physics.grid_spacing = 0.0;
        assert!(physics.validate().is_err());

        let mut ripples = RippleParams::default();
        ripples.lifetime = Duration::ZERO;
        assert!(ripples.validate().is_err());

        let mut ripples = RippleParams::default();
        ripples.propagation_speed = f32::NAN;
        assert!(ripples.validate().is_err());
    }

    #[test]
    fn test_grid_size_bounded_by_buffer_limit() {
        // 4729² points × 12 bytes fits in the default 256 MiB, 4730² does not
        let fits = FieldPhysics {
            grid_size: 4729,
            ..FieldPhysics::default()
        };
        assert!(fits.validate().is_ok());

        let too_big = FieldPhysics {
            grid_size: 4730,
            ..FieldPhysics::default()
        };
        assert!(too_big.validate().is_err());

        let huge = FieldPhysics {
            grid_size: 6000,
            ..FieldPhysics::default()
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_radial_input() {
        assert!((WaveInput::Radial.sample(3.0, 4.0) - 5.0).abs() < 1e-6);
        assert_eq!(WaveInput::Diagonal.sample(1.5, -0.5), 1.0);
    }
}
