//! Deterministic base motion: a sum of sinusoidal traveling waves.

use crate::params::FieldPhysics;

/// Height of the ripple-free surface at (x, z) and time `time_s`
pub fn base_height(physics: &FieldPhysics, x: f32, z: f32, time_s: f32) -> f32 {
    let sum: f32 = physics
        .wave_terms
        .iter()
        .map(|term| term.evaluate(x, z, time_s))
        .sum();
    sum * physics.wave_scale
}
