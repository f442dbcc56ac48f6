//! Fixed camera framing.

/// Stationary camera looking at the field
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (world units)
    pub position: [f32; 3],

    /// Look-at target (world units)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 8.0], // Above and in front of the grid
            target: [0.0, 0.0, 0.0],
        }
    }
}
