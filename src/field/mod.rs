//! Procedural wave field: a point grid displaced by traveling waves and ripples.

mod grid;
mod ripple;
mod system;
mod waves;

// Re-export public types
pub use grid::{brightness_at, PointGrid};
pub use ripple::{Ripple, RippleId, RippleSet};
pub use system::WaveField;
pub use waves::base_height;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FieldPhysics;

    #[test]
    fn test_point_grid_creation() {
        let physics = FieldPhysics::default();
        let grid = PointGrid::new(&physics);

        // One point and one color per lattice cell
        assert_eq!(grid.point_count(), physics.grid_size.pow(2));
        assert_eq!(grid.colors.len(), physics.grid_size.pow(2));
    }
}
