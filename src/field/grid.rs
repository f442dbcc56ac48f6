//! Point grid with fixed planar layout and a static radial color gradient.

use crate::params::FieldPhysics;

/// N×N lattice of points on the local X/Z plane
///
/// Positions and colors are allocated once. Only the height (`y`) component of
/// each position changes after construction.
pub struct PointGrid {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    grid_size: usize,
    grid_spacing: f32,
    /// Positions changed since the last upload
    dirty: bool,
}

impl PointGrid {
    /// Build the lattice, row-major over X then Z (`index = i * N + j`)
    pub fn new(physics: &FieldPhysics) -> Self {
        let grid_size = physics.grid_size;
        let half = grid_size as f32 / 2.0;
        let point_count = grid_size * grid_size;

        let mut positions = Vec::with_capacity(point_count);
        let mut colors = Vec::with_capacity(point_count);

        for i in 0..grid_size {
            for j in 0..grid_size {
                let x = (i as f32 - half) * physics.grid_spacing;
                let z = (j as f32 - half) * physics.grid_spacing;
                positions.push([x, 0.0, z]);

                // Brighter in the center, darker at the edges
                let di = i as f32 - half;
                let dj = j as f32 - half;
                let normalized_distance = (di * di + dj * dj).sqrt() / half;
                let brightness = brightness_at(normalized_distance, physics);

                colors.push([
                    brightness * physics.tint[0],
                    brightness * physics.tint[1],
                    brightness * physics.tint[2],
                ]);
            }
        }

        Self {
            positions,
            colors,
            grid_size,
            grid_spacing: physics.grid_spacing,
            dirty: true,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn grid_spacing(&self) -> f32 {
        self.grid_spacing
    }

    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    /// Buffer index of lattice cell (i, j)
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.grid_size + j
    }

    pub fn height(&self, index: usize) -> f32 {
        self.positions[index][1]
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether an upload is due
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Radial brightness: 1 at the center, linear falloff, clamped to a floor
pub fn brightness_at(normalized_distance: f32, physics: &FieldPhysics) -> f32 {
    (1.0 - normalized_distance * physics.brightness_falloff).max(physics.brightness_floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_physics(grid_size: usize, grid_spacing: f32) -> FieldPhysics {
        FieldPhysics {
            grid_size,
            grid_spacing,
            ..FieldPhysics::default()
        }
    }

    #[test]
    fn test_point_and_color_counts() {
        for n in [2, 3, 4, 17, 64] {
            let grid = PointGrid::new(&small_physics(n, 0.5));
            assert_eq!(grid.positions.len(), n * n);
            assert_eq!(grid.colors.len(), n * n);
        }
    }

    #[test]
    fn test_layout_is_centered() {
        let grid = PointGrid::new(&small_physics(4, 1.0));

        assert_eq!(grid.positions[grid.index(0, 0)], [-2.0, 0.0, -2.0]);
        assert_eq!(grid.positions[grid.index(3, 1)], [1.0, 0.0, -1.0]);
        assert_eq!(grid.positions[grid.index(2, 2)], [0.0, 0.0, 0.0]);

        // Odd sizes use a fractional half so the lattice stays symmetric
        let grid = PointGrid::new(&small_physics(3, 2.0));
        assert_eq!(grid.positions[grid.index(0, 2)], [-3.0, 0.0, 1.0]);
    }

    #[test]
    fn test_brightness_non_increasing_with_distance() {
        let physics = small_physics(32, 0.25);
        let grid = PointGrid::new(&physics);
        let half = physics.grid_size as f32 / 2.0;

        let mut samples: Vec<(f32, f32)> = (0..physics.grid_size)
            .flat_map(|i| (0..physics.grid_size).map(move |j| (i, j)))
            .map(|(i, j)| {
                let di = i as f32 - half;
                let dj = j as f32 - half;
                let distance = (di * di + dj * dj).sqrt();
                (distance, grid.colors[grid.index(i, j)][0])
            })
            .collect();
        samples.sort_by(|a, b| a.0.total_cmp(&b.0));

        for pair in samples.windows(2) {
            assert!(
                pair[1].1 <= pair[0].1 + 1e-6,
                "brightness rose from {} to {} between distances {} and {}",
                pair[0].1,
                pair[1].1,
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_brightness_floor_and_tint() {
        let physics = FieldPhysics::default();
        assert_eq!(brightness_at(0.0, &physics), 1.0);
        assert_eq!(brightness_at(5.0, &physics), physics.brightness_floor);

        let grid = PointGrid::new(&small_physics(4, 1.0));
        let center = grid.colors[grid.index(2, 2)];
        assert!((center[0] - 0.8).abs() < 1e-6);
        assert!((center[2] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_dirty_flag() {
        let mut grid = PointGrid::new(&small_physics(2, 1.0));
        assert!(grid.take_dirty()); // Initial upload
        assert!(!grid.take_dirty());

        grid.mark_dirty();
        assert!(grid.is_dirty());
        assert!(grid.take_dirty());
    }
}
