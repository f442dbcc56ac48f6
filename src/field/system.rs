//! High-level wave field: point grid, base waves and click-seeded ripples.

use std::time::Duration;

use glam::{Mat4, Vec2, Vec3};

use super::grid::PointGrid;
use super::ripple::{RippleId, RippleSet};
use super::waves::base_height;
use crate::params::{FieldPhysics, RippleParams};
use crate::picking::{GroundPlane, Ray};

/// Wave field owning the grid, the ground plane and the active ripple set
///
/// All mutation happens on the event-loop thread: the frame callback reads
/// ripples, clicks and expiry deadlines write them.
pub struct WaveField {
    pub grid: PointGrid,
    pub physics: FieldPhysics,
    pub ripple_params: RippleParams,
    ripples: RippleSet,
    plane: GroundPlane,
}

impl WaveField {
    /// Create a field with its group tilted by `physics.tilt_x_rad`
    pub fn new(physics: FieldPhysics, ripple_params: RippleParams) -> Self {
        let transform = Mat4::from_rotation_x(physics.tilt_x_rad);
        Self::with_transform(physics, ripple_params, transform)
    }

    /// Create a field under an arbitrary local-to-world transform
    pub fn with_transform(
        physics: FieldPhysics,
        ripple_params: RippleParams,
        local_to_world: Mat4,
    ) -> Self {
        let grid = PointGrid::new(&physics);
        let plane = GroundPlane::new(local_to_world, physics.extent());
        Self {
            grid,
            physics,
            ripple_params,
            ripples: RippleSet::new(),
            plane,
        }
    }

    /// Model matrix for rendering the grid
    pub fn model_matrix(&self) -> Mat4 {
        self.plane.local_to_world()
    }

    pub fn plane(&self) -> &GroundPlane {
        &self.plane
    }

    pub fn ripples(&self) -> &RippleSet {
        &self.ripples
    }

    /// Recompute every point height for field time `now`
    ///
    /// O(points × active ripples). Writes in place and marks the grid dirty.
    pub fn update(&mut self, now: Duration) {
        for position in &mut self.grid.positions {
            position[1] = point_height(
                &self.physics,
                &self.ripple_params,
                &self.ripples,
                position[0],
                position[2],
                now,
            );
        }

        self.grid.mark_dirty();
        log::trace!(
            "Field updated at {:.3}s with {} ripples",
            now.as_secs_f32(),
            self.ripples.len()
        );
    }

    /// Height the update would assign to local point (x, z) at `now`
    pub fn height_at(&self, x: f32, z: f32, now: Duration) -> f32 {
        point_height(&self.physics, &self.ripple_params, &self.ripples, x, z, now)
    }

    /// Cast `ray` at the ground plane and seed a ripple where it lands
    ///
    /// A miss leaves the ripple set untouched.
    pub fn seed_from_ray(&mut self, ray: &Ray, now: Duration) -> Option<RippleId> {
        let hit = self.plane.intersect(ray)?;
        Some(self.seed_at_world(hit, now))
    }

    /// Seed a ripple at a world-space point on the plane
    pub fn seed_at_world(&mut self, world_hit: Vec3, now: Duration) -> RippleId {
        let local = self.plane.to_local(world_hit);
        self.seed_at_local(Vec2::new(local.x, local.z), now)
    }

    /// Seed a ripple at grid-local plane coordinates
    pub fn seed_at_local(&mut self, origin: Vec2, now: Duration) -> RippleId {
        let id = self.ripples.spawn(
            origin,
            now,
            self.ripple_params.default_strength,
            self.ripple_params.lifetime,
        );
        log::debug!(
            "Ripple {:?} seeded at ({:.2}, {:.2}), {} active",
            id,
            origin.x,
            origin.y,
            self.ripples.len()
        );
        id
    }

    /// Run expiries due at `now`, returning how many ripples were removed
    pub fn expire_due(&mut self, now: Duration) -> usize {
        self.ripples.expire_due(now)
    }

    /// Earliest pending ripple expiry
    pub fn next_expiry(&self) -> Option<Duration> {
        self.ripples.next_deadline()
    }

    /// Drop all ripples and pending expiries
    pub fn reset(&mut self) {
        self.ripples.clear();
    }
}

/// Base waves plus every active ripple at local point (x, z)
fn point_height(
    physics: &FieldPhysics,
    ripple_params: &RippleParams,
    ripples: &RippleSet,
    x: f32,
    z: f32,
    now: Duration,
) -> f32 {
    let ripple_height: f32 = ripples
        .iter()
        .map(|ripple| ripple.contribution(x, z, now, ripple_params))
        .sum();
    base_height(physics, x, z, now.as_secs_f32()) + ripple_height
}
