//! Ray casting against the invisible ground plane.

use glam::{Mat4, Vec3};

/// Below this, a ray is treated as parallel to the plane
const PARALLEL_EPSILON: f32 = 1e-6;

/// Half-line in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Bounded plane at local `y = 0`, spanning `[-half_extent, half_extent]` on X and Z
///
/// The plane shares the grid's local frame, so a hit expressed in local space
/// lines up with grid point coordinates whatever the enclosing transform is.
#[derive(Debug, Clone)]
pub struct GroundPlane {
    local_to_world: Mat4,
    world_to_local: Mat4,
    half_extent: f32,
}

impl GroundPlane {
    pub fn new(local_to_world: Mat4, extent: f32) -> Self {
        Self {
            local_to_world,
            world_to_local: local_to_world.inverse(),
            half_extent: extent / 2.0,
        }
    }

    pub fn local_to_world(&self) -> Mat4 {
        self.local_to_world
    }

    pub fn world_to_local(&self) -> Mat4 {
        self.world_to_local
    }

    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.world_to_local.transform_point3(world)
    }

    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(local)
    }

    /// World-space point where `ray` crosses the plane, if it does
    ///
    /// Misses when the ray is parallel, points away from the plane, or
    /// crosses outside the plane's extent.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let origin = self.world_to_local.transform_point3(ray.origin);
        let direction = self.world_to_local.transform_vector3(ray.direction);

        if direction.y.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = -origin.y / direction.y;
        if t < 0.0 {
            return None;
        }

        let local_hit = origin + direction * t;
        if local_hit.x.abs() > self.half_extent || local_hit.z.abs() > self.half_extent {
            return None;
        }

        Some(self.local_to_world.transform_point3(local_hit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_down_hit() {
        let plane = GroundPlane::new(Mat4::IDENTITY, 10.0);
        let ray = Ray::new(Vec3::new(1.0, 5.0, -2.0), Vec3::NEG_Y);

        let hit = plane.intersect(&ray).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(1.0, 0.0, -2.0), 1e-6));
    }

    #[test]
    fn test_misses_are_none() {
        let plane = GroundPlane::new(Mat4::IDENTITY, 10.0);

        // Parallel
        assert!(plane.intersect(&Ray::new(Vec3::Y, Vec3::X)).is_none());
        // Pointing away
        assert!(plane.intersect(&Ray::new(Vec3::Y, Vec3::Y)).is_none());
        // Outside extent
        let far = Ray::new(Vec3::new(6.0, 1.0, 0.0), Vec3::NEG_Y);
        assert!(plane.intersect(&far).is_none());
    }

    #[test]
    fn test_tilted_plane_round_trip() {
        let transform = Mat4::from_rotation_x(-0.1) * Mat4::from_scale(Vec3::splat(2.0));
        let plane = GroundPlane::new(transform, 20.0);

        let local = Vec3::new(3.0, 0.0, -4.0);
        let world = plane.to_world(local);
        assert!(plane.to_local(world).abs_diff_eq(local, 1e-5));

        // Cast down onto the tilted plane from above the known point
        let ray = Ray::new(world + Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        let hit = plane.intersect(&ray).unwrap();
        assert!(hit.abs_diff_eq(world, 1e-4));

        let hit_local = plane.to_local(hit);
        assert!(hit_local.y.abs() < 1e-4);
        assert!((hit_local.x - local.x).abs() < 1e-4);
        assert!((hit_local.z - local.z).abs() < 1e-4);
    }
}
