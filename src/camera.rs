//! Fixed perspective camera and pointer-to-ray conversion.

use glam::{Mat4, Vec2, Vec3};

use crate::params::{FixedCamera, RenderConfig};
use crate::picking::Ray;

/// Stationary camera with a perspective projection
pub struct CameraSystem {
    params: FixedCamera,
    fov_degrees: f32,
    near_plane: f32,
    far_plane: f32,
    aspect_ratio: f32,
}

impl CameraSystem {
    pub fn new(params: FixedCamera, render_config: &RenderConfig) -> Self {
        Self {
            params,
            fov_degrees: render_config.fov_degrees,
            near_plane: render_config.near_plane,
            far_plane: render_config.far_plane,
            aspect_ratio: render_config.aspect_ratio(),
        }
    }

    /// Follow a surface resize (zero-sized windows keep the previous aspect)
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.params.position)
    }

    pub fn view_matrix(&self) -> Mat4 {
        // Y stays up (camera never rolls)
        Mat4::look_at_rh(self.eye(), Vec3::from_array(self.params.target), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates
    ///
    /// `ndc` spans -1..1 on both axes with +Y up.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.view_proj_matrix().inverse();
        let far_point = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let eye = self.eye();
        Ray::new(eye, far_point - eye)
    }

    /// World-space ray through a pixel of a `width`×`height` surface
    pub fn ray_from_pixel(&self, x: f64, y: f64, width: u32, height: u32) -> Ray {
        self.ray_from_ndc(pixel_to_ndc(x, y, width, height))
    }
}

/// Pixel position (origin top-left) to normalized device coordinates
pub fn pixel_to_ndc(x: f64, y: f64, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (2.0 * x / width as f64 - 1.0) as f32,
        (1.0 - 2.0 * y / height as f64) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picking::GroundPlane;

    fn default_camera() -> CameraSystem {
        CameraSystem::new(FixedCamera::default(), &RenderConfig::default())
    }

    #[test]
    fn test_pixel_to_ndc() {
        assert_eq!(pixel_to_ndc(640.0, 360.0, 1280, 720), Vec2::ZERO);
        assert_eq!(pixel_to_ndc(0.0, 0.0, 1280, 720), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(1280.0, 720.0, 1280, 720), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = default_camera();
        let ray = camera.ray_from_ndc(Vec2::ZERO);

        assert!(ray.origin.abs_diff_eq(Vec3::new(0.0, 5.0, 8.0), 1e-6));
        let expected = (Vec3::ZERO - ray.origin).normalize();
        assert!(ray.direction.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_center_click_hits_plane_near_origin() {
        let camera = default_camera();
        let plane = GroundPlane::new(Mat4::IDENTITY, 62.5);

        let hit = plane.intersect(&camera.ray_from_ndc(Vec2::ZERO)).unwrap();
        assert!(hit.length() < 1e-2);
    }

    #[test]
    fn test_top_of_screen_misses_plane() {
        // Upper edge only reaches the ground far outside the plane
        let camera = default_camera();
        let plane = GroundPlane::new(Mat4::IDENTITY, 62.5);

        assert!(plane.intersect(&camera.ray_from_ndc(Vec2::new(0.0, 1.0))).is_none());
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let mut camera = default_camera();
        let view_proj = camera.view_proj_matrix();

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);

        camera.set_viewport(0, 0);
        assert_eq!(camera.view_proj_matrix(), view_proj);

        camera.set_viewport(800, 800);
        assert_ne!(camera.view_proj_matrix(), view_proj);
    }
}
