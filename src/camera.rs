use glam::{Mat4, Vec3};

use crate::picking::Ray;

/// A perspective camera looking at a fixed target.
///
/// The default looks down -Z at the origin from 12 units away with a 60°
/// vertical field of view, which frames a board with 3-unit cell spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 12.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 60f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees.to_radians();
        self
    }

    /// Unit vector from the camera towards its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    /// World-to-camera transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Right-handed perspective projection with wgpu's 0..1 depth range.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Builds a picking ray through the given window pixel.
    pub fn ray_from_screen(&self, x: f32, y: f32, width: f32, height: f32) -> Ray {
        Ray::from_screen(
            x,
            y,
            width,
            height,
            self.view_matrix(),
            self.projection_matrix(width / height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_the_board() {
        let camera = Camera::default();
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
        // The origin lands straight ahead in view space.
        let in_view = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((in_view - Vec3::new(0.0, 0.0, -12.0)).length() < 1e-5);
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::default();
        let ray = camera.ray_from_screen(400.0, 300.0, 800.0, 600.0);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!(ray.origin.z < camera.position.z);
    }

    #[test]
    fn screen_y_grows_downwards() {
        let camera = Camera::default();
        let ray = camera.ray_from_screen(400.0, 0.0, 800.0, 600.0);
        assert!(ray.direction.y > 0.0);
    }
}
