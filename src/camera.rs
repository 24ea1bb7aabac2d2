//! Camera placement around the wave surface.

use glam::{Mat4, Vec3};

use crate::params::{CameraPreset, FixedCamera, OrbitCamera, RenderConfig};

/// Camera system framing a plane centred at `focus`
pub struct CameraSystem {
    preset: CameraPreset,
    focus: Vec3,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self {
            preset,
            focus: Vec3::ZERO,
        }
    }

    /// Look at the centre of a `width` x `depth` plane spanning from the origin
    pub fn frame_plane(&mut self, width: f32, depth: f32) {
        self.focus = Vec3::new(width * 0.5, 0.0, depth * 0.5);
    }

    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Compute camera position and look-at target for given time
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Orbit(params) => self.compute_orbit(params, time_s),
            CameraPreset::Fixed(params) => self.compute_fixed(params),
        }
    }

    fn compute_orbit(&self, p: &OrbitCamera, time_s: f32) -> (Vec3, Vec3) {
        let angle = time_s * p.angular_speed;
        let offset = Vec3::new(angle.sin() * p.radius, p.elevation, -angle.cos() * p.radius);
        (self.focus + offset, self.focus)
    }

    fn compute_fixed(&self, p: &FixedCamera) -> (Vec3, Vec3) {
        (self.focus + Vec3::from_array(p.position), self.focus)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let (eye, target) = self.compute_position_and_target(time_s);

        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        (proj * view, eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_keeps_radius_and_elevation() {
        let params = OrbitCamera::default();
        let mut camera = CameraSystem::new(CameraPreset::Orbit(params.clone()));
        camera.frame_plane(50.0, 50.0);

        for t in 0..50 {
            let (eye, target) = camera.compute_position_and_target(t as f32 * 0.7);
            assert_eq!(target, Vec3::new(25.0, 0.0, 25.0));
            assert!((eye.y - params.elevation).abs() < 1e-4);

            let horizontal = Vec3::new(eye.x - target.x, 0.0, eye.z - target.z).length();
            assert!((horizontal - params.radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_fixed_camera_is_stationary() {
        let camera = CameraSystem::new(CameraPreset::Fixed(FixedCamera::default()));
        let (eye0, _) = camera.compute_position_and_target(0.0);
        let (eye1, _) = camera.compute_position_and_target(10.0);
        assert_eq!(eye0, eye1);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraSystem::new(CameraPreset::default());
        let render_config = RenderConfig::default();

        let (view_proj, eye_pos) = camera.create_view_proj_matrix(0.0, &render_config);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(eye_pos.is_finite());
    }
}
