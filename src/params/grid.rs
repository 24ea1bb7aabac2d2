//! Grid plane dimensions and resolution policy.

use glam::Vec2;

/// Largest resolution the configuration layer will hand to the mesh builder
pub const MAX_RESOLUTION: u32 = 250;

/// Plane size and subdivision count
#[derive(Debug, Clone, PartialEq)]
pub struct GridParams {
    /// Plane extent along X (world units)
    pub width: f32,

    /// Plane extent along Z (world units)
    pub depth: f32,

    /// Subdivisions per side, always within [0, MAX_RESOLUTION]
    resolution: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: 50.0,
            depth: 50.0,
            resolution: MAX_RESOLUTION, // 63,001 vertices
        }
    }
}

impl GridParams {
    /// Create grid parameters, clamping `resolution` into [0, MAX_RESOLUTION]
    pub fn new(width: f32, depth: f32, resolution: i64) -> Self {
        Self {
            width,
            depth,
            resolution: clamp_resolution(resolution),
        }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Replace the resolution, applying the clamp policy
    pub fn set_resolution(&mut self, resolution: i64) {
        self.resolution = clamp_resolution(resolution);
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.depth)
    }

    /// Vertex count a build with these parameters produces
    pub fn vertex_count(&self) -> usize {
        let side = self.resolution as usize + 1;
        side * side
    }
}

fn clamp_resolution(resolution: i64) -> u32 {
    resolution.clamp(0, MAX_RESOLUTION as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_clamped_to_policy_range() {
        assert_eq!(GridParams::new(1.0, 1.0, 1000).resolution(), MAX_RESOLUTION);
        assert_eq!(GridParams::new(1.0, 1.0, -5).resolution(), 0);
        assert_eq!(GridParams::new(1.0, 1.0, 42).resolution(), 42);

        let mut params = GridParams::default();
        params.set_resolution(251);
        assert_eq!(params.resolution(), 250);
    }

    #[test]
    fn test_vertex_count() {
        let params = GridParams::new(4.0, 4.0, 4);
        assert_eq!(params.vertex_count(), 25);
        assert_eq!(GridParams::new(4.0, 4.0, 0).vertex_count(), 1);
    }
}
