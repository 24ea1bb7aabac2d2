//! Camera placement presets for viewing the surface.

/// Slow orbit around the plane centre
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal distance from the orbit centre (world units)
    pub radius: f32,

    /// Height above the plane (world units)
    pub elevation: f32,

    /// Angular speed of the orbit (radians per second)
    pub angular_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 55.0,
            elevation: 30.0,
            angular_speed: 0.1, // One lap every ~63 s
        }
    }
}

/// Stationary camera
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position, relative to the plane centre
    pub position: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 35.0, -45.0], // Above and behind the near edge
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Orbit around the plane centre
    Orbit(OrbitCamera),

    /// Stationary view
    Fixed(FixedCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Orbit(OrbitCamera::default())
    }
}
