//! Rendering and headless-run configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Direction the light travels *from* (normalised in the shader)
    pub light_direction: [f32; 3],

    /// Base water colour (linear RGB)
    pub water_color: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 60.0,
            near_plane: 0.1,
            far_plane: 500.0,
            light_direction: [0.4, 1.0, 0.3],
            water_color: [0.05, 0.32, 0.55],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Windowless run configuration
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Simulated duration (seconds)
    pub duration_secs: f32,

    /// Simulated frame rate (FPS)
    pub fps: u32,
}

impl HeadlessConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            fps: 60,
        }
    }

    /// Total number of ticks to simulate
    pub fn total_frames(&self) -> usize {
        (self.duration_secs.max(0.0) * self.fps as f32).ceil() as usize
    }

    /// Clock value for a given frame
    pub fn frame_time(&self, frame: usize) -> f32 {
        frame as f32 / self.fps.max(1) as f32
    }
}
