//! Destinations for finished mesh buffers.

/// Receiver of mesh buffers after every rebuild or animated tick
///
/// Submission is one-way: the sink owns any failure handling. Slices are
/// only valid for the duration of the call.
pub trait RenderSink {
    fn submit(&mut self, positions: &[[f32; 3]], indices: &[u32], normals: &[[f32; 3]]);
}

/// Headless sink that tracks the height range of each submission
#[derive(Debug, Clone, Default)]
pub struct HeightStats {
    /// Number of submissions received
    pub submissions: usize,

    /// Vertex count of the latest submission
    pub vertex_count: usize,

    /// Triangle count of the latest submission
    pub triangle_count: usize,

    /// Lowest vertex height in the latest submission
    pub min_height: f32,

    /// Highest vertex height in the latest submission
    pub max_height: f32,
}

impl HeightStats {
    /// Peak-to-trough height of the latest submission
    pub fn height_range(&self) -> f32 {
        self.max_height - self.min_height
    }
}

impl RenderSink for HeightStats {
    fn submit(&mut self, positions: &[[f32; 3]], indices: &[u32], _normals: &[[f32; 3]]) {
        self.submissions += 1;
        self.vertex_count = positions.len();
        self.triangle_count = indices.len() / 3;

        let (min, max) = positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[1]), hi.max(p[1]))
            });
        (self.min_height, self.max_height) = if positions.is_empty() {
            (0.0, 0.0)
        } else {
            (min, max)
        };
    }
}
