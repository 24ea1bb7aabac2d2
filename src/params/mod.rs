//! Parameter definitions with units and documented semantics.
//!
//! All tunable numbers live here with:
//! - Units (world units, seconds, radians)
//! - Documented ranges and the policy that enforces them
//! - Defaults for a 50 x 50 plane with four calm waves

mod camera;
mod grid;
mod render;
mod wave;

// Re-export all types
pub use camera::{CameraPreset, FixedCamera, OrbitCamera};
pub use grid::{GridParams, MAX_RESOLUTION};
pub use render::{HeadlessConfig, RenderConfig};
pub use wave::{validate_wave_count, validate_wave_length, WaveParams, WAVE_COUNT_RANGE};
