//! Wavegrid library - procedural grid mesh with sum-of-sines animation

pub mod camera;
pub mod cli;
pub mod error;
pub mod mesh;
pub mod params;
pub mod rendering;
pub mod sink;
pub mod surface;
pub mod wave;

pub use error::{MeshError, RenderError, SurfaceError, WaveError};
pub use mesh::{build_grid, Mesh};
pub use sink::{HeightStats, RenderSink};
pub use surface::{AnimationState, Command, WaveSurface};
pub use wave::{WaveComponent, WaveField};
