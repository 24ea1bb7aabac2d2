//! Error types for mesh building, wave animation and rendering.

use thiserror::Error;

/// Errors raised while building grid topology
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("invalid grid: {0}")]
    Validation(String),
}

/// Errors raised by wave field configuration and animation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    /// A wave parameter was outside its allowed range
    #[error("wave parameter out of range: {0}")]
    Range(String),

    /// Mesh buffers no longer match the topology they were built with.
    /// The caller skipped a rebuild; retrying will not help.
    #[error("mesh buffers out of sync: {0}")]
    State(String),
}

/// Errors surfaced by the surface driver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Wave(#[from] WaveError),
}

/// Errors raised while setting up the GPU renderer
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
