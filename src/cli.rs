//! Command-line argument parsing.

use clap::Parser;

use crate::params::{
    CameraPreset, FixedCamera, GridParams, HeadlessConfig, OrbitCamera, WaveParams,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavegrid")]
#[command(about = "Procedural grid mesh animated by summed sine waves", long_about = None)]
pub struct Args {
    /// Plane width along X (world units)
    #[arg(long, value_name = "UNITS", default_value = "50")]
    pub width: f32,

    /// Plane depth along Z (world units)
    #[arg(long, value_name = "UNITS", default_value = "50")]
    pub depth: f32,

    /// Subdivisions per side (clamped to 0..=250)
    #[arg(long, value_name = "N", default_value = "250", allow_negative_numbers = true)]
    pub resolution: i64,

    /// Wave phase speed (radians per second)
    #[arg(long, value_name = "RAD_PER_S", default_value = "1", allow_negative_numbers = true)]
    pub wave_speed: f32,

    /// Base wavelength (world units)
    #[arg(long, value_name = "UNITS", default_value = "5", allow_negative_numbers = true)]
    pub wave_length: f32,

    /// Number of summed waves (2-10)
    #[arg(long, value_name = "N", default_value = "4")]
    pub wave_count: usize,

    /// Seed for wave parameters (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with waves animating
    #[arg(long)]
    pub animate: bool,

    /// Camera preset: orbit (default), fixed
    #[arg(long, value_name = "PRESET", default_value = "orbit")]
    pub camera_preset: String,

    /// Run without a window for the given duration (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub headless: Option<f32>,

    /// Simulated frame rate for headless runs
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: u32,
}

impl Args {
    /// Grid parameters with the resolution policy applied
    pub fn grid_params(&self) -> GridParams {
        GridParams::new(self.width, self.depth, self.resolution)
    }

    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            wave_speed: self.wave_speed,
            wave_length: self.wave_length,
            wave_count: self.wave_count,
        }
    }

    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "orbit" => CameraPreset::Orbit(OrbitCamera::default()),
            "fixed" => CameraPreset::Fixed(FixedCamera::default()),
            other => {
                log::warn!("Unknown camera preset '{}', using orbit", other);
                CameraPreset::Orbit(OrbitCamera::default())
            }
        }
    }

    /// Headless configuration if headless mode is enabled
    pub fn headless_config(&self) -> Option<HeadlessConfig> {
        self.headless.map(|duration| {
            let mut config = HeadlessConfig::new(duration);
            config.fps = self.fps.max(1);
            config
        })
    }
}
