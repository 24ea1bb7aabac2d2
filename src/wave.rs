//! Sum-of-sines wave field that displaces grid vertex heights.

use std::f32::consts::TAU;

use log::debug;
use rand::Rng;

use crate::error::WaveError;
use crate::mesh::Mesh;
use crate::params::{validate_wave_count, validate_wave_length, WaveParams};

/// One travelling sine term of the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    /// Peak height contribution (world units, may be negative after randomize)
    pub amplitude: f32,

    /// Spatial frequency multiplier along X
    pub frequency_x: f32,

    /// Spatial frequency multiplier along Z
    pub frequency_z: f32,

    /// Phase offset (radians, [0, 2π))
    pub phase_offset: f32,
}

impl WaveComponent {
    /// Small positive waves used for the initial parameter set
    pub fn calm<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            amplitude: rng.gen_range(0.1..=0.5),
            frequency_x: rng.gen_range(0.2..=0.8),
            frequency_z: rng.gen_range(0.2..=0.8),
            phase_offset: rng.gen_range(0.0..TAU),
        }
    }

    /// Wide signed ranges; negative values invert phase or direction
    pub fn wild<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            amplitude: rng.gen_range(-1.0..=1.0),
            frequency_x: rng.gen_range(-1.0..=1.0),
            frequency_z: rng.gen_range(-1.0..=1.0),
            phase_offset: rng.gen_range(0.0..TAU),
        }
    }

    /// Height contribution at (x, z) given wave number `k` and time phase
    #[inline]
    pub fn height(&self, k: f32, time_phase: f32, x: f32, z: f32) -> f32 {
        self.amplitude
            * (k * (self.frequency_x * x + self.frequency_z * z) + time_phase + self.phase_offset)
                .sin()
    }
}

/// Generate `count` calm components
pub fn initialize<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<WaveComponent>, WaveError> {
    validate_wave_count(count)?;
    Ok((0..count).map(|_| WaveComponent::calm(rng)).collect())
}

/// Resample every component in place from the wide signed distribution
pub fn randomize<R: Rng + ?Sized>(components: &mut [WaveComponent], rng: &mut R) {
    for component in components.iter_mut() {
        *component = WaveComponent::wild(rng);
    }
}

/// Total surface height at (x, z)
pub fn surface_height(components: &[WaveComponent], k: f32, time_phase: f32, x: f32, z: f32) -> f32 {
    components
        .iter()
        .map(|c| c.height(k, time_phase, x, z))
        .sum()
}

/// Displace mesh heights for time `time_s` and recompute normals
///
/// Heights are recomputed from the planar (x, z) coordinates every call, so
/// the result depends only on the inputs and never on earlier frames. Buffers
/// are updated in place.
///
/// # Errors
/// `WaveError::State` if the mesh buffers no longer match its build topology.
pub fn apply(
    mesh: &mut Mesh,
    components: &[WaveComponent],
    params: &WaveParams,
    time_s: f32,
) -> Result<(), WaveError> {
    let expected = mesh.expected_vertex_count();
    if mesh.vertex_count() != expected || mesh.normals().len() != expected {
        return Err(WaveError::State(format!(
            "expected {} vertices for resolution {}, found {} positions and {} normals",
            expected,
            mesh.resolution(),
            mesh.vertex_count(),
            mesh.normals().len()
        )));
    }

    let k = params.wave_number();
    let time_phase = params.wave_speed * time_s;

    for position in mesh.positions_mut() {
        position[1] = surface_height(components, k, time_phase, position[0], position[2]);
    }

    mesh.recalculate_normals();
    Ok(())
}

/// Wave parameters together with the component set they size
#[derive(Debug, Clone)]
pub struct WaveField {
    params: WaveParams,
    components: Vec<WaveComponent>,
}

impl WaveField {
    /// Create a field with calm initial components
    pub fn new<R: Rng + ?Sized>(params: WaveParams, rng: &mut R) -> Result<Self, WaveError> {
        params.validate()?;
        let components = initialize(params.wave_count, rng)?;
        Ok(Self { params, components })
    }

    /// Create a field from explicit components
    pub fn with_components(
        params: WaveParams,
        components: Vec<WaveComponent>,
    ) -> Result<Self, WaveError> {
        params.validate()?;
        if components.len() != params.wave_count {
            return Err(WaveError::Range(format!(
                "{} components supplied for wave count {}",
                components.len(),
                params.wave_count
            )));
        }
        Ok(Self { params, components })
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn components(&self) -> &[WaveComponent] {
        &self.components
    }

    /// Resample all components from the wide signed distribution
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        randomize(&mut self.components, rng);
        debug!("Randomized {} wave components", self.components.len());
    }

    /// Replace all components with a fresh calm set
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.components = (0..self.params.wave_count)
            .map(|_| WaveComponent::calm(rng))
            .collect();
    }

    /// Resize the component set
    ///
    /// Entries past the new count are dropped; new entries are calm. On error
    /// the field is left untouched.
    pub fn set_wave_count<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), WaveError> {
        validate_wave_count(count)?;

        self.components.truncate(count);
        while self.components.len() < count {
            self.components.push(WaveComponent::calm(rng));
        }
        self.params.wave_count = count;

        debug!("Wave count set to {}", count);
        Ok(())
    }

    pub fn set_wave_speed(&mut self, wave_speed: f32) -> Result<(), WaveError> {
        if !wave_speed.is_finite() {
            return Err(WaveError::Range(format!(
                "wave speed must be finite, got {}",
                wave_speed
            )));
        }
        self.params.wave_speed = wave_speed;
        Ok(())
    }

    pub fn set_wave_length(&mut self, wave_length: f32) -> Result<(), WaveError> {
        validate_wave_length(wave_length)?;
        self.params.wave_length = wave_length;
        Ok(())
    }

    /// Displace `mesh` for time `time_s`
    pub fn apply(&self, mesh: &mut Mesh, time_s: f32) -> Result<(), WaveError> {
        apply(mesh, &self.components, &self.params, time_s)
    }
}
