//! Surface driver: owns the mesh and wave field, runs ticks and commands.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SurfaceResult;
use crate::mesh::{build_grid, Mesh};
use crate::params::{GridParams, WaveParams};
use crate::sink::RenderSink;
use crate::wave::WaveField;

/// Whether ticks displace the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Static,
    Animating,
}

impl AnimationState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Static => Self::Animating,
            Self::Animating => Self::Static,
        }
    }
}

/// Discrete user commands, dispatched between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop animating and rebuild a flat mesh
    Reset,
    /// Flip between static and animating
    ToggleWaves,
    /// Resample wave components and rebuild a flat mesh
    RandomizeParameters,
}

/// Animated wave surface with its configuration
pub struct WaveSurface {
    grid: GridParams,
    mesh: Mesh,
    waves: WaveField,
    state: AnimationState,
    rng: StdRng,
}

impl WaveSurface {
    /// Create a surface, seeding wave parameters from `seed` or from entropy
    pub fn new(grid: GridParams, waves: WaveParams, seed: Option<u64>) -> SurfaceResult<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(grid, waves, rng)
    }

    /// Create a surface using the given random source
    pub fn with_rng(grid: GridParams, waves: WaveParams, mut rng: StdRng) -> SurfaceResult<Self> {
        let waves = WaveField::new(waves, &mut rng)?;
        let mesh = build_grid(grid.size(), grid.resolution())?;

        info!(
            "Surface {}x{} at resolution {} ({} vertices, {} waves)",
            grid.width,
            grid.depth,
            grid.resolution(),
            mesh.vertex_count(),
            waves.components().len()
        );

        Ok(Self {
            grid,
            mesh,
            waves,
            state: AnimationState::Static,
            rng,
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn waves(&self) -> &WaveField {
        &self.waves
    }

    pub fn grid(&self) -> &GridParams {
        &self.grid
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == AnimationState::Animating
    }

    /// Push the current mesh buffers to `sink`
    pub fn submit<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.submit(
            self.mesh.positions(),
            self.mesh.indices(),
            self.mesh.normals(),
        );
    }

    /// Advance one frame
    ///
    /// When animating, displaces the mesh for `time_s` and resubmits it.
    ///
    /// # Returns
    /// * `true` if the mesh was updated and submitted
    pub fn tick<S: RenderSink + ?Sized>(&mut self, time_s: f32, sink: &mut S) -> SurfaceResult<bool> {
        if !self.is_animating() {
            return Ok(false);
        }

        self.waves.apply(&mut self.mesh, time_s)?;
        self.submit(sink);
        Ok(true)
    }

    /// Run a discrete command
    pub fn dispatch<S: RenderSink + ?Sized>(
        &mut self,
        command: Command,
        sink: &mut S,
    ) -> SurfaceResult<()> {
        match command {
            Command::Reset => self.reset(sink),
            Command::ToggleWaves => {
                self.toggle_waves();
                Ok(())
            }
            Command::RandomizeParameters => self.randomize_parameters(sink),
        }
    }

    /// Stop animating and restore a flat mesh at the current size and resolution
    pub fn reset<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> SurfaceResult<()> {
        self.state = AnimationState::Static;
        self.rebuild(sink)?;
        info!("Surface reset");
        Ok(())
    }

    pub fn toggle_waves(&mut self) {
        self.state = self.state.toggled();
        info!("Waves {:?}", self.state);
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.state = if animating {
            AnimationState::Animating
        } else {
            AnimationState::Static
        };
    }

    /// Resample wave components from the wide distribution and rebuild
    pub fn randomize_parameters<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> SurfaceResult<()> {
        self.waves.randomize(&mut self.rng);
        self.rebuild(sink)?;
        info!("Wave parameters randomized");
        Ok(())
    }

    /// Resize the plane; the mesh is rebuilt and resubmitted
    ///
    /// On failure the previous size and mesh are kept.
    pub fn set_size<S: RenderSink + ?Sized>(
        &mut self,
        width: f32,
        depth: f32,
        sink: &mut S,
    ) -> SurfaceResult<()> {
        let mut grid = self.grid.clone();
        grid.width = width;
        grid.depth = depth;
        self.replace_grid(grid, sink)
    }

    /// Change the resolution (clamped to the policy range) and rebuild
    pub fn set_resolution<S: RenderSink + ?Sized>(
        &mut self,
        resolution: i64,
        sink: &mut S,
    ) -> SurfaceResult<()> {
        let mut grid = self.grid.clone();
        grid.set_resolution(resolution);
        self.replace_grid(grid, sink)
    }

    /// Resize the wave component set; out-of-range counts leave it unchanged
    pub fn set_wave_count(&mut self, count: usize) -> SurfaceResult<()> {
        self.waves.set_wave_count(count, &mut self.rng)?;
        Ok(())
    }

    pub fn set_wave_speed(&mut self, wave_speed: f32) -> SurfaceResult<()> {
        self.waves.set_wave_speed(wave_speed)?;
        Ok(())
    }

    pub fn set_wave_length(&mut self, wave_length: f32) -> SurfaceResult<()> {
        self.waves.set_wave_length(wave_length)?;
        Ok(())
    }

    fn replace_grid<S: RenderSink + ?Sized>(
        &mut self,
        grid: GridParams,
        sink: &mut S,
    ) -> SurfaceResult<()> {
        let mesh = build_grid(grid.size(), grid.resolution())?;
        self.grid = grid;
        self.install(mesh, sink);
        Ok(())
    }

    fn rebuild<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> SurfaceResult<()> {
        let mesh = build_grid(self.grid.size(), self.grid.resolution())?;
        self.install(mesh, sink);
        Ok(())
    }

    fn install<S: RenderSink + ?Sized>(&mut self, mesh: Mesh, sink: &mut S) {
        debug!(
            "Rebuilt mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.mesh = mesh;
        self.submit(sink);
    }
}
