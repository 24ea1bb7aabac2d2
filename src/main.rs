//! Wavegrid - a procedural grid surface animated by summed sine waves
//!
//! Space toggles the waves, R resets the surface, N randomizes the wave
//! parameters, Up/Down change the resolution and ] / [ the wave count.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavegrid::camera::CameraSystem;
use wavegrid::cli::Args;
use wavegrid::params::{HeadlessConfig, RenderConfig};
use wavegrid::rendering::{RenderSystem, Uniforms};
use wavegrid::{Command, HeightStats, SurfaceError, WaveSurface};

/// Resolution change per Up/Down key press
const RESOLUTION_STEP: i64 = 10;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    surface: WaveSurface,
    camera: CameraSystem,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(surface: WaveSurface, mut camera: CameraSystem) -> Self {
        let grid = surface.grid();
        camera.frame_plane(grid.width, grid.depth);

        Self {
            window: None,
            render_system: None,
            surface,
            camera,
            render_config: RenderConfig::default(),
            start_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Wavegrid")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        // The renderer is created from the startup mesh
        let render_system =
            match pollster::block_on(RenderSystem::new(Arc::clone(&window), self.surface.mesh())) {
                Ok(render_system) => render_system,
                Err(e) => {
                    error!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

        let size = window.inner_size();
        self.render_config.window_width = size.width;
        self.render_config.window_height = size.height;

        info!("Wavegrid is running (Space: waves, R: reset, N: randomize, Esc: quit)");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.render_config.window_width = size.width;
                self.render_config.window_height = size.height;
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else if let Err(e) = self.handle_key(code) {
                    warn!("Command rejected: {}", e);
                }
            }
            WindowEvent::RedrawRequested => {
                if !self.render_frame() {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

impl App {
    /// Map a key press onto a surface command or configuration edit
    fn handle_key(&mut self, code: KeyCode) -> Result<(), SurfaceError> {
        let Some(render_system) = self.render_system.as_mut() else {
            return Ok(());
        };
        let surface = &mut self.surface;

        match code {
            KeyCode::Space => surface.dispatch(Command::ToggleWaves, render_system),
            KeyCode::KeyR => surface.dispatch(Command::Reset, render_system),
            KeyCode::KeyN => surface.dispatch(Command::RandomizeParameters, render_system),
            KeyCode::ArrowUp | KeyCode::ArrowDown => {
                let step = if code == KeyCode::ArrowUp {
                    RESOLUTION_STEP
                } else {
                    -RESOLUTION_STEP
                };
                let resolution = surface.grid().resolution() as i64 + step;
                surface.set_resolution(resolution, render_system)?;
                info!("Resolution {}", surface.grid().resolution());
                Ok(())
            }
            KeyCode::BracketRight | KeyCode::BracketLeft => {
                let count = surface.waves().components().len();
                let count = if code == KeyCode::BracketRight {
                    count + 1
                } else {
                    count.saturating_sub(1)
                };
                surface.set_wave_count(count)?;
                info!("Wave count {}", count);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Advance and render a single frame; returns false on a fatal error
    fn render_frame(&mut self) -> bool {
        let Some(render_system) = self.render_system.as_mut() else {
            return true;
        };

        let time_s = self.start_time.elapsed().as_secs_f32();

        if let Err(e) = self.surface.tick(time_s, render_system) {
            error!("Surface update failed: {}", e);
            return false;
        }

        let (view_proj, eye) = self.camera.create_view_proj_matrix(time_s, &self.render_config);
        render_system.update_uniforms(&Uniforms::new(view_proj, eye, &self.render_config));

        match render_system.render() {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Render error: out of memory");
                false
            }
            Err(e) => {
                warn!("Render error: {:?}", e);
                true
            }
        }
    }
}

/// Drive the surface at a fixed frame rate without a window
fn run_headless(mut surface: WaveSurface, config: &HeadlessConfig) -> Result<(), SurfaceError> {
    let mut stats = HeightStats::default();
    surface.submit(&mut stats);
    surface.set_animating(true);

    let total = config.total_frames();
    info!(
        "Headless run: {} frames at {} fps ({} vertices)",
        total,
        config.fps,
        stats.vertex_count
    );

    for frame in 0..total {
        let time_s = config.frame_time(frame);
        surface.tick(time_s, &mut stats)?;

        if frame % config.fps.max(1) as usize == 0 {
            info!(
                "t={:6.2}s  height [{:+.3}, {:+.3}]  range {:.3}",
                time_s,
                stats.min_height,
                stats.max_height,
                stats.height_range()
            );
        }
    }

    info!("Headless run finished after {} submissions", stats.submissions);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut surface = match WaveSurface::new(args.grid_params(), args.wave_params(), args.seed) {
        Ok(surface) => surface,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(config) = args.headless_config() {
        if let Err(e) = run_headless(surface, &config) {
            error!("Headless run failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    surface.set_animating(args.animate);
    let camera = CameraSystem::new(args.parse_camera_preset());
    let mut app = App::new(surface, camera);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Event loop error: {}", e);
    }
}
