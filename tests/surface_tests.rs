//! Driver-level tests: build, animate and command flow through a sink.

use glam::Vec2;
use wavegrid::params::{GridParams, WaveParams};
use wavegrid::{build_grid, Command, RenderSink, WaveComponent, WaveField, WaveSurface};

/// Sink that keeps a copy of every submission
#[derive(Default)]
struct RecordingSink {
    frames: Vec<Frame>,
}

struct Frame {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    normals: Vec<[f32; 3]>,
}

impl RenderSink for RecordingSink {
    fn submit(&mut self, positions: &[[f32; 3]], indices: &[u32], normals: &[[f32; 3]]) {
        self.frames.push(Frame {
            positions: positions.to_vec(),
            indices: indices.to_vec(),
            normals: normals.to_vec(),
        });
    }
}

impl RecordingSink {
    fn last(&self) -> &Frame {
        self.frames.last().expect("no submissions")
    }
}

fn small_surface(seed: u64) -> WaveSurface {
    WaveSurface::new(GridParams::new(4.0, 4.0, 4), WaveParams::default(), Some(seed)).unwrap()
}

#[test]
fn test_startup_submission_is_flat_grid() {
    let surface = small_surface(3);
    let mut sink = RecordingSink::default();
    surface.submit(&mut sink);

    let frame = sink.last();
    assert_eq!(frame.positions.len(), 25);
    assert_eq!(frame.indices.len(), 6 * 16);
    assert_eq!(&frame.indices[..6], &[0, 5, 6, 0, 6, 1]);
    assert_eq!(frame.positions[0], [0.0, 0.0, 0.0]);
    assert_eq!(frame.positions[24], [4.0, 0.0, 4.0]);
    assert!(frame.positions.iter().all(|p| p[1] == 0.0));
}

#[test]
fn test_animation_cycle() {
    let mut surface = small_surface(5);
    let mut sink = RecordingSink::default();

    // Static: ticks are no-ops
    for t in 0..3 {
        surface.tick(t as f32, &mut sink).unwrap();
    }
    assert!(sink.frames.is_empty());

    surface.dispatch(Command::ToggleWaves, &mut sink).unwrap();
    surface.tick(0.5, &mut sink).unwrap();
    surface.tick(1.0, &mut sink).unwrap();
    assert_eq!(sink.frames.len(), 2);

    // Topology is stable across animated frames
    assert_eq!(sink.frames[0].indices, sink.frames[1].indices);
    assert_eq!(sink.frames[0].positions.len(), sink.frames[1].positions.len());
    assert_ne!(sink.frames[0].positions, sink.frames[1].positions);

    surface.dispatch(Command::ToggleWaves, &mut sink).unwrap();
    surface.tick(1.5, &mut sink).unwrap();
    assert_eq!(sink.frames.len(), 2);
}

#[test]
fn test_heights_match_wave_sum() {
    let components = vec![
        WaveComponent {
            amplitude: 0.3,
            frequency_x: 0.5,
            frequency_z: 0.2,
            phase_offset: 1.0,
        },
        WaveComponent {
            amplitude: -0.2,
            frequency_x: -0.7,
            frequency_z: 0.9,
            phase_offset: 4.0,
        },
    ];
    let params = WaveParams {
        wave_speed: 1.5,
        wave_length: 3.0,
        wave_count: 2,
    };
    let field = WaveField::with_components(params, components.clone()).unwrap();
    let mut mesh = build_grid(Vec2::new(6.0, 6.0), 6).unwrap();

    let time = 2.25;
    field.apply(&mut mesh, time).unwrap();

    let k = std::f32::consts::TAU / 3.0;
    for p in mesh.positions() {
        let expected: f32 = components
            .iter()
            .map(|c| {
                c.amplitude
                    * (k * (c.frequency_x * p[0] + c.frequency_z * p[2])
                        + 1.5 * time
                        + c.phase_offset)
                        .sin()
            })
            .sum();
        assert!((p[1] - expected).abs() < 1e-5);
    }
}

#[test]
fn test_rebuild_after_resolution_change_resizes_buffers() {
    let mut surface = small_surface(11);
    let mut sink = RecordingSink::default();
    surface.toggle_waves();

    surface.set_resolution(10, &mut sink).unwrap();
    assert_eq!(sink.last().positions.len(), 121);
    assert_eq!(sink.last().normals.len(), 121);

    surface.tick(0.25, &mut sink).unwrap();
    assert_eq!(sink.last().positions.len(), 121);

    surface.set_resolution(0, &mut sink).unwrap();
    surface.tick(0.5, &mut sink).unwrap();
    let frame = sink.last();
    assert_eq!(frame.positions.len(), 1);
    assert!(frame.indices.is_empty());
}

#[test]
fn test_reset_after_randomize_restores_flat_static_surface() {
    let mut surface = small_surface(13);
    let mut sink = RecordingSink::default();

    surface.toggle_waves();
    surface
        .dispatch(Command::RandomizeParameters, &mut sink)
        .unwrap();
    surface.tick(3.0, &mut sink).unwrap();
    assert!(sink.last().positions.iter().any(|p| p[1] != 0.0));

    surface.dispatch(Command::Reset, &mut sink).unwrap();
    assert!(!surface.is_animating());
    assert!(sink.last().positions.iter().all(|p| p[1] == 0.0));
    assert!(sink
        .last()
        .normals
        .iter()
        .all(|n| (n[1] - 1.0).abs() < 1e-6));
    assert_eq!(surface.waves().components().len(), 4);
}

#[test]
fn test_wave_count_edits_between_ticks() {
    let mut surface = small_surface(17);
    let mut sink = RecordingSink::default();
    surface.toggle_waves();

    surface.set_wave_count(10).unwrap();
    surface.tick(1.0, &mut sink).unwrap();
    assert_eq!(surface.waves().components().len(), 10);

    assert!(surface.set_wave_count(1).is_err());
    assert_eq!(surface.waves().components().len(), 10);

    surface
        .dispatch(Command::RandomizeParameters, &mut sink)
        .unwrap();
    assert_eq!(surface.waves().components().len(), 10);
}

#[test]
fn test_invalid_wave_config_rejected_at_startup() {
    let waves = WaveParams {
        wave_count: 1,
        ..WaveParams::default()
    };
    assert!(WaveSurface::new(GridParams::default(), waves, Some(1)).is_err());

    let grid = GridParams::new(f32::NAN, 10.0, 4);
    assert!(WaveSurface::new(grid, WaveParams::default(), Some(1)).is_err());
}
