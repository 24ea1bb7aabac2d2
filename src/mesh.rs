//! Regular grid mesh: topology construction and normal recalculation.

use glam::{Vec2, Vec3};

use crate::error::MeshError;

/// Triangle mesh with per-vertex normals
///
/// Positions and normals are plain `[f32; 3]` arrays so the render sink can
/// upload them without conversion. Vertex and index counts are fixed at
/// build time; only the y coordinate and the normals change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    normals: Vec<[f32; 3]>,
    resolution: u32,
}

impl Mesh {
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Flat triangle list, three indices per triangle
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Resolution this mesh was built with
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex count implied by the build resolution
    pub fn expected_vertex_count(&self) -> usize {
        let side = self.resolution as usize + 1;
        side * side
    }

    /// Position buffer for in-place height updates
    pub(crate) fn positions_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.positions
    }

    /// Recompute normals by face-normal accumulation
    ///
    /// Each triangle adds its un-normalised face normal (area weighted) to its
    /// three corners; the sums are then normalised. Vertices touched by no
    /// triangle, or only by degenerate ones, get +Y.
    pub fn recalculate_normals(&mut self) {
        self.normals.fill([0.0; 3]);

        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

            let p0 = Vec3::from_array(self.positions[a]);
            let p1 = Vec3::from_array(self.positions[b]);
            let p2 = Vec3::from_array(self.positions[c]);
            let face = (p1 - p0).cross(p2 - p0);

            for i in [a, b, c] {
                let sum = Vec3::from_array(self.normals[i]) + face;
                self.normals[i] = sum.to_array();
            }
        }

        for normal in &mut self.normals {
            *normal = Vec3::from_array(*normal)
                .try_normalize()
                .unwrap_or(Vec3::Y)
                .to_array();
        }
    }

    #[cfg(test)]
    pub(crate) fn normals_mut(&mut self) -> &mut Vec<[f32; 3]> {
        &mut self.normals
    }
}

/// Build a flat grid on the XZ plane
///
/// Vertices are laid out row-major: vertex `row * (resolution + 1) + col`
/// sits at `(col * size.x / resolution, 0, row * size.y / resolution)`.
/// Each cell contributes two triangles sharing its diagonal, wound so every
/// face normal points towards +Y.
///
/// Resolution 0 yields a single vertex at the origin and no triangles.
///
/// # Arguments
/// * `size` - Plane extent: `x` along X, `y` along Z
/// * `resolution` - Subdivisions per side
pub fn build_grid(size: Vec2, resolution: u32) -> Result<Mesh, MeshError> {
    if !size.is_finite() {
        return Err(MeshError::Validation(format!(
            "size must be finite, got {}x{}",
            size.x, size.y
        )));
    }
    if size.x < 0.0 || size.y < 0.0 {
        return Err(MeshError::Validation(format!(
            "size must not be negative, got {}x{}",
            size.x, size.y
        )));
    }

    let side = resolution as u64 + 1;
    if side.checked_mul(side).map_or(true, |n| n > u32::MAX as u64) {
        return Err(MeshError::Validation(format!(
            "resolution {} exceeds the 32-bit index range",
            resolution
        )));
    }

    if resolution == 0 {
        return Ok(Mesh {
            positions: vec![[0.0; 3]],
            indices: Vec::new(),
            normals: vec![Vec3::Y.to_array()],
            resolution,
        });
    }

    let side = resolution as usize + 1;
    let step_x = size.x / resolution as f32;
    let step_z = size.y / resolution as f32;

    let mut positions = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            positions.push([col as f32 * step_x, 0.0, row as f32 * step_z]);
        }
    }

    let r = resolution;
    let mut indices = Vec::with_capacity(r as usize * r as usize * 6);
    for row in 0..r {
        for col in 0..r {
            let i = row * (r + 1) + col;

            indices.extend_from_slice(&[i, i + r + 1, i + r + 2]);
            indices.extend_from_slice(&[i, i + r + 2, i + 1]);
        }
    }

    let mut mesh = Mesh {
        normals: vec![[0.0; 3]; positions.len()],
        positions,
        indices,
        resolution,
    };
    mesh.recalculate_normals();

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        for r in [1u32, 2, 7, 250] {
            let mesh = build_grid(Vec2::new(10.0, 20.0), r).unwrap();
            let side = (r + 1) as usize;

            // (r + 1)^2 vertices, r^2 cells * 2 triangles * 3 indices
            assert_eq!(mesh.vertex_count(), side * side);
            assert_eq!(mesh.indices().len(), 6 * (r * r) as usize);
            assert_eq!(mesh.normals().len(), mesh.vertex_count());
            assert_eq!(mesh.expected_vertex_count(), mesh.vertex_count());
        }
    }

    #[test]
    fn test_corner_vertices() {
        let mesh = build_grid(Vec2::new(8.0, 3.0), 6).unwrap();
        assert_eq!(mesh.positions()[0], [0.0, 0.0, 0.0]);

        let last = mesh.positions()[mesh.vertex_count() - 1];
        assert!((last[0] - 8.0).abs() < 1e-5);
        assert_eq!(last[1], 0.0);
        assert!((last[2] - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_row_major_layout_and_winding() {
        let mesh = build_grid(Vec2::new(4.0, 4.0), 4).unwrap();

        for row in 0..5 {
            for col in 0..5 {
                let i = row * 5 + col;
                assert_eq!(mesh.positions()[i], [col as f32, 0.0, row as f32]);
            }
        }

        assert_eq!(&mesh.indices()[0..6], &[0, 5, 6, 0, 6, 1]);
        // Cell (1, 2) has flat index 6 and starts at vertex 7
        let cell = 6 * 6;
        assert_eq!(&mesh.indices()[cell..cell + 6], &[7, 12, 13, 7, 13, 8]);
    }

    #[test]
    fn test_flat_grid_normals_point_up() {
        let mesh = build_grid(Vec2::new(5.0, 5.0), 3).unwrap();
        for n in mesh.normals() {
            assert!(n[0].abs() < 1e-6 && n[2].abs() < 1e-6);
            assert!((n[1] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_resolution_is_single_vertex() {
        let mesh = build_grid(Vec2::new(50.0, 50.0), 0).unwrap();
        assert_eq!(mesh.positions(), &[[0.0, 0.0, 0.0]]);
        assert!(mesh.indices().is_empty());
        assert_eq!(mesh.normals(), &[[0.0, 1.0, 0.0]]);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_invalid_size_rejected() {
        assert!(matches!(
            build_grid(Vec2::new(-1.0, 5.0), 4),
            Err(MeshError::Validation(_))
        ));
        assert!(matches!(
            build_grid(Vec2::new(5.0, f32::NAN), 4),
            Err(MeshError::Validation(_))
        ));
        assert!(matches!(
            build_grid(Vec2::new(f32::INFINITY, 5.0), 4),
            Err(MeshError::Validation(_))
        ));
    }

    #[test]
    fn test_index_overflow_rejected() {
        assert!(matches!(
            build_grid(Vec2::new(1.0, 1.0), u32::MAX),
            Err(MeshError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_size_grid_is_degenerate_but_valid() {
        let mesh = build_grid(Vec2::ZERO, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 9);
        // Every face is degenerate so normals fall back to +Y
        assert!(mesh.normals().iter().all(|n| *n == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_sloped_grid_normals_tilt() {
        let mut mesh = build_grid(Vec2::new(2.0, 2.0), 2).unwrap();
        // Raise y with x: surface y = x, normal ~ (-1, 1, 0) / sqrt(2)
        for p in mesh.positions_mut() {
            p[1] = p[0];
        }
        mesh.recalculate_normals();

        let s = std::f32::consts::FRAC_1_SQRT_2;
        for n in mesh.normals() {
            assert!((n[0] + s).abs() < 1e-5);
            assert!((n[1] - s).abs() < 1e-5);
            assert!(n[2].abs() < 1e-5);
        }
    }
}
