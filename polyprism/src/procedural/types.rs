//! Generated mesh output

use glam::{Vec2, Vec3};

/// Result of one generation pass
///
/// `vertices` and `uvs` are index-aligned. Each entry of `bands` is a
/// triangle list (three indices per triangle) meant to be drawn with its own
/// material:
/// - `bands[0]`: base fan and wall-base quads
/// - `bands[1]`: upper wall quads, plus the whole cap when no thresholds are set
/// - `bands[2 + i]`: cap triangles in threshold bucket `i`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedMesh {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Texture coordinates, one per vertex
    pub uvs: Vec<Vec2>,
    /// Triangle indices per material band
    pub bands: Vec<Vec<u32>>,
}

impl GeneratedMesh {
    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get band count
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Get triangle count across every band
    pub fn triangle_count(&self) -> usize {
        self.bands.iter().map(|band| band.len() / 3).sum()
    }

    /// Triangles of one band (empty if the band does not exist)
    pub fn band_triangles(&self, band: usize) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.bands
            .get(band)
            .into_iter()
            .flat_map(|indices| indices.chunks_exact(3))
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Triangles of every band, in band order
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.bands
            .iter()
            .flat_map(|indices| indices.chunks_exact(3))
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Unit face normal for each triangle of one band
    ///
    /// Degenerate (zero-area) triangles yield `Vec3::ZERO`.
    pub fn face_normals(&self, band: usize) -> Vec<Vec3> {
        self.band_triangles(band)
            .map(|tri| self.face_normal(tri))
            .collect()
    }

    /// Per-vertex normals from the faces that use each vertex
    ///
    /// Sums the unit normals of every triangle referencing a vertex and
    /// normalizes the result. No welding: vertices sharing a position keep
    /// separate normals. Vertices without a usable face point up.
    pub fn recalculate_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.triangles() {
            let normal = self.face_normal(tri);
            for index in tri {
                normals[index as usize] += normal;
            }
        }

        normals
            .into_iter()
            .map(|normal| {
                let normal = normal.normalize_or_zero();
                if normal == Vec3::ZERO { Vec3::Y } else { normal }
            })
            .collect()
    }

    fn face_normal(&self, [i0, i1, i2]: [u32; 3]) -> Vec3 {
        let p0 = self.vertices[i0 as usize];
        let p1 = self.vertices[i1 as usize];
        let p2 = self.vertices[i2 as usize];

        (p1 - p0).cross(p2 - p0).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single upward-facing triangle plus an unused vertex
    fn single_triangle() -> GeneratedMesh {
        GeneratedMesh {
            vertices: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(5.0, 5.0, 5.0),
            ],
            uvs: vec![Vec2::ZERO; 4],
            bands: vec![vec![], vec![0, 1, 2]],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.band_count(), 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.band_triangles(0).count(), 0);
        assert_eq!(mesh.band_triangles(7).count(), 0);
        assert_eq!(mesh.triangles().next(), Some([0, 1, 2]));
    }

    #[test]
    fn test_face_normal_winding() {
        let mesh = single_triangle();
        let normals = mesh.face_normals(1);
        assert_eq!(normals.len(), 1);
        assert!((normals[0] - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_face_normal_is_zero() {
        let mesh = GeneratedMesh {
            vertices: vec![Vec3::ONE; 3],
            uvs: vec![Vec2::ZERO; 3],
            bands: vec![vec![0, 1, 2]],
        };
        assert_eq!(mesh.face_normals(0), vec![Vec3::ZERO]);
    }

    #[test]
    fn test_vertex_normals_fall_back_to_up() {
        let mesh = single_triangle();
        let normals = mesh.recalculate_normals();
        assert_eq!(normals.len(), 4);
        assert_eq!(normals[3], Vec3::Y);
        for normal in &normals[..3] {
            assert!((normal.length() - 1.0).abs() < 1e-6);
        }
    }
}
