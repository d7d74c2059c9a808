//! Texture coordinates
//!
//! Base and wall UVs tile a unit square across each pair of corners; cap UVs
//! are a planar XZ projection scaled by the largest top size.

use glam::{Vec2, Vec3};

use super::layout::VertexLayout;
use super::params::PolygonSpec;

pub(super) fn build_uvs(spec: &PolygonSpec, layout: &VertexLayout, vertices: &[Vec3]) -> Vec<Vec2> {
    let corners = layout.corners();
    let sampling = layout.sampling();
    let mut uvs = vec![Vec2::ZERO; layout.vertices_len()];

    uvs[0] = Vec2::splat(0.5);

    // Even corners take the left edge of the square, odd ones the right.
    // With an odd corner count the last pair wraps onto corner 0.
    for corner in (0..corners).step_by(2) {
        let next = (corner + 1) % corners;

        uvs[layout.base_index(0, corner)] = Vec2::new(0.0, 0.0);
        uvs[layout.base_index(0, next)] = Vec2::new(1.0, 0.0);
        uvs[layout.base_index(1, corner)] = Vec2::new(0.0, 1.0);
        uvs[layout.base_index(1, next)] = Vec2::new(1.0, 1.0);
    }

    for corner in (0..corners).step_by(2) {
        let next = (corner + 1) % corners;

        for sample in 0..sampling {
            let ratio = sample as f32 / sampling as f32;
            let next_ratio = ((sample + 1) % sampling) as f32 / sampling as f32;

            uvs[layout.wall_index(0, corner, sample)] = Vec2::new(ratio, ratio);
            uvs[layout.wall_index(0, next, sample)] = Vec2::new(next_ratio, ratio);
            uvs[layout.wall_index(1, corner, sample)] = Vec2::new(ratio, next_ratio);
            uvs[layout.wall_index(1, next, sample)] = Vec2::new(next_ratio, next_ratio);
        }
    }

    let max_size = spec.top_sizes().iter().copied().fold(0.0, f32::max);
    let scale = if max_size > 0.0 { max_size } else { 1.0 };

    for index in layout.cap_start()..layout.vertices_len() {
        let vertex = vertices[index];
        uvs[index] = Vec2::new(vertex.x / scale, vertex.z / scale);
    }

    uvs
}
