//! Rim corners and the sampled side wall

use glam::Vec3;

use super::layout::VertexLayout;
use super::params::{PolygonSpec, lerp};

/// Angle nudge applied to floret flank corners, in degrees
pub const FLORET_FLANK_OFFSET_DEG: f32 = 0.85;

/// Base and top rim corners, both on the y = 0 plane
pub(super) struct Rims {
    pub base: Vec<Vec3>,
    pub top: Vec<Vec3>,
}

/// Compute the base and top rim corner for every effective corner
pub(super) fn build_rims(spec: &PolygonSpec) -> Rims {
    let corners = spec.effective_corner_count();
    let mut base = Vec::with_capacity(corners);
    let mut top = Vec::with_capacity(corners);

    for corner in 0..corners {
        let (direction, factor) = corner_direction(spec, corner);
        base.push(spec.base_sizes()[corner] * factor * direction);
        top.push(spec.top_sizes()[corner] * factor * direction);
    }

    Rims { base, top }
}

/// Horizontal unit direction and radius factor for one corner
///
/// In floret mode every third corner is pulled inward by the floret factor
/// and the two flanks between them lean toward/away from it.
fn corner_direction(spec: &PolygonSpec, corner: usize) -> (Vec3, f32) {
    let mut angle = spec.summit_angles()[corner];
    let mut factor = 1.0;

    if spec.is_floret() {
        match corner % 3 {
            0 => factor -= spec.floret_factor(),
            1 => angle -= FLORET_FLANK_OFFSET_DEG.to_radians(),
            _ => angle += FLORET_FLANK_OFFSET_DEG.to_radians(),
        }
    }

    (Vec3::new(angle.cos(), 0.0, angle.sin()), factor)
}

/// Write the base region and the wall samples
///
/// Each wall sample produces a cut-rim vertex at `h - cut_off` and an upper
/// rim vertex at `h`, sharing the horizontal position found by sliding along
/// the base→top rim segment by the sample's cut ratio.
pub(super) fn write_wall(
    spec: &PolygonSpec,
    layout: &VertexLayout,
    rims: &Rims,
    vertices: &mut [Vec3],
) {
    let corners = layout.corners();
    let sampling = layout.sampling();
    let heights = spec.poly_heights();
    let cut_off = spec.cut_off();

    vertices[0] = Vec3::ZERO;
    for corner in 0..corners {
        vertices[layout.base_index(0, corner)] = rims.base[corner];
    }

    for corner in 0..corners {
        let next = (corner + 1) % corners;

        for sample in 0..sampling {
            let ratio = sample as f32 / sampling as f32;

            let height = lerp(heights[corner], heights[next], ratio);
            let cut_ratio = if height != 0.0 {
                (height - cut_off) / height
            } else {
                1.0
            };

            let from = rims.base[corner].lerp(rims.top[corner], cut_ratio);
            let to = rims.base[next].lerp(rims.top[next], cut_ratio);
            let point = from.lerp(to, ratio);

            vertices[layout.wall_index(0, corner, sample)] =
                Vec3::new(point.x, height - cut_off, point.z);
            vertices[layout.wall_index(1, corner, sample)] = Vec3::new(point.x, height, point.z);
        }

        // The top rim corner closes the wall-base quad at the cut rim
        vertices[layout.base_index(1, corner)] = vertices[layout.wall_index(0, corner, 0)];
    }
}
