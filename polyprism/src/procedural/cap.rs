//! Domed / creased cap rings

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use super::layout::VertexLayout;
use super::params::{PolygonSpec, lerp, lerp3};

/// Curve exponent at `slope == 0` when curving is enabled
///
/// Slope -1 maps to exponent 0 (creased, lateral height everywhere) and
/// slope 1 to a full turn (`TAU`, a smooth dome).
pub const LINE_CURVE_POWER: f32 = 0.5645;

/// Write the cap rings from the outer top rim down to the apex
///
/// Ring `k` scales the top rim by `k / sampling` and samples each edge `k`
/// times, so the inner rings shrink by one sample per edge until the apex.
pub(super) fn write_cap(
    spec: &PolygonSpec,
    layout: &VertexLayout,
    top_rim: &[Vec3],
    vertices: &mut [Vec3],
) {
    let corners = layout.corners();
    let sampling = layout.sampling();
    let heights = spec.poly_heights();
    let center_height = spec.center_height();
    let curve_power = lerp3(0.0, LINE_CURVE_POWER, TAU, spec.slope());

    vertices[layout.apex_index()] = Vec3::new(0.0, center_height, 0.0);

    for ring in (1..=sampling).rev() {
        let ring_ratio = ring as f32 / sampling as f32;

        for corner in 0..corners {
            let next = (corner + 1) % corners;

            for sample in 0..ring {
                let sample_ratio = sample as f32 / ring as f32;

                let lateral = ring_ratio * lerp(heights[corner], heights[next], sample_ratio);
                let longitudinal = (1.0 - ring_ratio) * center_height;

                let height = if spec.curving() {
                    let curve_factor =
                        (1.0 - ((1.0 - ring_ratio) * FRAC_PI_2).sin()).powf(curve_power);
                    lerp(center_height, lateral, curve_factor)
                } else {
                    lateral + longitudinal
                };

                let point = ring_ratio * top_rim[corner].lerp(top_rim[next], sample_ratio);

                vertices[layout.cap_index(ring, corner, sample)] =
                    Vec3::new(point.x, height, point.z);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::rings::build_rims;

    fn cap_vertices(spec: &PolygonSpec) -> (VertexLayout, Vec<Vec3>) {
        let layout = spec.layout();
        let rims = build_rims(spec);
        let mut vertices = vec![Vec3::ZERO; layout.vertices_len()];
        write_cap(spec, &layout, &rims.top, &mut vertices);
        (layout, vertices)
    }

    fn hexagon(sampling: u32, heights: &[f32], slope: f32, curving: bool) -> PolygonSpec {
        let mut spec = PolygonSpec::default();
        spec.set_to_regular_polygon(6, sampling, 0.0, 1.0, 1.0, 0.0);
        spec.set_heights(heights, slope, curving, 0.0);
        spec
    }

    #[test]
    fn test_apex_at_center_height() {
        let spec = hexagon(4, &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0], 0.0, false);
        let (layout, vertices) = cap_vertices(&spec);
        let apex = vertices[layout.apex_index()];
        assert_eq!(apex.x, 0.0);
        assert_eq!(apex.z, 0.0);
        assert!((apex.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_outer_ring_matches_top_rim() {
        let spec = hexagon(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 0.5, false);
        let (layout, vertices) = cap_vertices(&spec);
        let rims = build_rims(&spec);

        for corner in 0..6 {
            let v = vertices[layout.cap_index(3, corner, 0)];
            assert!((v.x - rims.top[corner].x).abs() < 1e-6);
            assert!((v.z - rims.top[corner].z).abs() < 1e-6);
            assert!((v.y - spec.poly_heights()[corner]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_flat_heights_give_flat_cap() {
        let spec = hexagon(5, &[1.5], 0.0, false);
        let (layout, vertices) = cap_vertices(&spec);

        for v in &vertices[layout.cap_start()..] {
            assert!((v.y - 1.5).abs() < 1e-5, "cap vertex at {} not flat", v.y);
        }
    }

    #[test]
    fn test_inner_rings_shrink() {
        let spec = hexagon(4, &[1.0], 0.0, false);
        let (layout, vertices) = cap_vertices(&spec);

        for ring in 1..=4 {
            let expected = ring as f32 / 4.0;
            let v = vertices[layout.cap_index(ring, 0, 0)];
            assert!((Vec3::new(v.x, 0.0, v.z).length() - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_curving_creased_slope_uses_lateral_height() {
        // Slope -1 gives exponent 0, so every ring takes its lateral height
        let spec = hexagon(4, &[2.0], -1.0, true);
        let (layout, vertices) = cap_vertices(&spec);

        for ring in 1..=4 {
            let ratio = ring as f32 / 4.0;
            let v = vertices[layout.cap_index(ring, 2, 0)];
            assert!((v.y - 2.0 * ratio).abs() < 1e-5);
        }
    }

    #[test]
    fn test_curving_dome_stays_between_center_and_lateral() {
        let spec = hexagon(6, &[1.0, 3.0, 1.0, 3.0, 1.0, 3.0], 1.0, true);
        let (layout, vertices) = cap_vertices(&spec);

        for v in &vertices[layout.cap_start()..] {
            assert!(v.is_finite());
            assert!(v.y <= 3.0 + 1e-5);
            assert!(v.y >= 0.0);
        }
    }
}
